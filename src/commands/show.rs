//! `flatsize show` — display current overrides and the editable settings.

use anyhow::Result;
use serde_json::json;

use crate::application::ports::OverrideStore;
use crate::application::SettingsController;
use crate::domain::SCALING_VARIABLES;
use crate::output::OutputContext;

/// Run the show command.
///
/// A failed override query does not abort: the error text is shown where the
/// raw override listing would be, and the settings table renders blank.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub async fn run(
    ctx: &OutputContext,
    store: impl OverrideStore,
    app_id: &str,
    json: bool,
) -> Result<()> {
    let mut controller = SettingsController::new(store);
    controller.select(app_id).await;
    let snapshot = controller.snapshot();

    if json {
        let variables: serde_json::Map<String, serde_json::Value> = SCALING_VARIABLES
            .iter()
            .map(|var| {
                let value = controller.buffer_value(var.name).unwrap_or_default();
                (var.name.to_string(), json!(value))
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "app_id": app_id,
                "variables": variables,
            }))?
        );
        return Ok(());
    }

    ctx.header(&format!("Current overrides for {app_id}"));
    if snapshot.raw.trim().is_empty() {
        ctx.info("No overrides set");
    } else {
        for line in snapshot.raw.lines() {
            ctx.line(line);
        }
    }

    ctx.header("DPI settings");
    for var in &SCALING_VARIABLES {
        match controller.buffer_value(var.name) {
            Some(value) if !value.is_empty() => ctx.kv(var.name, value),
            _ => ctx.kv(var.name, &format!("({})", var.hint)),
        }
    }
    Ok(())
}
