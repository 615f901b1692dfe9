//! `flatsize apps` — list installed Flatpak applications.

use anyhow::Result;

use crate::application::ports::OverrideStore;
use crate::domain::parse_app_list;
use crate::output::OutputContext;

/// Run the apps command.
///
/// # Errors
///
/// Returns an error if the store cannot be invoked or the enumeration fails;
/// an empty catalog is not an error.
pub async fn run(ctx: &OutputContext, store: impl OverrideStore, json: bool) -> Result<()> {
    let raw = store.list_apps().await?;
    let apps = parse_app_list(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&apps)?);
        return Ok(());
    }

    if apps.is_empty() {
        ctx.info("No Flatpak applications found");
        return Ok(());
    }

    ctx.header("Installed applications");
    for app in &apps {
        ctx.kv(&app.name, &app.app_id);
    }
    ctx.success(&format!("Found {} Flatpak application(s)", apps.len()));
    Ok(())
}
