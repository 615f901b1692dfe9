//! `flatsize set` — stage and apply scaling overrides.

use anyhow::Result;
use clap::Args;

use crate::application::ports::OverrideStore;
use crate::application::{ApplyOutcome, SettingsController};
use crate::output::OutputContext;

/// Arguments for the set command.
#[derive(Args)]
pub struct SetArgs {
    /// Application id, e.g. org.mozilla.firefox
    pub app_id: String,

    /// Assignments of the form NAME=VALUE; an empty VALUE clears the staged
    /// entry so the variable is skipped on apply
    #[arg(required = true, value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,
}

/// Run the set command.
///
/// Seeds the edit buffer from the application's current overrides, overlays
/// the given assignments, then applies every non-blank entry in registry
/// order. The first store failure aborts the remaining writes.
///
/// # Errors
///
/// Returns an error for malformed assignments, names outside the managed
/// registry, or the first failing store write (named verbatim).
pub async fn run(ctx: &OutputContext, store: impl OverrideStore, args: &SetArgs) -> Result<()> {
    let assignments: Vec<(&str, &str)> = args
        .assignments
        .iter()
        .map(|raw| {
            raw.split_once('=')
                .ok_or_else(|| anyhow::anyhow!("invalid assignment '{raw}': expected NAME=VALUE"))
        })
        .collect::<Result<_>>()?;

    let mut controller = SettingsController::new(store);
    controller.select(&args.app_id).await;
    for (name, value) in assignments {
        controller.set_entry(name, value)?;
    }

    match controller.apply().await? {
        ApplyOutcome::Applied(count) => {
            ctx.success(&format!("Applied {count} setting(s) to {}", args.app_id));
        }
        ApplyOutcome::NothingToApply => {
            ctx.info("No settings were entered to apply");
        }
    }
    Ok(())
}
