//! `flatsize reset` — unset every managed override for an application.

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Confirm;

use crate::application::ports::OverrideStore;
use crate::application::{ResetOutcome, SettingsController};
use crate::output::OutputContext;

/// Arguments for the reset command.
#[derive(Args)]
pub struct ResetArgs {
    /// Application id, e.g. org.mozilla.firefox
    pub app_id: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Run the reset command.
///
/// Without `--yes` an interactive prompt gates the reset, defaulting to No;
/// declining performs zero store calls. In a non-interactive session `--yes`
/// is required.
///
/// # Errors
///
/// Returns an error when run non-interactively without `--yes`, or on the
/// first failing store write.
pub async fn run(ctx: &OutputContext, store: impl OverrideStore, args: &ResetArgs) -> Result<()> {
    let confirmed = if args.yes {
        true
    } else {
        anyhow::ensure!(
            ctx.is_tty,
            "refusing to reset without --yes in a non-interactive session"
        );
        Confirm::new()
            .with_prompt(format!(
                "Reset all DPI settings for {}?",
                args.app_id
            ))
            .default(false)
            .interact()
            .context("reading confirmation")?
    };

    let mut controller = SettingsController::new(store);
    controller.select(&args.app_id).await;

    match controller.reset(confirmed).await? {
        ResetOutcome::Reset => {
            ctx.success(&format!("All DPI settings reset for {}", args.app_id));
        }
        ResetOutcome::Declined => {
            ctx.info("Reset cancelled");
        }
    }
    Ok(())
}
