//! `flatsize run` — launch an application fire-and-forget.

use anyhow::Result;

use crate::application::ports::OverrideStore;
use crate::application::SettingsController;
use crate::output::OutputContext;

/// Run the run command.
///
/// The spawn is not awaited: only a failure to start is reported, never the
/// launched application's own exit status.
///
/// # Errors
///
/// Returns an error if the application process could not be started.
pub async fn run(ctx: &OutputContext, store: impl OverrideStore, app_id: &str) -> Result<()> {
    let mut controller = SettingsController::new(store);
    controller.select(app_id).await;
    controller.launch()?;
    ctx.success(&format!("Launched {app_id}"));
    Ok(())
}
