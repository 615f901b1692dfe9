//! Production [`OverrideStore`] — shells out to the `flatpak` binary.
//!
//! All override operations use `--user` scope, matching where per-user
//! installs keep their overrides. Blocking calls run under a bounded timeout
//! with an explicit kill, so a hung `flatpak` invocation cannot wedge the
//! process. On timeout the child is killed, not left orphaned.

use std::io::ErrorKind;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::AsyncReadExt;

use crate::application::ports::OverrideStore;
use crate::domain::StoreError;

/// Default timeout for flatpak CLI commands (list, override, show).
pub const DEFAULT_CMD_TIMEOUT: Duration = Duration::from_secs(30);

/// Shells out to `flatpak`. `run` is exempt from the timeout — launched
/// applications live as long as they like.
pub struct FlatpakCli {
    timeout: Duration,
}

impl Default for FlatpakCli {
    fn default() -> Self {
        Self::new(DEFAULT_CMD_TIMEOUT)
    }
}

impl FlatpakCli {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run `flatpak <args>` and capture its output, killing the child if the
    /// timeout fires.
    async fn flatpak(&self, args: &[&str]) -> Result<Output, StoreError> {
        let mut child = tokio::process::Command::new("flatpak")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_error)?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                let status = status
                    .map_err(|e| StoreError::QueryFailed(format!("waiting for flatpak: {e}")))?;
                Ok(Output { status, stdout, stderr })
            } => result,
            () = tokio::time::sleep(self.timeout) => {
                let _ = child.kill().await;
                Err(StoreError::Timeout { seconds: self.timeout.as_secs() })
            }
        }
    }
}

fn spawn_error(e: std::io::Error) -> StoreError {
    if e.kind() == ErrorKind::NotFound {
        StoreError::Unavailable
    } else {
        StoreError::QueryFailed(format!("failed to spawn flatpak: {e}"))
    }
}

fn stderr_text(output: &Output) -> String {
    let text = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if text.is_empty() {
        format!("exit status {}", output.status)
    } else {
        text
    }
}

impl OverrideStore for FlatpakCli {
    async fn list_apps(&self) -> Result<String, StoreError> {
        let output = self
            .flatpak(&["list", "--user", "--app", "--columns=name,application"])
            .await?;
        if !output.status.success() {
            return Err(StoreError::QueryFailed(stderr_text(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn show_overrides(&self, app_id: &str) -> Result<String, StoreError> {
        let output = self
            .flatpak(&["override", "--user", "--show", app_id])
            .await?;
        if !output.status.success() {
            return Err(StoreError::QueryFailed(stderr_text(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn set_override(&self, app_id: &str, name: &str, value: &str) -> Result<(), StoreError> {
        let env_arg = format!("--env={name}={value}");
        let output = self
            .flatpak(&["override", "--user", &env_arg, app_id])
            .await?;
        if !output.status.success() {
            return Err(StoreError::WriteFailed {
                name: name.to_string(),
                reason: stderr_text(&output),
            });
        }
        Ok(())
    }

    async fn unset_override(&self, app_id: &str, name: &str) -> Result<(), StoreError> {
        let unset_arg = format!("--unset-env={name}");
        let output = self
            .flatpak(&["override", "--user", &unset_arg, app_id])
            .await?;
        if !output.status.success() {
            return Err(StoreError::WriteFailed {
                name: name.to_string(),
                reason: stderr_text(&output),
            });
        }
        Ok(())
    }

    fn run(&self, app_id: &str) -> Result<(), StoreError> {
        // Fire-and-forget: no kill_on_drop, no output capture, no wait. The
        // launched application's lifetime and exit status are unobserved.
        tokio::process::Command::new("flatpak")
            .args(["run", app_id])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_error)?;
        Ok(())
    }
}
