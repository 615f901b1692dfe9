//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use crate::domain::StoreError;

/// Abstraction over the sandbox override store, enabling test doubles.
///
/// The production implementation shells out to the `flatpak` binary with
/// `--user` scope. All methods except [`OverrideStore::run`] block until the
/// store call completes; `run` is fire-and-forget.
#[allow(async_fn_in_trait)]
pub trait OverrideStore {
    /// List installed applications.
    ///
    /// Returns the store's raw enumeration output: tab-separated records of
    /// (display name, application id), one per line.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] if the store binary cannot be invoked,
    /// [`StoreError::QueryFailed`] if it ran but reported failure.
    async fn list_apps(&self) -> Result<String, StoreError>;

    /// Show the current override directives for one application.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] or [`StoreError::QueryFailed`].
    async fn show_overrides(&self, app_id: &str) -> Result<String, StoreError>;

    /// Set one environment-variable override.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] or [`StoreError::WriteFailed`] carrying
    /// the variable name.
    async fn set_override(&self, app_id: &str, name: &str, value: &str) -> Result<(), StoreError>;

    /// Remove one environment-variable override. Unsetting a variable that
    /// was never set is a harmless no-op at the store level.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] or [`StoreError::WriteFailed`].
    async fn unset_override(&self, app_id: &str, name: &str) -> Result<(), StoreError>;

    /// Launch the application without waiting for it to exit.
    ///
    /// Reports only whether the process could be started; the launched
    /// application's runtime behavior is unobserved.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] if the spawn itself fails.
    fn run(&self, app_id: &str) -> Result<(), StoreError>;
}
