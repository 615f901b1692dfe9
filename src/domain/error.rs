//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::process`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via `?`.

use thiserror::Error;

// ── Store errors ──────────────────────────────────────────────────────────────

/// Failures reported by the sandbox override store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The flatpak binary could not be invoked at all.
    #[error("flatpak command not found. Is Flatpak installed?")]
    Unavailable,

    /// The store ran but reported failure for a read operation.
    #[error("flatpak query failed: {0}")]
    QueryFailed(String),

    /// The store ran but reported failure for a write operation.
    #[error("failed to write {name}: {reason}")]
    WriteFailed { name: String, reason: String },

    /// The store did not respond within the configured deadline.
    #[error("flatpak did not respond within {seconds}s")]
    Timeout { seconds: u64 },
}

// ── Controller errors ─────────────────────────────────────────────────────────

/// Precondition and orchestration failures in the settings controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("no application selected")]
    NoSelection,

    #[error("unknown variable '{name}'. Valid variables: {valid}")]
    UnknownVariable { name: String, valid: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
