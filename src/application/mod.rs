//! Application layer — orchestration over the domain, behind port traits.

pub mod controller;
pub mod ports;

pub use controller::{ApplyOutcome, Phase, ResetOutcome, SettingsController};
pub use ports::OverrideStore;
