//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::process`. All functions are
//! synchronous and take data in, returning data out.

pub mod catalog;
pub mod error;
pub mod overrides;
pub mod registry;

pub use catalog::{AppDescriptor, parse_app_list};
pub use error::{ControllerError, StoreError};
pub use overrides::{OverrideSnapshot, parse_overrides};
pub use registry::{ManagedVariable, SCALING_VARIABLES};
