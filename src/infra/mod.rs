//! Infrastructure layer — concrete adapters for the application ports.

pub mod flatpak;

pub use flatpak::{DEFAULT_CMD_TIMEOUT, FlatpakCli};
