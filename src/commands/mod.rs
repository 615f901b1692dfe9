//! Command implementations

pub mod apps;
pub mod reset;
pub mod run;
pub mod set;
pub mod show;
pub mod vars;
