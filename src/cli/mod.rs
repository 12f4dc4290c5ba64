//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! business logic for a specific CLI subcommand.

mod config;
mod diff;
mod validate;

pub use config::{run_config_init, run_config_path, run_config_show};
pub use diff::run_diff;
pub use validate::run_validate;

// Re-export config types used by handlers
pub use crate::config::DiffConfig;
