//! CLI command handlers.
//!
//! Handlers hold the logic behind the command line and are invoked by
//! `main.rs`; they return an exit code instead of exiting so they stay
//! testable.

mod args;
mod diff;

pub use args::{error_line, resolve_configs, Invocation, USAGE};
pub use diff::run_diff;

// Re-export config types used by handlers
pub use crate::config::DiffConfig;
