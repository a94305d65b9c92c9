//! Pipeline orchestration for a diff run.
//!
//! The stages are load → diff → report. Each stage is a plain function so the
//! CLI handler and integration tests drive the same code.

mod output;
mod parse;
mod report_stage;

pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::load_config_with_context;
pub use report_stage::{output_report, render_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success: the report was produced (changes or not)
    pub const SUCCESS: i32 = 0;
    /// Usage, I/O or decode error
    pub const ERROR: i32 = 1;
    /// Changes were detected and `--fail-on-change` was given
    pub const CHANGES_DETECTED: i32 = 2;
}
