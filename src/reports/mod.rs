//! Report generation for diff results.
//!
//! Two output formats are provided:
//! - Summary: sectioned, optionally colored text with a migration script
//! - JSON: structured data for programmatic integration
//!
//! Reporters return the rendered report as a `String`; writing it anywhere
//! is left to [`crate::pipeline::write_output`].

mod json;
mod migration;
mod summary;
mod types;

pub use json::JsonReporter;
pub use migration::{migration_lines, render_migration_script, MIGRATION_HEADING};
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_format() {
        assert_eq!(create_reporter(ReportFormat::Summary).format(), ReportFormat::Summary);
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
    }

    #[test]
    fn test_write_diff_report_to_buffer() {
        let reporter = create_reporter_with_options(ReportFormat::Summary, false);
        let mut buf = Vec::new();
        reporter
            .write_diff_report(&DiffResult::new(), &ReportConfig::default(), &mut buf)
            .expect("write to buffer");
        let text = String::from_utf8(buf).expect("utf-8");
        assert!(text.contains("=== CONFIG DIFF REPORT ==="));
        assert!(text.ends_with(MIGRATION_HEADING));
    }
}
