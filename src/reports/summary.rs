//! Summary report generator for shell output.
//!
//! Renders the diff as fixed-order sections followed by the migration
//! script. Every key list is sorted so the output is reproducible.

use super::migration::{migration_lines, MIGRATION_HEADING};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;

const SECTION_WIDTH: usize = 50;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bright_red" => format!("\x1b[91m{text}\x1b[0m"),
            "bright_yellow" => format!("\x1b[93m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn section_header(
        &self,
        lines: &mut Vec<String>,
        title: &str,
        count: usize,
        color: &str,
        rule: char,
    ) {
        lines.push(self.color(&format!("{title} ({count}):"), color));
        lines.push(rule.to_string().repeat(SECTION_WIDTH));
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(String::new());
        lines.push(self.color("=== CONFIG DIFF REPORT ===", "cyan"));
        lines.push(String::new());

        if !result.common.is_empty() {
            self.section_header(&mut lines, "Common keys", result.common.len(), "green", '=');
            for key in result.common.keys() {
                lines.push(format!("  {key}"));
            }
            lines.push(String::new());
        }

        if !result.only_left.is_empty() {
            self.section_header(
                &mut lines,
                "Only in config1",
                result.only_left.len(),
                "bright_yellow",
                '-',
            );
            for key in result.removed_keys() {
                lines.push(format!("  {}", self.color(&format!("- {key}"), "red")));
            }
            lines.push(String::new());
        }

        if !result.only_right.is_empty() {
            self.section_header(
                &mut lines,
                "Only in config2",
                result.only_right.len(),
                "bright_yellow",
                '-',
            );
            for key in result.added_keys() {
                lines.push(format!("  {}", self.color(&format!("+ {key}"), "green")));
            }
            lines.push(String::new());
        }

        if !result.changed.is_empty() {
            self.section_header(
                &mut lines,
                "Changed values",
                result.changed.len(),
                "bright_red",
                '-',
            );
            for (key, change) in &result.changed {
                lines.push(format!("  {key}"));
                lines.push(format!("    - old: {}", self.color(&change.old, "red")));
                lines.push(format!("    + new: {}", self.color(&change.new, "green")));
            }
            lines.push(String::new());
        }

        // Migration script
        lines.push(String::new());
        lines.push(self.color("=== MIGRATION SCRIPT ===", "yellow"));
        lines.push(String::new());
        lines.push(MIGRATION_HEADING.to_string());
        lines.extend(migration_lines(result));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
