//! JSON report generator.

use super::migration::migration_lines;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffSummary, ValueChange};
use crate::model::ConfigValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON report generator
///
/// Emits one pretty-printed object: report metadata, the summary counts,
/// the four key buckets and the migration lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                left_path: config.metadata.left_path.as_deref(),
                right_path: config.metadata.right_path.as_deref(),
            },
            summary: result.summary,
            common: &result.common,
            only_left: &result.only_left,
            only_right: &result.only_right,
            changed: &result.changed,
            migration: migration_lines(result),
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: DiffSummary,
    common: &'a BTreeMap<String, ConfigValue>,
    only_left: &'a BTreeMap<String, ConfigValue>,
    only_right: &'a BTreeMap<String, ConfigValue>,
    changed: &'a BTreeMap<String, ValueChange>,
    migration: Vec<String>,
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    left_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right_path: Option<&'a str>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}
