//! Report type definitions.

use clap::ValueEnum;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Sectioned text report with migration script
    #[default]
    #[value(alias = "text")]
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Create a config carrying the two compared paths
    pub fn for_paths(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                left_path: Some(left.into()),
                right_path: Some(right.into()),
            },
        }
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default)]
pub struct ReportMetadata {
    /// First (baseline) config file path
    pub left_path: Option<String>,
    /// Second config file path
    pub right_path: Option<String>,
}
