//! Configuration type definitions.

use super::validation::ConfigError;
use crate::reports::ReportFormat;
use std::path::PathBuf;

// ============================================================================
// Command Configuration
// ============================================================================

/// Configuration for a diff run
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl DiffConfig {
    /// Start building a `DiffConfig`.
    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder::new()
    }
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the baseline config (config1)
    pub left: PathBuf,
    /// Path to the compared config (config2)
    pub right: PathBuf,
}

// ============================================================================
// Shared Configuration Types
// ============================================================================

/// Output configuration
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Exit with code 2 if any changes detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for constructing `DiffConfig` with fluent API.
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    left: Option<PathBuf>,
    right: Option<PathBuf>,
    output: OutputConfig,
    behavior: BehaviorConfig,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn left_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.left = Some(path.into());
        self
    }

    #[must_use]
    pub fn right_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.right = Some(path.into());
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> Result<DiffConfig, ConfigError> {
        let left = self
            .left
            .ok_or_else(|| ConfigError::missing("paths.left", "config1 path is required"))?;
        let right = self
            .right
            .ok_or_else(|| ConfigError::missing("paths.right", "config2 path is required"))?;

        Ok(DiffConfig {
            paths: DiffPaths { left, right },
            output: self.output,
            behavior: self.behavior,
        })
    }
}
