//! Report output stage.

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::reports::{create_reporter_with_options, ReportConfig};
use anyhow::Result;

use super::{should_use_color, write_output, OutputTarget};

/// Render the report for `result` in the configured format.
///
/// Color is only applied when writing to stdout and neither `--no-color`
/// nor `NO_COLOR` is set.
pub fn render_report(config: &DiffConfig, result: &DiffResult) -> Result<String> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let use_color = output_target.supports_color() && should_use_color(config.output.no_color);

    let report_config = ReportConfig::for_paths(
        config.paths.left.to_string_lossy(),
        config.paths.right.to_string_lossy(),
    );

    let reporter = create_reporter_with_options(config.output.format, use_color);
    Ok(reporter.generate_diff_report(result, &report_config)?)
}

/// Output a diff report to the configured destination.
pub fn output_report(config: &DiffConfig, result: &DiffResult) -> Result<()> {
    let report = render_report(config, result)?;
    let output_target = OutputTarget::from_option(config.output.file.clone());
    write_output(&report, &output_target, config.behavior.quiet)
}
