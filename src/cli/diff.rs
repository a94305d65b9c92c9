//! Diff command handler.

use crate::config::DiffConfig;
use crate::diff::{diff_configs, DiffResult};
use crate::pipeline::{exit_codes, load_config_with_context, output_report};
use anyhow::Result;

/// Run a comparison, returning the desired exit code.
///
/// config1 is loaded before config2; if it fails, config2 is never read.
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let left = load_config_with_context(&config.paths.left, quiet)?;
    let right = load_config_with_context(&config.paths.right, quiet)?;

    let result = diff_configs(&left.entries, &right.entries);

    if !quiet {
        tracing::info!(
            "Diff complete: {} common, {} removed, {} added, {} changed",
            result.summary.common,
            result.summary.only_left,
            result.summary.only_right,
            result.summary.changed
        );
    }

    output_report(&config, &result)?;

    Ok(determine_exit_code(&config, &result))
}

/// Determine the appropriate exit code based on diff results and config flags.
const fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_change && result.summary.total_changes > 0 {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigDiffError;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    fn config(left: &Path, right: &Path, out: &Path, fail_on_change: bool) -> DiffConfig {
        DiffConfig::builder()
            .left_path(left)
            .right_path(right)
            .output_file(Some(out.to_path_buf()))
            .fail_on_change(fail_on_change)
            .quiet(true)
            .build()
            .expect("paths set")
    }

    #[test]
    fn test_changes_exit_zero_by_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let left = write(dir.path(), "a.yaml", "x: 1\n");
        let right = write(dir.path(), "b.yaml", "y: 2\n");
        let out = dir.path().join("report.txt");

        let code = run_diff(config(&left, &right, &out, false)).expect("diff runs");
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(out.exists());
    }

    #[test]
    fn test_fail_on_change() {
        let dir = tempfile::tempdir().expect("tempdir");
        let left = write(dir.path(), "a.yaml", "x: 1\n");
        let right = write(dir.path(), "b.yaml", "x: 2\n");
        let out = dir.path().join("report.txt");

        let code = run_diff(config(&left, &right, &out, true)).expect("diff runs");
        assert_eq!(code, exit_codes::CHANGES_DETECTED);

        let same = run_diff(config(&left, &left, &out, true)).expect("diff runs");
        assert_eq!(same, exit_codes::SUCCESS);
    }

    #[test]
    fn test_left_failure_stops_before_right() {
        let dir = tempfile::tempdir().expect("tempdir");
        let left = write(dir.path(), "bad.yaml", "key: [unclosed\n");
        let right = dir.path().join("never-created.yaml");
        let out = dir.path().join("report.txt");

        let err = run_diff(config(&left, &right, &out, false)).unwrap_err();
        let err = err
            .downcast_ref::<ConfigDiffError>()
            .expect("load error propagates unchanged");
        assert!(err.is_decode());
        assert_eq!(err.path(), left.as_path());
        assert!(!out.exists());
    }
}
