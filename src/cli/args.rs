//! Positional argument handling for the `configdiff` binary.

use std::path::PathBuf;

/// Usage text printed when fewer than two configs are given.
pub const USAGE: &str = "configdiff - Configuration File Diff Tool

Usage: configdiff <config1> <config2>

Supported formats: YAML, JSON, TOML";

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Fewer than two configs: print [`USAGE`] to stdout and exit 1
    Usage,
    /// Compare `left` against `right`; anything after them is ignored
    Compare {
        left: PathBuf,
        right: PathBuf,
        extra: Vec<PathBuf>,
    },
}

/// Split the positional arguments into config1, config2 and the rest.
pub fn resolve_configs(configs: Vec<PathBuf>) -> Invocation {
    let mut configs = configs.into_iter();
    let (Some(left), Some(right)) = (configs.next(), configs.next()) else {
        return Invocation::Usage;
    };
    Invocation::Compare {
        left,
        right,
        extra: configs.collect(),
    }
}

/// The single line written to stderr when a run aborts.
///
/// Causes are appended only when the outer message does not already carry
/// them; load errors embed their parser message.
pub fn error_line(err: &anyhow::Error) -> String {
    let mut line = format!("Error: {err}");
    for cause in err.chain().skip(1) {
        let cause = cause.to_string();
        if !line.contains(&cause) {
            line.push_str(": ");
            line.push_str(&cause);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigDiffError, DecodeError};

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_no_configs_is_usage() {
        assert_eq!(resolve_configs(Vec::new()), Invocation::Usage);
    }

    #[test]
    fn test_one_config_is_usage() {
        assert_eq!(resolve_configs(paths(&["a.yaml"])), Invocation::Usage);
    }

    #[test]
    fn test_two_configs_compare_in_order() {
        assert_eq!(
            resolve_configs(paths(&["old.yaml", "new.json"])),
            Invocation::Compare {
                left: PathBuf::from("old.yaml"),
                right: PathBuf::from("new.json"),
                extra: Vec::new(),
            }
        );
    }

    #[test]
    fn test_extra_configs_are_kept_aside() {
        let Invocation::Compare { left, extra, .. } =
            resolve_configs(paths(&["a.yaml", "b.yaml", "c.yaml", "d.yaml"]))
        else {
            panic!("expected a comparison");
        };
        assert_eq!(left, PathBuf::from("a.yaml"));
        assert_eq!(extra, paths(&["c.yaml", "d.yaml"]));
    }

    #[test]
    fn test_usage_names_both_arguments() {
        assert!(USAGE.contains("Usage: configdiff <config1> <config2>"));
        assert!(USAGE.starts_with("configdiff - Configuration File Diff Tool"));
    }

    #[test]
    fn test_error_line_does_not_repeat_embedded_cause() {
        let err = anyhow::Error::new(ConfigDiffError::decode(
            "conf/bad.yaml",
            DecodeError::Yaml("did not find expected ',' or ']'".into()),
        ));
        assert_eq!(
            error_line(&err),
            "Error: Failed to decode conf/bad.yaml: YAML parse error: did not find expected ',' or ']'"
        );
    }

    #[test]
    fn test_error_line_appends_context_cause() {
        let err = anyhow::Error::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ))
        .context("Failed to write output to /ro/report.txt");
        let line = error_line(&err);
        assert_eq!(
            line,
            "Error: Failed to write output to /ro/report.txt: permission denied"
        );
        assert!(!line.contains('\n'));
    }
}
