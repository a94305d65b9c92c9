//! Migration script rendering.
//!
//! The script is descriptive commentary, not something to execute: one
//! comment line per removed, added or updated key, in that order.

use crate::diff::DiffResult;

/// Heading line of every migration script.
pub const MIGRATION_HEADING: &str = "# Migration from config1 to config2:";

/// Build the body lines of the migration script (without the heading).
///
/// Removals come first, then additions, then updates; keys within each
/// group are sorted.
#[must_use]
pub fn migration_lines(result: &DiffResult) -> Vec<String> {
    let removals = result.removed_keys().map(|k| format!("# Remove: {k}"));
    let additions = result.added_keys().map(|k| format!("# Add: {k}"));
    let updates = result.updated_keys().map(|k| format!("# Update: {k}"));
    removals.chain(additions).chain(updates).collect()
}

/// Render the full migration script, heading included.
#[must_use]
pub fn render_migration_script(result: &DiffResult) -> String {
    std::iter::once(MIGRATION_HEADING.to_string())
        .chain(migration_lines(result))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_configs;
    use crate::model::{ConfigMap, ConfigValue};

    fn map(entries: &[(&str, i64)]) -> ConfigMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), ConfigValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_order_removals_additions_updates() {
        let left = map(&[("b", 1), ("keep", 1), ("z_changed", 1), ("a", 1)]);
        let right = map(&[("keep", 1), ("z_changed", 2), ("new2", 1), ("new1", 1)]);

        let script = render_migration_script(&diff_configs(&left, &right));

        insta::assert_snapshot!(script, @r"
        # Migration from config1 to config2:
        # Remove: a
        # Remove: b
        # Add: new1
        # Add: new2
        # Update: z_changed
        ");
    }

    #[test]
    fn test_no_changes_only_heading() {
        let same = map(&[("a", 1)]);
        let result = diff_configs(&same, &same);
        assert!(migration_lines(&result).is_empty());
        assert_eq!(render_migration_script(&result), MIGRATION_HEADING);
    }
}
