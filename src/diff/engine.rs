//! Key-level diff of two configuration mappings.

use super::{DiffResult, ValueChange};
use crate::model::ConfigMap;

/// Partition the top-level keys of two mappings into the four diff buckets.
///
/// Values present on both sides are compared by their rendered form (see
/// [`ConfigValue::render`](crate::model::ConfigValue::render)), so the
/// comparison is purely syntactic: `1` and `1.0`, or two nested mappings with
/// the same entries in a different order, are reported as changed.
pub fn diff_configs(left: &ConfigMap, right: &ConfigMap) -> DiffResult {
    let mut result = DiffResult::new();

    for (key, left_value) in left {
        match right.get(key) {
            Some(right_value) => {
                let old = left_value.render();
                let new = right_value.render();
                if old == new {
                    result.common.insert(key.clone(), left_value.clone());
                } else {
                    result.changed.insert(key.clone(), ValueChange { old, new });
                }
            }
            None => {
                result.only_left.insert(key.clone(), left_value.clone());
            }
        }
    }

    for (key, right_value) in right {
        if !left.contains_key(key) {
            result.only_right.insert(key.clone(), right_value.clone());
        }
    }

    result.calculate_summary();
    tracing::debug!(
        "Diff: {} common, {} only left, {} only right, {} changed",
        result.summary.common,
        result.summary.only_left,
        result.summary.only_right,
        result.summary.changed
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigValue;

    fn map(entries: &[(&str, ConfigValue)]) -> ConfigMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_changed_and_common() {
        let left = map(&[("host", "a".into()), ("port", "1".into())]);
        let right = map(&[("host", "a".into()), ("port", "2".into())]);

        let result = diff_configs(&left, &right);

        assert_eq!(result.common.len(), 1);
        assert_eq!(result.common["host"], ConfigValue::from("a"));
        assert_eq!(result.changed["port"], ValueChange::new("1", "2"));
        assert!(result.only_left.is_empty());
        assert!(result.only_right.is_empty());
        assert_eq!(result.summary.total_changes, 1);
    }

    #[test]
    fn test_disjoint_keys() {
        let left = map(&[("x", ConfigValue::Integer(1))]);
        let right = map(&[("y", ConfigValue::Integer(2))]);

        let result = diff_configs(&left, &right);

        assert_eq!(result.only_left["x"], ConfigValue::Integer(1));
        assert_eq!(result.only_right["y"], ConfigValue::Integer(2));
        assert!(result.common.is_empty());
        assert!(result.changed.is_empty());
        assert_eq!(result.summary.total_changes, 2);
    }

    #[test]
    fn test_empty_inputs() {
        let result = diff_configs(&ConfigMap::new(), &ConfigMap::new());
        assert!(result.is_identical());
        assert_eq!(result.key_count(), 0);
        assert_eq!(result.summary.total_changes, 0);
    }

    #[test]
    fn test_integer_vs_float_is_changed() {
        let left = map(&[("ratio", ConfigValue::Integer(1))]);
        let right = map(&[("ratio", ConfigValue::Float(1.0))]);

        let result = diff_configs(&left, &right);
        assert_eq!(result.changed["ratio"], ValueChange::new("1", "1.0"));
    }

    #[test]
    fn test_string_and_integer_render_alike() {
        let left = map(&[("port", "8080".into())]);
        let right = map(&[("port", ConfigValue::Integer(8080))]);

        let result = diff_configs(&left, &right);
        assert!(result.common.contains_key("port"));
    }

    #[test]
    fn test_nested_key_order_is_changed() {
        let ab = ConfigValue::Mapping(map(&[
            ("a", ConfigValue::Integer(1)),
            ("b", ConfigValue::Integer(2)),
        ]));
        let ba = ConfigValue::Mapping(map(&[
            ("b", ConfigValue::Integer(2)),
            ("a", ConfigValue::Integer(1)),
        ]));

        let result = diff_configs(&map(&[("db", ab)]), &map(&[("db", ba)]));
        assert_eq!(
            result.changed["db"],
            ValueChange::new("{a: 1, b: 2}", "{b: 2, a: 1}")
        );
    }

    #[test]
    fn test_buckets_iterate_sorted() {
        let left = map(&[
            ("zeta", ConfigValue::Null),
            ("alpha", ConfigValue::Null),
            ("mid", ConfigValue::Null),
        ]);
        let result = diff_configs(&left, &ConfigMap::new());
        let removed: Vec<&str> = result.removed_keys().collect();
        assert_eq!(removed, vec!["alpha", "mid", "zeta"]);
    }
}
