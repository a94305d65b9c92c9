//! Diff result structures.

use crate::model::ConfigValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Complete result of comparing two configuration mappings.
///
/// The four buckets partition the union of both key sets: every key lands
/// in exactly one of them. Buckets are ordered maps, so iteration is always
/// in sorted key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// Keys whose rendered values are identical on both sides (left value kept)
    pub common: BTreeMap<String, ConfigValue>,
    /// Keys present only in the first document
    pub only_left: BTreeMap<String, ConfigValue>,
    /// Keys present only in the second document
    pub only_right: BTreeMap<String, ConfigValue>,
    /// Keys present in both documents with differing rendered values
    pub changed: BTreeMap<String, ValueChange>,
}

impl DiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate and update summary statistics
    pub fn calculate_summary(&mut self) {
        self.summary.common = self.common.len();
        self.summary.only_left = self.only_left.len();
        self.summary.only_right = self.only_right.len();
        self.summary.changed = self.changed.len();
        self.summary.total_changes =
            self.summary.only_left + self.summary.only_right + self.summary.changed;
    }

    /// Whether the two documents had the same keys with the same rendered values
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty() && self.changed.is_empty()
    }

    /// Total number of distinct keys across both documents
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.common.len() + self.only_left.len() + self.only_right.len() + self.changed.len()
    }

    /// Keys removed when migrating from the first document to the second
    pub fn removed_keys(&self) -> impl Iterator<Item = &str> {
        self.only_left.keys().map(String::as_str)
    }

    /// Keys added when migrating from the first document to the second
    pub fn added_keys(&self) -> impl Iterator<Item = &str> {
        self.only_right.keys().map(String::as_str)
    }

    /// Keys whose value changes when migrating from the first document to the second
    pub fn updated_keys(&self) -> impl Iterator<Item = &str> {
        self.changed.keys().map(String::as_str)
    }
}

/// Summary statistics for a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub common: usize,
    pub only_left: usize,
    pub only_right: usize,
    pub changed: usize,
    /// Removals, additions and updates combined
    pub total_changes: usize,
}

/// Rendered values of a key whose value differs between the two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueChange {
    pub old: String,
    pub new: String,
}

impl ValueChange {
    #[must_use]
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}
