//! In-memory representation of a loaded configuration document.
//!
//! Every supported serialization format is converted into the same
//! [`ConfigValue`] tree before any comparison happens, so the differ never
//! needs to know where a value came from.

mod format;
mod value;

pub use format::ConfigFormat;
pub use value::{ConfigMap, ConfigValue};

/// A decoded configuration file: its top-level mapping and the format that
/// accepted it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    /// Top-level keys in document order
    pub entries: ConfigMap,
    /// Format whose decoder produced `entries`
    pub format: ConfigFormat,
}

impl ConfigDocument {
    #[must_use]
    pub const fn new(entries: ConfigMap, format: ConfigFormat) -> Self {
        Self { entries, format }
    }

    /// Number of top-level keys
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }
}
