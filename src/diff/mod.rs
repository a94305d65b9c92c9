//! Set-based diff over the top-level keys of two configuration documents.
//!
//! # Example
//!
//! ```
//! use configdiff::diff::diff_configs;
//! use configdiff::model::{ConfigMap, ConfigValue};
//!
//! let mut old = ConfigMap::new();
//! old.insert("port".into(), ConfigValue::Integer(80));
//! let mut new = ConfigMap::new();
//! new.insert("port".into(), ConfigValue::Integer(443));
//!
//! let result = diff_configs(&old, &new);
//! assert_eq!(result.changed["port"].new, "443");
//! ```

mod engine;
mod result;

pub use engine::diff_configs;
pub use result::{DiffResult, DiffSummary, ValueChange};
