//! **Compare two configuration files key by key.**
//!
//! `configdiff` loads two YAML, JSON or TOML documents, classifies every
//! top-level key as common, removed, added or changed, and renders the result
//! as a sectioned text report (or JSON) that ends with a commented migration
//! script.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`ConfigValue`], the format-independent value tree every
//!   decoder produces, and [`ConfigDocument`], a decoded top-level mapping.
//! - **[`parsers`]**: reads a file and chooses decoders from its extension.
//!   Unknown extensions are tried as YAML, then JSON.
//! - **[`diff`]**: [`diff_configs`] partitions the keys of two mappings and
//!   compares values by their canonical rendering.
//! - **[`reports`]**: summary and JSON reporters plus the migration script.
//! - **[`pipeline`]** and **[`cli`]**: the load → diff → report stages used
//!   by the `configdiff` binary.
//!
//! ## Diffing Two Files
//!
//! ```no_run
//! use std::path::Path;
//! use configdiff::{diff_configs, load_config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = load_config(Path::new("staging.yaml"))?;
//!     let new = load_config(Path::new("production.json"))?;
//!
//!     let diff = diff_configs(&old.entries, &new.entries);
//!     for key in diff.added_keys() {
//!         println!("+ {key}");
//!     }
//!     for (key, change) in &diff.changed {
//!         println!("~ {key}: {} -> {}", change.old, change.new);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rendering a Report
//!
//! ```
//! use configdiff::reports::{create_reporter_with_options, ReportConfig};
//! use configdiff::{diff_configs, ConfigMap, ConfigValue, ReportFormat};
//!
//! let mut old = ConfigMap::new();
//! old.insert("port".to_string(), ConfigValue::Integer(8080));
//! let mut new = ConfigMap::new();
//! new.insert("port".to_string(), ConfigValue::Integer(9090));
//!
//! let reporter = create_reporter_with_options(ReportFormat::Summary, false);
//! let text = reporter
//!     .generate_diff_report(&diff_configs(&old, &new), &ReportConfig::default())
//!     .unwrap();
//! assert!(text.contains("# Update: port"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` or `left`/`right` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{ConfigError, DiffConfig, DiffConfigBuilder, Validatable};
pub use diff::{diff_configs, DiffResult, DiffSummary, ValueChange};
pub use error::{ConfigDiffError, DecodeError, Result};
pub use model::{ConfigDocument, ConfigFormat, ConfigMap, ConfigValue};
pub use parsers::{decode, decode_with_candidates, load_config, ConfigDecoder};
pub use reports::{ReportFormat, ReportGenerator};
