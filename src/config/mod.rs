//! Runtime configuration for a diff run.
//!
//! configdiff reads no configuration file; a [`DiffConfig`] is assembled from
//! command-line flags, or programmatically through [`DiffConfigBuilder`]:
//!
//! ```
//! use configdiff::config::{DiffConfig, Validatable};
//! use configdiff::ReportFormat;
//!
//! let config = DiffConfig::builder()
//!     .left_path("old.yaml")
//!     .right_path("new.yaml")
//!     .output_format(ReportFormat::Json)
//!     .fail_on_change(true)
//!     .build()
//!     .expect("both paths set");
//! assert!(config.is_valid());
//! ```

mod types;
mod validation;

pub use types::{BehaviorConfig, DiffConfig, DiffConfigBuilder, DiffPaths, OutputConfig};
pub use validation::{ConfigError, Validatable};
