//! Unified error types for configdiff.
//!
//! Every failure that can abort a comparison is represented here. Load
//! errors always carry the path of the offending file so the CLI can name it.

use crate::model::ConfigFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for configdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigDiffError {
    /// The file could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not a usable mapping
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Reasons a document can fail to decode into a configuration mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("JSON parse error: {0}")]
    Json(String),

    #[error("TOML parse error: {0}")]
    Toml(String),

    #[error("{format} content is not valid UTF-8: {message}")]
    InvalidUtf8 {
        format: ConfigFormat,
        message: String,
    },

    #[error("{format} document must be a mapping at the top level, found {found}")]
    NotAMapping {
        format: ConfigFormat,
        found: &'static str,
    },

    #[error("{format} mapping key `{key}` is defined more than once")]
    DuplicateKey {
        format: ConfigFormat,
        key: String,
    },
}

impl DecodeError {
    /// The format whose decoder produced this error.
    #[must_use]
    pub const fn format(&self) -> ConfigFormat {
        match self {
            Self::Yaml(_) => ConfigFormat::Yaml,
            Self::Json(_) => ConfigFormat::Json,
            Self::Toml(_) => ConfigFormat::Toml,
            Self::InvalidUtf8 { format, .. }
            | Self::NotAMapping { format, .. }
            | Self::DuplicateKey { format, .. } => *format,
        }
    }
}

impl From<serde_yaml::Error> for DecodeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<toml::de::Error> for DecodeError {
    fn from(err: toml::de::Error) -> Self {
        // toml renders a multi-line snippet; keep the diagnostic on one line
        Self::Toml(err.message().to_string())
    }
}

// ============================================================================
// Error construction helpers
// ============================================================================

impl ConfigDiffError {
    /// Create an IO error with path context
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a decode error with path context
    pub fn decode(path: impl AsRef<Path>, source: DecodeError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Path of the file that failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } => path,
        }
    }

    /// Whether this is a decode (rather than IO) failure.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Convenient Result type for configdiff operations
pub type Result<T> = std::result::Result<T, ConfigDiffError>;
