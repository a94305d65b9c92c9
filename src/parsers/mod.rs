//! Configuration file loading.
//!
//! This module reads a file and decodes it into a [`ConfigDocument`]. The
//! format is chosen from the file extension:
//!
//! - `.yaml` / `.yml`: YAML only
//! - `.json`: JSON only
//! - `.toml`: TOML only
//! - anything else: YAML, then JSON; if both fail the JSON error is reported
//!
//! ## Usage
//!
//! ```no_run
//! use configdiff::parsers::load_config;
//! use std::path::Path;
//!
//! let doc = load_config(Path::new("app.yaml")).unwrap();
//! println!("{} keys ({})", doc.key_count(), doc.format);
//! ```

mod detection;
mod traits;

pub use detection::{DecodePlan, FALLBACK_ORDER};
pub use traits::{decoder_for, ConfigDecoder, JsonDecoder, TomlDecoder, YamlDecoder};

use crate::error::{ConfigDiffError, DecodeError, Result};
use crate::model::{ConfigDocument, ConfigFormat};
use std::path::Path;

/// Read and decode a configuration file.
///
/// Fails with [`ConfigDiffError::Io`] if the file cannot be read and with
/// [`ConfigDiffError::Decode`] if no candidate decoder accepts the content.
pub fn load_config(path: &Path) -> Result<ConfigDocument> {
    let bytes = std::fs::read(path).map_err(|e| ConfigDiffError::io(path, e))?;
    let plan = DecodePlan::for_path(path);
    tracing::debug!(
        "Decoding {} as {:?} (pinned: {})",
        path.display(),
        plan.candidates(),
        plan.is_pinned()
    );
    decode_with_plan(&bytes, &plan).map_err(|e| ConfigDiffError::decode(path, e))
}

/// Decode in-memory content with a single, known format.
pub fn decode(bytes: &[u8], format: ConfigFormat) -> std::result::Result<ConfigDocument, DecodeError> {
    decode_with_plan(bytes, &DecodePlan::pinned(format))
}

/// Decode in-memory content by trying each candidate in order.
///
/// Stops at the first decoder that succeeds. If all fail, the error of the
/// last attempted decoder is returned.
pub fn decode_with_candidates(
    bytes: &[u8],
    candidates: &[ConfigFormat],
) -> std::result::Result<ConfigDocument, DecodeError> {
    decode_with_plan(bytes, &DecodePlan::from_candidates(candidates))
}

fn decode_with_plan(
    bytes: &[u8],
    plan: &DecodePlan,
) -> std::result::Result<ConfigDocument, DecodeError> {
    let mut outcome = attempt(bytes, plan.primary());
    for &format in plan.fallbacks() {
        if outcome.is_ok() {
            break;
        }
        outcome = attempt(bytes, format);
    }
    outcome
}

fn attempt(bytes: &[u8], format: ConfigFormat) -> std::result::Result<ConfigDocument, DecodeError> {
    decoder_for(format)
        .decode(bytes)
        .map(|entries| ConfigDocument::new(entries, format))
        .map_err(|e| {
            tracing::debug!("{} decoder rejected content: {}", format, e);
            e
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigValue;

    #[test]
    fn test_fallback_accepts_json_via_yaml() {
        // JSON is valid YAML, so the first candidate already succeeds
        let doc = decode_with_candidates(br#"{"a": 1}"#, FALLBACK_ORDER).expect("decodes");
        assert_eq!(doc.format, ConfigFormat::Yaml);
        assert_eq!(doc.entries["a"], ConfigValue::Integer(1));
    }

    #[test]
    fn test_fallback_reports_last_error() {
        let err = decode_with_candidates(b"just a string", FALLBACK_ORDER)
            .expect_err("scalar document is rejected by both decoders");
        assert!(matches!(err, DecodeError::Json(_)), "got {err:?}");
    }

    #[test]
    fn test_pinned_json_does_not_fall_back() {
        let err = decode(b"key: value\n", ConfigFormat::Json).expect_err("not json");
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/configdiff/app.yaml"))
            .expect_err("missing file");
        assert!(!err.is_decode());
        assert!(err.to_string().contains("/nonexistent/configdiff/app.yaml"));
    }
}
