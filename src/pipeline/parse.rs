//! Config loading stage.

use crate::error::Result;
use crate::model::ConfigDocument;
use std::path::Path;

/// Load a config file, logging progress unless `quiet` is set.
///
/// Errors are returned unchanged so the caller sees which file failed and
/// why.
pub fn load_config_with_context(path: &Path, quiet: bool) -> Result<ConfigDocument> {
    if !quiet {
        tracing::info!("Loading config: {}", path.display());
    }

    let doc = crate::parsers::load_config(path)?;

    if !quiet {
        tracing::info!("Loaded {} top-level keys as {}", doc.key_count(), doc.format);
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigFormat;
    use std::io::Write;

    #[test]
    fn test_load_with_context_reports_format() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("tempfile");
        write!(file, r#"{{"a": 1, "b": [true]}}"#).expect("write");

        let doc = load_config_with_context(file.path(), true).expect("valid JSON");
        assert_eq!(doc.format, ConfigFormat::Json);
        assert_eq!(doc.key_count(), 2);
    }

    #[test]
    fn test_load_with_context_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.yaml");
        let err = load_config_with_context(&missing, true).unwrap_err();
        assert!(!err.is_decode());
        assert_eq!(err.path(), missing.as_path());
    }
}
