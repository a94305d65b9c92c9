//! Decoder trait and the per-format implementations.
//!
//! Each decoder turns raw bytes into a top-level [`ConfigMap`]. A document
//! whose top level is not a mapping is rejected, except for an empty or
//! `null` document, which decodes to an empty mapping.

use crate::error::DecodeError;
use crate::model::{ConfigFormat, ConfigMap, ConfigValue};
use serde::Deserialize;

/// A decoder for one serialization format.
pub trait ConfigDecoder {
    /// The format this decoder handles.
    fn format(&self) -> ConfigFormat;

    /// Decode `bytes` into a top-level configuration mapping.
    fn decode(&self, bytes: &[u8]) -> Result<ConfigMap, DecodeError>;
}

/// YAML decoder backed by `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

/// JSON decoder backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

/// TOML decoder backed by `toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDecoder;

impl ConfigDecoder for YamlDecoder {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Yaml
    }

    fn decode(&self, bytes: &[u8]) -> Result<ConfigMap, DecodeError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ConfigMap::new());
        }
        // Only the first document of a multi-document stream is compared
        let Some(document) = serde_yaml::Deserializer::from_slice(bytes).next() else {
            return Ok(ConfigMap::new());
        };
        let value = serde_yaml::Value::deserialize(document)?;
        require_mapping(ConfigValue::try_from(value)?, self.format())
    }
}

impl ConfigDecoder for JsonDecoder {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }

    fn decode(&self, bytes: &[u8]) -> Result<ConfigMap, DecodeError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        require_mapping(ConfigValue::from(value), self.format())
    }
}

impl ConfigDecoder for TomlDecoder {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Toml
    }

    fn decode(&self, bytes: &[u8]) -> Result<ConfigMap, DecodeError> {
        let text = std::str::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8 {
            format: self.format(),
            message: e.to_string(),
        })?;
        // A TOML document is always a table at the top level
        let table: toml::Table = toml::from_str(text)?;
        require_mapping(ConfigValue::from(toml::Value::Table(table)), self.format())
    }
}

/// Get the decoder for a format.
#[must_use]
pub fn decoder_for(format: ConfigFormat) -> &'static dyn ConfigDecoder {
    match format {
        ConfigFormat::Yaml => &YamlDecoder,
        ConfigFormat::Json => &JsonDecoder,
        ConfigFormat::Toml => &TomlDecoder,
    }
}

fn require_mapping(value: ConfigValue, format: ConfigFormat) -> Result<ConfigMap, DecodeError> {
    match value {
        ConfigValue::Mapping(map) => Ok(map),
        ConfigValue::Null => Ok(ConfigMap::new()),
        other => Err(DecodeError::NotAMapping {
            format,
            found: other.kind(),
        }),
    }
}
