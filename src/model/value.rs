//! Dynamically-typed configuration values and their canonical rendering.

use super::ConfigFormat;
use crate::error::DecodeError;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// Top-level (or nested) mapping from string keys to values, in document order.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A configuration value of any shape.
///
/// Serializes untagged, so a JSON report shows values as they appeared in
/// the source document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    /// Wide enough for both signed and unsigned 64-bit sources
    Integer(i128),
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    Mapping(ConfigMap),
}

impl ConfigValue {
    /// Short name of the value's shape, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Canonical string form used both for equality and for display.
    ///
    /// The rendering is deterministic but not reversible: a top-level string
    /// is emitted raw, so `"1"` and `1` render identically, while `1` and
    /// `1.0` do not. Mappings keep document order, so two mappings holding
    /// the same entries in a different order render differently.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, false);
        out
    }

    fn render_into(&self, out: &mut String, nested: bool) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Self::Integer(i) => out.push_str(&i.to_string()),
            // Debug keeps the fractional part: 1.0 stays "1.0", not "1"
            Self::Float(f) => out.push_str(&format!("{f:?}")),
            Self::String(s) if nested => out.push_str(&format!("{s:?}")),
            Self::String(s) => out.push_str(s),
            Self::Sequence(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.render_into(out, true);
                }
                out.push(']');
            }
            Self::Mapping(map) => {
                out.push('{');
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(key);
                    out.push_str(": ");
                    value.render_into(out, true);
                }
                out.push('}');
            }
        }
    }

    /// Render a value for use as a mapping key.
    fn into_key(self) -> String {
        match self {
            Self::String(s) => s,
            other => other.render(),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Integer(i.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// ============================================================================
// Conversions from format-specific value trees
// ============================================================================

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i.into())
                } else if let Some(u) = n.as_u64() {
                    Self::Integer(u.into())
                } else {
                    n.as_f64()
                        .map_or_else(|| Self::String(n.to_string()), Self::Float)
                }
            }
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

/// YAML allows non-string keys; they are rendered to text, and two keys
/// that render the same (`1` and `"1"`) are rejected. Merge keys (`<<`)
/// are resolved in place.
impl TryFrom<serde_yaml::Value> for ConfigValue {
    type Error = DecodeError;

    fn try_from(value: serde_yaml::Value) -> Result<Self, Self::Error> {
        use serde_yaml::Value;
        Ok(match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i.into())
                } else if let Some(u) = n.as_u64() {
                    Self::Integer(u.into())
                } else {
                    n.as_f64()
                        .map_or_else(|| Self::String(n.to_string()), Self::Float)
                }
            }
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(map) => Self::Mapping(yaml_mapping(map)?),
            // Tags carry no meaning for comparison; keep the tagged content
            Value::Tagged(tagged) => Self::try_from(tagged.value)?,
        })
    }
}

const YAML_MERGE_KEY: &str = "<<";

enum YamlEntry {
    Plain(String, ConfigValue),
    Merge(Vec<ConfigMap>),
}

/// Convert a YAML mapping, splicing merged entries where the `<<` key sits.
/// Keys written in the mapping itself win over merged ones, and earlier merge
/// sources win over later ones.
fn yaml_mapping(map: serde_yaml::Mapping) -> Result<ConfigMap, DecodeError> {
    let mut entries = Vec::with_capacity(map.len());
    let mut explicit = HashSet::new();
    for (k, v) in map {
        if k.as_str() == Some(YAML_MERGE_KEY) {
            entries.push(YamlEntry::Merge(merge_sources(ConfigValue::try_from(v)?)?));
            continue;
        }
        let key = ConfigValue::try_from(k)?.into_key();
        if !explicit.insert(key.clone()) {
            return Err(DecodeError::DuplicateKey {
                format: ConfigFormat::Yaml,
                key,
            });
        }
        entries.push(YamlEntry::Plain(key, ConfigValue::try_from(v)?));
    }

    let mut out = ConfigMap::with_capacity(entries.len());
    for entry in entries {
        match entry {
            YamlEntry::Plain(key, value) => {
                out.insert(key, value);
            }
            YamlEntry::Merge(sources) => {
                for (key, value) in sources.into_iter().flatten() {
                    if !explicit.contains(&key) && !out.contains_key(&key) {
                        out.insert(key, value);
                    }
                }
            }
        }
    }
    Ok(out)
}

fn merge_sources(value: ConfigValue) -> Result<Vec<ConfigMap>, DecodeError> {
    let invalid = || {
        DecodeError::Yaml("merge key `<<` must reference a mapping or a list of mappings".into())
    };
    match value {
        ConfigValue::Mapping(map) => Ok(vec![map]),
        ConfigValue::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                ConfigValue::Mapping(map) => Ok(map),
                _ => Err(invalid()),
            })
            .collect(),
        _ => Err(invalid()),
    }
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        use toml::Value;
        match value {
            Value::String(s) => Self::String(s),
            Value::Integer(i) => Self::Integer(i.into()),
            Value::Float(f) => Self::Float(f),
            Value::Boolean(b) => Self::Bool(b),
            Value::Datetime(dt) => Self::String(dt.to_string()),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Table(table) => Self::Mapping(
                table
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}
