//! Serialization formats understood by the loader.

use std::fmt;
use std::path::Path;

/// A configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Yaml, Self::Json, Self::Toml];

    /// Human-readable name for this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }

    /// File extensions (without the dot) associated with this format.
    #[must_use]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Yaml => &["yaml", "yml"],
            Self::Json => &["json"],
            Self::Toml => &["toml"],
        }
    }

    /// Map a path's extension to a format. Matching ignores ASCII case.
    ///
    /// Returns `None` when the path has no extension or an unknown one.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_known_extensions() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("dir/a.toml")), Some(ConfigFormat::Toml));
    }

    #[test]
    fn test_from_path_ignores_case() {
        assert_eq!(ConfigFormat::from_path(Path::new("APP.YML")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("app.Json")), Some(ConfigFormat::Json));
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(ConfigFormat::from_path(Path::new("config")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("config.conf")), None);
        assert_eq!(ConfigFormat::from_path(Path::new(".yaml")), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigFormat::Toml.to_string(), "TOML");
    }
}
