//! Format selection for configuration files.
//!
//! A recognized extension pins exactly one decoder. Anything else falls back
//! to an ordered candidate list that is tried until one decoder succeeds.

use crate::model::ConfigFormat;
use std::path::Path;

/// Decoders tried, in order, when the extension does not identify a format.
pub const FALLBACK_ORDER: &[ConfigFormat] = &[ConfigFormat::Yaml, ConfigFormat::Json];

/// Ordered list of formats to attempt for a path.
///
/// A plan always holds at least one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodePlan {
    primary: ConfigFormat,
    fallbacks: Vec<ConfigFormat>,
    /// Whether the plan came from the file extension
    pinned: bool,
}

impl DecodePlan {
    /// Build the plan for a file path.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        ConfigFormat::from_path(path).map_or_else(Self::fallback, Self::pinned)
    }

    /// A plan that tries a single format and nothing else.
    #[must_use]
    pub const fn pinned(format: ConfigFormat) -> Self {
        Self {
            primary: format,
            fallbacks: Vec::new(),
            pinned: true,
        }
    }

    /// The plan used when the format is unknown.
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_candidates(FALLBACK_ORDER)
    }

    /// A plan over an explicit candidate list. An empty list means
    /// [`FALLBACK_ORDER`].
    #[must_use]
    pub fn from_candidates(candidates: &[ConfigFormat]) -> Self {
        match candidates.split_first() {
            Some((&primary, rest)) => Self {
                primary,
                fallbacks: rest.to_vec(),
                pinned: false,
            },
            None => Self::fallback(),
        }
    }

    /// The first format attempted.
    #[must_use]
    pub const fn primary(&self) -> ConfigFormat {
        self.primary
    }

    /// Formats attempted, in order, after the primary one fails.
    #[must_use]
    pub fn fallbacks(&self) -> &[ConfigFormat] {
        &self.fallbacks
    }

    /// Every format in the order it will be attempted.
    #[must_use]
    pub fn candidates(&self) -> Vec<ConfigFormat> {
        std::iter::once(self.primary)
            .chain(self.fallbacks.iter().copied())
            .collect()
    }

    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }
}
