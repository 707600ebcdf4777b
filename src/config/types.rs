//! Core configuration type for the normalizer
//!
//! `NormalizerConfig` can be built in code through
//! [`NormalizerConfig::builder`] or deserialized from JSON. Both paths
//! validate, so a constructed config is always safe to interpolate into markup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ConfigError, Result};
use crate::normalizer::language_aliases::{is_valid_language_token, normalize_language};
use crate::utils::{DEFAULT_CONTAINER_CLASS, DEFAULT_LEGACY_MARKER, FALLBACK_LANGUAGE};

/// Normalizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Substrings marking content from the previous editor; such input is left untouched
    pub(crate) legacy_markers: Vec<String>,

    /// Class placed on every normalized `<pre>` container.
    ///
    /// **INVARIANT:** ASCII letters, digits, `-` and `_` only (checked in `validate`).
    pub(crate) container_class: String,

    /// Run the signature table on blocks without a `language-*` class
    pub(crate) detect_languages: bool,

    /// Language for bare blocks the signature table does not recognize, and
    /// for every bare block when detection is disabled.
    ///
    /// **INVARIANT:** already passed through the alias table.
    pub(crate) fallback_language: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            legacy_markers: vec![DEFAULT_LEGACY_MARKER.to_string()],
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            detect_languages: true,
            fallback_language: FALLBACK_LANGUAGE.to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Parse and validate a JSON document; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown fields and
    /// a validation error for unsafe values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read, parse and validate a JSON config file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file can't be read, otherwise as
    /// [`NormalizerConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Normalize aliases and check every invariant
    pub(crate) fn validated(mut self) -> Result<Self> {
        if self.legacy_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::EmptyLegacyMarker);
        }

        let class_ok = !self.container_class.is_empty()
            && self
                .container_class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !class_ok {
            return Err(ConfigError::InvalidContainerClass(self.container_class));
        }

        let fallback = normalize_language(&self.fallback_language);
        if !is_valid_language_token(&fallback) {
            return Err(ConfigError::InvalidLanguage(self.fallback_language));
        }
        self.fallback_language = fallback;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = NormalizerConfig::default();
        assert_eq!(config.clone().validated().unwrap(), config);
    }

    #[test]
    fn test_fallback_language_is_normalized() {
        let config = NormalizerConfig {
            fallback_language: "TEXT".to_string(),
            ..NormalizerConfig::default()
        };
        assert_eq!(config.validated().unwrap().fallback_language, "plaintext");
    }

    #[test]
    fn test_rejects_quote_in_container_class() {
        let config = NormalizerConfig {
            container_class: "code\" onclick=\"x".to_string(),
            ..NormalizerConfig::default()
        };
        assert!(matches!(
            config.validated(),
            Err(ConfigError::InvalidContainerClass(_))
        ));
    }
}
