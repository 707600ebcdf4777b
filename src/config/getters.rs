//! Read-only accessors for `NormalizerConfig`

use super::types::NormalizerConfig;

impl NormalizerConfig {
    #[must_use]
    pub fn legacy_markers(&self) -> &[String] {
        &self.legacy_markers
    }

    #[must_use]
    pub fn container_class(&self) -> &str {
        &self.container_class
    }

    #[must_use]
    pub fn detect_languages(&self) -> bool {
        self.detect_languages
    }

    #[must_use]
    pub fn fallback_language(&self) -> &str {
        &self.fallback_language
    }

    /// True when `html` carries any configured legacy marker
    #[must_use]
    pub fn is_legacy(&self, html: &str) -> bool {
        self.legacy_markers.iter().any(|marker| html.contains(marker.as_str()))
    }
}
