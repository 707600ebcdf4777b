//! Fluent builder for `NormalizerConfig`
//!
//! Every field has a default, so `NormalizerConfig::builder().build()` is
//! the default configuration. Validation happens once, in `build`.

use crate::errors::Result;

use super::types::NormalizerConfig;

#[derive(Debug, Clone, Default)]
pub struct NormalizerConfigBuilder {
    config: NormalizerConfig,
}

impl NormalizerConfig {
    /// Create a builder for configuring a `NormalizerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }
}

impl From<NormalizerConfig> for NormalizerConfigBuilder {
    /// Start from an existing config, e.g. one loaded from JSON
    fn from(config: NormalizerConfig) -> Self {
        Self { config }
    }
}

impl NormalizerConfigBuilder {
    /// Add a legacy marker on top of the existing ones
    #[must_use]
    pub fn legacy_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.legacy_markers.push(marker.into());
        self
    }

    /// Replace all legacy markers; an empty list disables the legacy check
    #[must_use]
    pub fn legacy_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.legacy_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.config.container_class = class.into();
        self
    }

    #[must_use]
    pub fn detect_languages(mut self, enabled: bool) -> Self {
        self.config.detect_languages = enabled;
        self
    }

    #[must_use]
    pub fn fallback_language(mut self, language: impl Into<String>) -> Self {
        self.config.fallback_language = language.into();
        self
    }

    /// Validate and return the config
    ///
    /// # Errors
    ///
    /// Returns an error if a legacy marker is empty, the container class has
    /// characters outside `[A-Za-z0-9_-]`, or the fallback language is not a
    /// valid language token after alias normalization.
    pub fn build(self) -> Result<NormalizerConfig> {
        self.config.validated()
    }
}
