//! Error types for configuration loading
//!
//! Normalizing HTML never fails; only building or loading a
//! [`NormalizerConfig`](crate::config::NormalizerConfig) can.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error types for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config document is not valid JSON or has the wrong shape
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Container class would not survive interpolation into an attribute
    #[error("Invalid container class '{0}': expected ASCII letters, digits, '-' or '_'")]
    InvalidContainerClass(String),

    /// Fallback language is not a usable language token
    #[error("Invalid fallback language '{0}': expected a short token of [a-z0-9+#-]")]
    InvalidLanguage(String),

    /// An empty legacy marker would match every input
    #[error("Legacy markers must not be empty")]
    EmptyLegacyMarker,
}

impl ConfigError {
    /// Check if the error came from the filesystem rather than the config contents
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::Io { .. })
    }
}
