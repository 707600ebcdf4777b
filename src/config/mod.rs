//! Configuration module for the normalizer
//!
//! This module provides the `NormalizerConfig` struct, its builder and JSON
//! loading, with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::NormalizerConfigBuilder;
pub use types::NormalizerConfig;
