//! Shared defaults for the normalizer
//!
//! This module contains default values used by the configuration layer and
//! the command-line front-end so the two never drift apart.

/// Marker left in content authored with the previous (Quill) editor
///
/// Quill's syntax module tags its code blocks with `ql-syntax`. Content that
/// still carries it is displayed with the legacy stylesheet and must not be
/// rewritten.
pub const DEFAULT_LEGACY_MARKER: &str = "ql-syntax";

/// Class placed on every normalized code block container
///
/// The blog stylesheet keys its caption and syntax colors off this class
/// together with the `data-language` attribute.
pub const DEFAULT_CONTAINER_CLASS: &str = "code-block";

/// Language reported when nothing better is known
pub const FALLBACK_LANGUAGE: &str = "plaintext";

/// Maximum input accepted by the command-line front-end: 10 MB
///
/// Blog posts are a few hundred kilobytes at most; anything larger is almost
/// certainly the wrong file.
pub const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;
