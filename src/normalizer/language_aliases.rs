//! Language alias normalization
//!
//! Editors and older posts spell the same language several ways
//! (`js`, `JS`, `javascript`). The table below folds them onto the identifiers
//! the highlighter registers.

use crate::utils::FALLBACK_LANGUAGE;

/// Alias table, checked in order. Each entry maps a set of spellings to one identifier.
static LANGUAGE_ALIASES: &[(&[&str], &str)] = &[
    (&["xml", "html+xml"], "html"),
    (&["c++", "cpp"], "cpp"),
    (&["js"], "javascript"),
    (&["ts"], "typescript"),
    (&["text", "plain", "plaintext"], FALLBACK_LANGUAGE),
];

/// Normalize a raw language token
///
/// Matching is case-insensitive. Unknown tokens pass through lowercased.
///
/// ```
/// # use blog_html_normalizer::normalizer::language_aliases::normalize_language;
/// assert_eq!(normalize_language("JS"), "javascript");
/// assert_eq!(normalize_language("c++"), "cpp");
/// assert_eq!(normalize_language("Rust"), "rust");
/// ```
#[must_use]
pub fn normalize_language(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    LANGUAGE_ALIASES
        .iter()
        .find(|(spellings, _)| spellings.contains(&lower.as_str()))
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(lower)
}

/// Check whether a token is safe to place inside a `data-language` attribute
///
/// Accepts the same character set the explicit-language pass captures.
#[must_use]
pub fn is_valid_language_token(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= 32
        && token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '#' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_aliases() {
        assert_eq!(normalize_language("xml"), "html");
        assert_eq!(normalize_language("HTML+XML"), "html");
        assert_eq!(normalize_language("cpp"), "cpp");
        assert_eq!(normalize_language("ts"), "typescript");
        assert_eq!(normalize_language("Plain"), "plaintext");
        assert_eq!(normalize_language("text"), "plaintext");
    }

    #[test]
    fn test_unknown_alias_passes_through_lowercased() {
        assert_eq!(normalize_language("Go"), "go");
        assert_eq!(normalize_language("c#"), "c#");
        assert_eq!(normalize_language("python"), "python");
    }

    #[test]
    fn test_language_token_validation() {
        assert!(is_valid_language_token("cpp"));
        assert!(is_valid_language_token("c#"));
        assert!(is_valid_language_token("objective-c"));
        assert!(!is_valid_language_token(""));
        assert!(!is_valid_language_token("Rust"));
        assert!(!is_valid_language_token("x\" onload=\"y"));
    }
}
