//! Languages the blog's highlighter has grammars for
//!
//! Mirrors the grammar set registered with the editor so captions and
//! language pickers agree with what the normalizer emits.

use serde::Serialize;

/// A highlighter language and its caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub value: &'static str,
    pub label: &'static str,
}

pub static SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage {
        value: "javascript",
        label: "JavaScript",
    },
    SupportedLanguage {
        value: "typescript",
        label: "TypeScript",
    },
    SupportedLanguage {
        value: "python",
        label: "Python",
    },
    SupportedLanguage {
        value: "html",
        label: "HTML",
    },
    SupportedLanguage {
        value: "css",
        label: "CSS",
    },
    SupportedLanguage {
        value: "java",
        label: "Java",
    },
    SupportedLanguage {
        value: "cpp",
        label: "C++",
    },
    SupportedLanguage {
        value: "json",
        label: "JSON",
    },
    SupportedLanguage {
        value: "sql",
        label: "SQL",
    },
    SupportedLanguage {
        value: "plaintext",
        label: "Text",
    },
];

/// Look up a language by its normalized identifier
#[must_use]
pub fn find_language(value: &str) -> Option<&'static SupportedLanguage> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.value == value)
}

/// Check whether the highlighter has a grammar for `value`
#[must_use]
pub fn is_supported(value: &str) -> bool {
    find_language(value).is_some()
}

/// Caption for a language; unknown identifiers label as themselves
#[must_use]
pub fn language_label(value: &str) -> &str {
    find_language(value).map_or(value, |lang| lang.label)
}
