//! Language inference for code blocks
//!
//! Heuristic-based language detection for code content when the markup
//! doesn't carry a `language-*` class.
//!
//! Signatures overlap (TypeScript also looks like JavaScript, a JSON object
//! also looks like a CSS rule), so the table is an ordered slice and the first
//! matching entry wins. Reordering it changes output.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::FALLBACK_LANGUAGE;

/// A language name paired with the regex that identifies it
#[derive(Debug, Clone, Copy)]
pub struct LanguageSignature {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Detection table in priority order
///
/// Keyword languages match case-sensitively on word boundaries so that
/// `FROM` in a query or `delete` inside prose does not look like Python or
/// JavaScript. SQL keywords and HTML tags are case-insensitive.
pub static LANGUAGE_SIGNATURES: &[LanguageSignature] = &[
    LanguageSignature {
        name: "javascript",
        pattern: r"\b(?:function|const|let|var|import|export|require)\b|=>",
    },
    LanguageSignature {
        name: "typescript",
        pattern: r"\b(?:interface|type|declare|enum|namespace)\b|\bimport\b.*\bfrom\b",
    },
    LanguageSignature {
        name: "python",
        pattern: r"\bdef |\bimport |\bfrom |\bprint\b|if __name__|\bclass\s+\w+\s*:",
    },
    LanguageSignature {
        name: "html",
        pattern: r"(?i)</?[a-z][^<>]*>",
    },
    LanguageSignature {
        name: "css",
        pattern: r"(?s)\{.*\}|@media|@import|@keyframes",
    },
    LanguageSignature {
        name: "java",
        pattern: r"\b(?:public|private|protected|class)\b|import java",
    },
    LanguageSignature {
        name: "cpp",
        pattern: r"#include|using namespace|std::|\bcout\b|\bcin\b",
    },
    LanguageSignature {
        name: "json",
        pattern: r"\A\s*[\[{]",
    },
    LanguageSignature {
        name: "sql",
        pattern: r"(?i)\b(?:select|insert|update|delete|from|where|join)\b",
    },
];

/// Compiled form of [`LANGUAGE_SIGNATURES`], same order
static COMPILED_SIGNATURES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    LANGUAGE_SIGNATURES
        .iter()
        .map(|sig| {
            let re = Regex::new(sig.pattern).expect("language signature regex is valid");
            (sig.name, re)
        })
        .collect()
});

/// Infer programming language from plain code text
///
/// Returns the first language whose signature matches, or `plaintext`.
/// The input should already have markup stripped and entities decoded.
///
/// ```
/// # use blog_html_normalizer::normalizer::language_inference::infer_language_from_content;
/// assert_eq!(infer_language_from_content("def foo():\n  pass"), "python");
/// assert_eq!(infer_language_from_content("SELECT * FROM users;"), "sql");
/// assert_eq!(infer_language_from_content("hello world"), "plaintext");
/// ```
#[must_use]
pub fn infer_language_from_content(code: &str) -> &'static str {
    detect_language(code).unwrap_or(FALLBACK_LANGUAGE)
}

/// First matching signature, or `None` when nothing in the table matches
///
/// Lets callers substitute their own fallback for undetected blocks.
#[must_use]
pub fn detect_language(code: &str) -> Option<&'static str> {
    COMPILED_SIGNATURES
        .iter()
        .find(|(_, re)| re.is_match(code))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_order_is_fixed() {
        let names: Vec<_> = LANGUAGE_SIGNATURES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "javascript",
                "typescript",
                "python",
                "html",
                "css",
                "java",
                "cpp",
                "json",
                "sql"
            ]
        );
    }

    #[test]
    fn test_every_signature_compiles() {
        assert_eq!(COMPILED_SIGNATURES.len(), LANGUAGE_SIGNATURES.len());
    }

    #[test]
    fn test_javascript() {
        assert_eq!(infer_language_from_content("const x = 1;"), "javascript");
        assert_eq!(infer_language_from_content("items.map(i => i * 2)"), "javascript");
    }

    #[test]
    fn test_typescript() {
        assert_eq!(
            infer_language_from_content("interface User { name: string }"),
            "typescript"
        );
    }

    #[test]
    fn test_javascript_wins_over_typescript_on_shared_keywords() {
        // `import ... from` matches both; javascript is declared first
        assert_eq!(
            infer_language_from_content("import { x } from './x';"),
            "javascript"
        );
    }

    #[test]
    fn test_python() {
        assert_eq!(infer_language_from_content("def foo():\n  pass"), "python");
        assert_eq!(infer_language_from_content("class Foo:\n    x = 1"), "python");
        assert_eq!(infer_language_from_content("print(42)"), "python");
    }

    #[test]
    fn test_html() {
        assert_eq!(
            infer_language_from_content("<div class=\"card\">hi</div>"),
            "html"
        );
    }

    #[test]
    fn test_css() {
        assert_eq!(infer_language_from_content(".card { color: red; }"), "css");
        assert_eq!(infer_language_from_content("@media screen"), "css");
    }

    #[test]
    fn test_java() {
        assert_eq!(
            infer_language_from_content("public static void main(String[] args)"),
            "java"
        );
    }

    #[test]
    fn test_cpp() {
        assert_eq!(infer_language_from_content("std::cout << value;"), "cpp");
        assert_eq!(infer_language_from_content("#include \"vector.h\""), "cpp");
    }

    #[test]
    fn test_json_array() {
        assert_eq!(infer_language_from_content("[1, 2, 3]"), "json");
    }

    #[test]
    fn test_json_object_is_shadowed_by_css() {
        assert_eq!(infer_language_from_content("{\"a\": 1}"), "css");
    }

    #[test]
    fn test_sql() {
        assert_eq!(infer_language_from_content("SELECT * FROM users;"), "sql");
        assert_eq!(
            infer_language_from_content("update posts set title = 'x' where id = 1"),
            "sql"
        );
    }

    #[test]
    fn test_lowercase_select_from_reads_as_python() {
        // `from ` is a Python keyword and python is checked before sql
        assert_eq!(infer_language_from_content("select id from posts"), "python");
    }

    #[test]
    fn test_decoded_markup_reads_as_html() {
        assert_eq!(infer_language_from_content("<div>hi</div>"), "html");
        assert_eq!(infer_language_from_content("&lt;div&gt;hi&lt;/div&gt;"), "plaintext");
    }

    #[test]
    fn test_detect_language_reports_no_match() {
        assert_eq!(detect_language("just some words"), None);
        assert_eq!(detect_language("SELECT 1"), Some("sql"));
    }

    #[test]
    fn test_plaintext() {
        assert_eq!(infer_language_from_content(""), "plaintext");
        assert_eq!(infer_language_from_content("just some words"), "plaintext");
    }
}
