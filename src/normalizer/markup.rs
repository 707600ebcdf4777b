//! Text extraction helpers for code block contents
//!
//! Editors wrap highlighted tokens in `<span>`s and entity-encode the code,
//! so turning a block's inner HTML into displayable text is three steps:
//! strip tags, decode entities, re-escape `&`, `<` and `>`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Regex to match any tag, including unclosed attribute runs up to the next `>`
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("ANY_TAG regex is valid"));

/// Remove every markup tag, leaving only text nodes
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    ANY_TAG.replace_all(html, "")
}

/// Decode HTML entities (`&lt;`, `&#39;`, ...) back to characters
///
/// Unknown or bare `&` sequences are left alone.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Escape `&`, `<` and `>` so text can't be re-read as markup
pub fn escape_code_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Convert a code block's inner HTML into plain text
///
/// Tags are stripped before decoding so that code which talks about tags
/// (`&lt;div&gt;`) survives as text.
pub fn extract_code_text(inner_html: &str) -> String {
    let stripped = strip_tags(inner_html);
    decode_entities(&stripped).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_removes_highlight_spans() {
        let html = r#"<span class="hljs-keyword">const</span> x = <span class="hljs-number">1</span>;"#;
        assert_eq!(strip_tags(html), "const x = 1;");
    }

    #[test]
    fn test_strip_tags_leaves_lone_angle_bracket() {
        assert_eq!(strip_tags("if a < b"), "if a < b");
    }

    #[test]
    fn test_escape_code_text() {
        assert_eq!(escape_code_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_extract_code_text_decodes_after_stripping() {
        let inner = "<span>&lt;div&gt;</span>hello&lt;/div&gt;";
        assert_eq!(extract_code_text(inner), "<div>hello</div>");
    }

    #[test]
    fn test_extract_code_text_keeps_bare_ampersand() {
        assert_eq!(extract_code_text("a && b"), "a && b");
    }
}
