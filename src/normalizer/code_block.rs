//! Normalized code block container

use serde::Serialize;

use super::markup::escape_code_text;

/// Where a block's language came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageOrigin {
    /// A `language-*` class on the `<code>` element
    Explicit,
    /// The signature table
    Detected,
    /// Detection disabled, configured fallback used
    Fallback,
}

/// One code block, reduced to plain text plus a language identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    pub text: String,
    pub origin: LanguageOrigin,
}

impl CodeBlock {
    pub fn new(
        language: impl Into<String>,
        text: impl Into<String>,
        origin: LanguageOrigin,
    ) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
            origin,
        }
    }

    /// Render as `<pre class="{class}" data-language="{lang}">{escaped text}</pre>`
    ///
    /// `container_class` and `language` are trusted here; both are validated
    /// or drawn from fixed character sets before reaching this point.
    pub fn render(&self, container_class: &str) -> String {
        format!(
            r#"<pre class="{}" data-language="{}">{}</pre>"#,
            container_class,
            self.language,
            escape_code_text(&self.text)
        )
    }
}
