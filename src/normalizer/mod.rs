//! Blog content normalization - rewrites editor code blocks into one shape
//!
//! Every code block in the output becomes
//! `<pre class="code-block" data-language="LANG">ESCAPED TEXT</pre>`, so the
//! blog stylesheet can caption and color blocks regardless of which editor
//! produced them.
//!
//! The policy is ordered and the first applicable rule wins:
//!
//! 1. Empty input yields an empty string.
//! 2. Input carrying a legacy marker (`ql-syntax`) is returned untouched.
//! 3. **Explicit pass**: `<pre><code class="language-X">` blocks are rewritten
//!    with X run through the alias table. If anything matched, stop here.
//! 4. **Fallback pass**: every bare `<pre>` block is rewritten with a
//!    language inferred from its text, or the configured fallback language
//!    when nothing matches. Containers this module already
//!    emitted (`data-language` on the `<pre>`) are skipped, so running the
//!    fallback over its own output changes nothing.
//!
//! Nothing here can fail. Markup the patterns don't recognize passes through.
//!
//! # Usage
//!
//! ```rust
//! # use blog_html_normalizer::normalize_blog_html;
//! let html = r#"<pre><code class="language-js">const x = 1;</code></pre>"#;
//! assert_eq!(
//!     normalize_blog_html(html),
//!     r#"<pre class="code-block" data-language="javascript">const x = 1;</pre>"#
//! );
//! ```

pub mod code_block;
pub mod language_aliases;
pub mod language_inference;
pub mod markup;

use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::LazyLock;

use crate::config::NormalizerConfig;
use crate::languages::language_label;

pub use code_block::{CodeBlock, LanguageOrigin};
pub use language_aliases::normalize_language;
pub use language_inference::{detect_language, infer_language_from_content};

/// `<pre>` + `<code class="...language-X...">` + `</code>` + `</pre>`
///
/// Captures: (1) language token, (2) inner HTML of the `<code>` element
static EXPLICIT_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<pre(?:\s[^>]*)?>\s*<code(?:\s[^>]*)?\sclass="[^"]*language-([a-z0-9+#-]+)[^"]*"[^>]*>(.*?)</code>\s*</pre>"#,
    )
    .expect("EXPLICIT_CODE_BLOCK regex is valid")
});

/// Any `<pre>` block. Captures: (1) opening tag attributes, (2) inner HTML
static PRE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<pre(\s[^>]*)?>(.*?)</pre>").expect("PRE_BLOCK regex is valid")
});

/// Which rule of the policy produced the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Input was empty
    Empty,
    /// Input carried a legacy marker and was returned as-is
    Legacy,
    /// At least one `language-*` block was rewritten
    Explicit,
    /// Only already-normalized containers were found; nothing was rewritten
    AlreadyNormalized,
    /// Bare `<pre>` blocks were rewritten with inferred languages
    Heuristic,
    /// No code blocks found
    Passthrough,
}

/// Summary of one rewritten block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedBlock {
    pub language: String,
    pub label: String,
    pub origin: LanguageOrigin,
}

impl From<&CodeBlock> for NormalizedBlock {
    fn from(block: &CodeBlock) -> Self {
        Self {
            language: block.language.clone(),
            label: language_label(&block.language).to_string(),
            origin: block.origin,
        }
    }
}

/// Normalized HTML together with how it was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationOutcome {
    pub html: String,
    pub strategy: Strategy,
    pub blocks: Vec<NormalizedBlock>,
}

impl NormalizationOutcome {
    fn unchanged(html: &str, strategy: Strategy) -> Self {
        Self {
            html: html.to_string(),
            strategy,
            blocks: Vec::new(),
        }
    }
}

/// Code block normalizer
///
/// Holds only its configuration; compiled patterns are shared statics, so a
/// single instance can be used from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct BlogHtmlNormalizer {
    config: NormalizerConfig,
}

impl BlogHtmlNormalizer {
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize code blocks in `html`
    #[must_use]
    pub fn normalize(&self, html: &str) -> String {
        self.normalize_with_outcome(html).html
    }

    /// Normalize code blocks in `html` and report what was done
    #[must_use]
    pub fn normalize_with_outcome(&self, html: &str) -> NormalizationOutcome {
        if html.is_empty() {
            return NormalizationOutcome::unchanged(html, Strategy::Empty);
        }

        if self.config.is_legacy(html) {
            tracing::debug!("Legacy editor markup detected, leaving content untouched");
            return NormalizationOutcome::unchanged(html, Strategy::Legacy);
        }

        // Phase 1
        let (rewritten, explicit) = self.rewrite_explicit_blocks(html);
        if !explicit.is_empty() {
            tracing::debug!(blocks = explicit.len(), "Rewrote language-tagged code blocks");
            return NormalizationOutcome {
                html: rewritten,
                strategy: Strategy::Explicit,
                blocks: explicit.iter().map(NormalizedBlock::from).collect(),
            };
        }

        // Phase 2, only reached with zero explicit substitutions
        let (rewritten, inferred, skipped) = self.rewrite_bare_blocks(html);
        if inferred.is_empty() {
            let strategy = if skipped > 0 {
                tracing::debug!(containers = skipped, "Content already normalized");
                Strategy::AlreadyNormalized
            } else {
                Strategy::Passthrough
            };
            return NormalizationOutcome::unchanged(html, strategy);
        }

        tracing::debug!(blocks = inferred.len(), "Rewrote code blocks with inferred languages");
        NormalizationOutcome {
            html: rewritten,
            strategy: Strategy::Heuristic,
            blocks: inferred.iter().map(NormalizedBlock::from).collect(),
        }
    }

    fn rewrite_explicit_blocks(&self, html: &str) -> (String, Vec<CodeBlock>) {
        let mut blocks = Vec::new();
        let rewritten = EXPLICIT_CODE_BLOCK.replace_all(html, |caps: &Captures| {
            let language = normalize_language(&caps[1]);
            let text = markup::extract_code_text(&caps[2]);
            let block = CodeBlock::new(language, text, LanguageOrigin::Explicit);

            tracing::trace!(language = %block.language, "Explicit code block");
            let rendered = block.render(&self.config.container_class);
            blocks.push(block);
            rendered
        });
        (rewritten.into_owned(), blocks)
    }

    /// Returns the rewritten HTML, the rewritten blocks and the number of
    /// existing containers left alone
    fn rewrite_bare_blocks(&self, html: &str) -> (String, Vec<CodeBlock>, usize) {
        let mut blocks = Vec::new();
        let mut skipped = 0;
        let rewritten = PRE_BLOCK.replace_all(html, |caps: &Captures| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            if attrs.to_ascii_lowercase().contains("data-language") {
                skipped += 1;
                return caps[0].to_string();
            }

            let text = markup::extract_code_text(&caps[2]);
            let detected = if self.config.detect_languages {
                detect_language(&text)
            } else {
                None
            };
            let block = match detected {
                Some(language) => CodeBlock::new(language, text, LanguageOrigin::Detected),
                None => {
                    let language = self.config.fallback_language.clone();
                    CodeBlock::new(language, text, LanguageOrigin::Fallback)
                }
            };

            tracing::trace!(language = %block.language, "Inferred code block");
            let rendered = block.render(&self.config.container_class);
            blocks.push(block);
            rendered
        });
        (rewritten.into_owned(), blocks, skipped)
    }
}

/// Process-wide normalizer with the default configuration
static DEFAULT_NORMALIZER: LazyLock<BlogHtmlNormalizer> =
    LazyLock::new(BlogHtmlNormalizer::default);

/// Normalize blog HTML with the default configuration
///
/// Equivalent to `BlogHtmlNormalizer::default().normalize(html)`.
#[must_use]
pub fn normalize_blog_html(html: &str) -> String {
    DEFAULT_NORMALIZER.normalize(html)
}
