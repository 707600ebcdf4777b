//! Test utilities and helper functions for the normalizer test suite

use tempfile::TempDir;

/// Creates a temporary directory for config files
#[allow(dead_code)]
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Code block as the editor's code-block extension serializes it
#[allow(dead_code)]
pub fn editor_code_block(language: &str, code_html: &str) -> String {
    format!(r#"<pre><code class="language-{language}">{code_html}</code></pre>"#)
}

/// Expected normalized container with the default class
#[allow(dead_code)]
pub fn normalized_block(language: &str, escaped: &str) -> String {
    format!(r#"<pre class="code-block" data-language="{language}">{escaped}</pre>"#)
}
