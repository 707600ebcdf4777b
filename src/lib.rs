pub mod config;
pub mod errors;
pub mod languages;
pub mod normalizer;
pub mod utils;

pub use config::{NormalizerConfig, NormalizerConfigBuilder};
pub use errors::{ConfigError, Result};
pub use languages::{SUPPORTED_LANGUAGES, SupportedLanguage, is_supported, language_label};
pub use normalizer::{
    BlogHtmlNormalizer, CodeBlock, LanguageOrigin, NormalizationOutcome, NormalizedBlock, Strategy,
    infer_language_from_content, normalize_blog_html, normalize_language,
};
