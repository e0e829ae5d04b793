//! Excerpt derivation for notes without a pipeline-supplied summary.
//!
//! # Responsibility
//! - Turn raw markdown into a short plain-text summary.
//!
//! # Invariants
//! - Derivation is pure; the same content always yields the same excerpt.
//! - Content that strips down to nothing derives `None`, never an empty
//!   excerpt string.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum excerpt length in characters, matching the pipeline default.
pub const EXCERPT_MAX_CHARS: usize = 140;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derives a plain-text excerpt from markdown content.
///
/// Rules:
/// - images are dropped, links collapse to their display text
/// - markdown symbols are removed and whitespace is normalized
/// - the first 140 chars are retained
pub fn derive_excerpt(content: &str) -> Option<String> {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(EXCERPT_MAX_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_excerpt, EXCERPT_MAX_CHARS};

    #[test]
    fn excerpt_strips_markdown_and_keeps_link_text() {
        let source = "# Anchoring\n\nWe rely on the [first number](https://example.com) we see.\n![chart](chart.png)";
        let excerpt = derive_excerpt(source).expect("excerpt should exist");
        assert!(excerpt.contains("Anchoring"));
        assert!(excerpt.contains("first number"));
        assert!(!excerpt.contains("https://example.com"));
        assert!(!excerpt.contains("chart.png"));
        assert!(!excerpt.contains('#'));
    }

    #[test]
    fn excerpt_is_length_capped() {
        let source = "word ".repeat(100);
        let excerpt = derive_excerpt(&source).expect("excerpt should exist");
        assert!(excerpt.chars().count() <= EXCERPT_MAX_CHARS);
    }

    #[test]
    fn blank_content_derives_none() {
        assert_eq!(derive_excerpt(""), None);
        assert_eq!(derive_excerpt("  \n\t# \n"), None);
    }
}
