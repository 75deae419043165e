// File: letterwash-core/src/text.rs
//! Plain-text extraction and the markup/plain rendering-path classifier.
//!
//! `strip_html_to_text` is deliberately cruder than the sanitizer: every
//! tag-shaped substring is removed regardless of allowlist membership,
//! because its output is only ever shown as plain text (list previews),
//! never re-inserted as markup.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything shaped like a tag: `<`, one or more non-`>` characters, `>`.
static TAG_SHAPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag-shaped pattern is valid"));

/// An allowlisted tag name (opening or closing) delimited by `<` and either
/// whitespace or `>` right after the name.
static LETTER_MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(?:/?(?:b|i|u|s|span|br|p)(?:\s|>))").expect("classifier pattern is valid")
});

/// How a piece of stored letter content should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Sanitize, then render as markup.
    Markup,
    /// Render as plain text.
    Plain,
}

/// Strips every tag-shaped substring and trims the result. For previews only.
pub fn strip_html_to_text(html: &str) -> String {
    TAG_SHAPED.replace_all(html, "").trim().to_string()
}

/// Heuristic: does this content contain at least one allowlisted tag?
///
/// A rendering-path hint, not a validator: the sanitizer is applied before
/// any markup rendering regardless of this answer, so false positives and
/// negatives are harmless.
pub fn is_letter_html(content: &str) -> bool {
    LETTER_MARKUP.is_match(content)
}

/// Classifies content into its rendering path.
pub fn classify(content: &str) -> ContentKind {
    if is_letter_html(content) {
        ContentKind::Markup
    } else {
        ContentKind::Plain
    }
}
