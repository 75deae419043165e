// File: letterwash-core/src/tag.rs
//! Opening-tag grammar and attribute handling.
//!
//! Tag content (the text between `<` and `>`) must be exactly one alphabetic
//! name, optionally followed by whitespace and an attribute blob. Any other
//! shape is rejected. Attributes are discarded wholesale; the single
//! exception is a `style` attribute on `span`, which is extracted and run
//! through the style sanitizer.
//!
//! A trailing `/` with no separating whitespace (as in `<br/>`) fails the
//! name match and the tag is dropped. `<br />` parses, because the `/` lands
//! in the attribute blob. This quirk is load-bearing for compatibility with
//! previously sanitized content and must not be "fixed".
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::allowlist;
use crate::style::sanitize_style;

/// One alphabetic name, optionally whitespace plus the rest of the tag
/// content as an attribute blob.
static OPENING_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-z]+)(?:\s+([^>]*))?$").expect("opening tag pattern is valid")
});

/// A quote-delimited `style` attribute inside an attribute blob.
static STYLE_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)style\s*=\s*["']([^"']*)["']"#).expect("style attribute pattern is valid")
});

/// A recognized opening tag, ready for canonical emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningTag {
    /// Lowercased allowlisted tag name.
    pub name: String,
    /// Sanitized style declaration; only ever present on `span`, and only
    /// when the input carried a style attribute that survived sanitization.
    pub style: Option<String>,
}

/// Parses raw tag content into a recognized opening tag, or `None` when the
/// shape, the name, or both are rejected.
pub fn parse_opening_tag(raw: &str) -> Option<OpeningTag> {
    let Some(caps) = OPENING_TAG.captures(raw.trim()) else {
        debug!("dropped malformed opening tag: {raw:?}");
        return None;
    };
    let name = caps[1].to_ascii_lowercase();
    if !allowlist::is_allowed(&name) {
        debug!("dropped disallowed tag: {name:?}");
        return None;
    }
    if name == "span" {
        if let Some(attrs) = caps.get(2) {
            let style = STYLE_ATTR
                .captures(attrs.as_str())
                .map(|style_caps| sanitize_style(&style_caps[1]))
                .unwrap_or_default();
            let style = (!style.is_empty()).then_some(style);
            return Some(OpeningTag { name, style });
        }
    }
    // b, i, u, s, br, p: attributes are ignored entirely.
    Some(OpeningTag { name, style: None })
}
