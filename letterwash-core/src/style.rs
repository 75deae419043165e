// File: letterwash-core/src/style.rs
//! Sanitization of `style` attribute values on `span` tags.
//!
//! Only a single `color` declaration ever survives. The raw declaration list
//! is scanned for the first `color` property; its value is accepted only if it
//! matches one of a few known-safe shapes (hex, `rgb()`-family functional
//! notation, or a bare keyword). Anything else, including `url(...)`,
//! `expression(...)`, or extra smuggled properties, rejects to an empty
//! string, which callers treat as "drop the whole attribute".
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the first `color` property in a declaration list.
/// The value runs to the next `;` or end of string.
static COLOR_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)color\s*:\s*([^;]+)").expect("color property pattern is valid")
});

/// Accepted color value shapes: `#`-hex (3-8 digits), `rgb()`/`rgba()`/
/// `hsl()`/`hsla()` functional values, or a bare CSS keyword (letters/dashes).
/// The whole value must match; partial matches are rejections.
static COLOR_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(#[0-9a-f]{3,8}|rgb\s*\([^)]+\)|rgba\s*\([^)]+\)|hsl\s*\([^)]+\)|hsla\s*\([^)]+\)|[a-z-]+)$",
    )
    .expect("color value pattern is valid")
});

/// Extracts a safe `color: <value>` declaration from a raw style string.
///
/// Returns the canonical declaration on acceptance, or an empty string when
/// no `color` property is present or its value fails the shape check. All
/// other declared properties are discarded regardless.
pub fn sanitize_style(style: &str) -> String {
    let Some(caps) = COLOR_PROPERTY.captures(style) else {
        return String::new();
    };
    let value = caps[1].trim();
    if COLOR_VALUE.is_match(value) {
        format!("color: {value}")
    } else {
        debug!("rejected style color value: {value:?}");
        String::new()
    }
}
