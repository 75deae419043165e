// File: letterwash-core/src/allowlist.rs
//! The closed set of tag names permitted to survive sanitization.
//!
//! Membership is checked on lowercased names; callers normalize case before
//! asking. The set is intentionally tiny: inline formatting, `span` (for a
//! sanitized color style), and the two block/break tags the letter editor
//! produces. Nothing else is ever emitted.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Tag names that may appear in sanitized output.
pub static ALLOWED_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend(["b", "i", "u", "s", "span", "br", "p"]);
    set
});

/// Returns `true` if `name` (already lowercased) is an allowlisted tag.
pub fn is_allowed(name: &str) -> bool {
    ALLOWED_TAGS.contains(name)
}
