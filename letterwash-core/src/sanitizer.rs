// File: letterwash-core/src/sanitizer.rs
//! The single-pass letter sanitizer.
//!
//! Scans the input once, left to right, with a forward cursor. Text runs are
//! copied verbatim; every `<...>` span is parsed and either re-emitted in
//! canonical lowercase form (allowlisted tags only) or dropped without a
//! trace. A `<` with no terminating `>` degrades to literal text.
//!
//! The sanitizer never tracks open/close balance. Its only contract is that
//! no disallowed tag or attribute survives; unbalanced input yields
//! unbalanced (but safe) output. O(n) in the input length, no backtracking.
//!
//! License: MIT OR APACHE 2.0

use log::trace;

use crate::allowlist;
use crate::tag::{parse_opening_tag, OpeningTag};

/// Scanner position relative to markup, advanced by a single forward cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Copying literal text.
    Text,
    /// Inside `<...>`, holding the byte offset of the `<`.
    Tag(usize),
}

/// Sanitizes user-authored letter markup for safe raw-HTML rendering.
///
/// Output contains only literal text and canonical tags from the allowlist
/// (`b`, `i`, `u`, `s`, `span`, `br`, `p`), with `span` carrying at most a
/// sanitized `style="color: ..."` attribute. Every input produces some
/// output; malformed markup degrades rather than erroring.
///
/// Dropped closing tags can leave the output unbalanced relative to the
/// input. That is accepted policy: safety, not well-formedness.
pub fn sanitize_letter_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let bytes = html.as_bytes();
    let mut state = ScanState::Text;
    let mut cursor = 0;

    while cursor < bytes.len() {
        match state {
            ScanState::Text => {
                if bytes[cursor] == b'<' {
                    state = ScanState::Tag(cursor);
                } else {
                    // Copy the whole text run up to the next '<' verbatim.
                    let run_end = html[cursor..]
                        .find('<')
                        .map_or(html.len(), |offset| cursor + offset);
                    out.push_str(&html[cursor..run_end]);
                    cursor = run_end;
                }
            }
            ScanState::Tag(start) => {
                let Some(offset) = html[start..].find('>') else {
                    // No '>' anywhere ahead, so neither this '<' nor any later
                    // one can open a tag. The whole remainder is literal text.
                    out.push_str(&html[start..]);
                    break;
                };
                let end = start + offset;
                emit_tag(&mut out, &html[start + 1..end]);
                cursor = end + 1;
                state = ScanState::Text;
            }
        }
    }
    out
}

/// Re-emits recognized tag content in canonical form; drops everything else.
fn emit_tag(out: &mut String, tag_content: &str) {
    if let Some(rest) = tag_content.strip_prefix('/') {
        let name = rest.trim().to_ascii_lowercase();
        if allowlist::is_allowed(&name) {
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
        } else {
            trace!("dropped closing tag: {tag_content:?}");
        }
    } else if let Some(tag) = parse_opening_tag(tag_content) {
        emit_opening(out, &tag);
    }
}

fn emit_opening(out: &mut String, tag: &OpeningTag) {
    match (tag.name.as_str(), tag.style.as_deref()) {
        ("span", Some(style)) => {
            out.push_str("<span style=\"");
            out.push_str(style);
            out.push_str("\">");
        }
        // br never takes a closing tag; always the bare void form.
        ("br", _) => out.push_str("<br>"),
        (name, _) => {
            out.push('<');
            out.push_str(name);
            out.push('>');
        }
    }
}
