// letterwash-core/src/lib.rs
//! # Letterwash Core Library
//!
//! `letterwash-core` provides the restrictive HTML sanitizer used to bridge
//! untrusted, user-authored "letter" content into a raw-markup rendering
//! surface. Because the rendering side inserts the result without further
//! escaping, any parsing gap here is a cross-site-scripting vector; the
//! design is therefore a tiny explicit allowlist and a hand-rolled
//! single-pass scanner rather than a general HTML parser.
//!
//! Only `b`, `i`, `u`, `s`, `span`, `br`, and `p` survive sanitization, and
//! the only attribute ever emitted is a `style="color: ..."` on `span` whose
//! value has passed a strict shape check.
//!
//! ## Modules
//!
//! * `allowlist`: The closed set of permitted tag names.
//! * `style`: Extraction and validation of the single surviving `color` declaration.
//! * `tag`: The opening-tag grammar and `span` style attribute handling.
//! * `sanitizer`: The single-pass scan loop producing canonical sanitized markup.
//! * `text`: Plain-text extraction for previews and the markup/plain classifier.
//!
//! ## Usage Example
//!
//! ```rust
//! use letterwash_core::{classify, sanitize_letter_html, strip_html_to_text, ContentKind};
//!
//! let raw = "<SPAN style='color:red;background:url(x)'>Dear <script>alert(1)</script>you</span>";
//!
//! // Safe for raw-markup insertion: only allowlisted tags, canonical form.
//! assert_eq!(
//!     sanitize_letter_html(raw),
//!     "<span style=\"color: red\">Dear alert(1)you</span>"
//! );
//!
//! // Plain-text preview.
//! assert_eq!(strip_html_to_text("<b>Hi</b> there"), "Hi there");
//!
//! // Rendering-path decision.
//! assert_eq!(classify(raw), ContentKind::Markup);
//! ```
//!
//! ## Error Handling
//!
//! There is none, by design: every function is total. Malformed tags degrade
//! to literal text or are silently dropped, unsafe styles are discarded, and
//! every input produces a string. Callers cannot observe a failure, only a
//! shorter output.
//!
//! ## Design Principles
//!
//! * **Allowlist, not denylist:** nothing outside the closed tag set is ever
//!   emitted, so unknown markup is safe by construction.
//! * **Pure and stateless:** no I/O, no shared mutable state; safe to call
//!   concurrently from any number of threads.
//! * **Linear time:** one forward scan, no backtracking, no rescans.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod allowlist;
pub mod sanitizer;
pub mod style;
pub mod tag;
pub mod text;

/// Re-exports the allowlisted tag set for auditing and tooling.
pub use allowlist::ALLOWED_TAGS;

/// Re-exports the sanitizer entry point.
pub use sanitizer::sanitize_letter_html;

/// Re-exports the style-declaration sanitizer for standalone auditing.
pub use style::sanitize_style;

/// Re-exports the parsed opening-tag type.
pub use tag::OpeningTag;

/// Re-exports plain-text extraction and the rendering-path classifier.
pub use text::{classify, is_letter_html, strip_html_to_text, ContentKind};
