// letterwash-core/tests/sanitize_tests.rs
//! Property-level integration tests for the letter sanitizer.
//!
//! These exercise the guarantees callers rely on when inserting sanitizer
//! output into a raw-markup rendering surface: allowlist closure, style
//! closure, idempotence, and best-effort degradation on malformed input.

use letterwash_core::{
    classify, is_letter_html, sanitize_letter_html, strip_html_to_text, ContentKind,
};
use once_cell::sync::Lazy;
use regex::Regex;
use test_log::test;

/// Extracts every tag name appearing in a sanitized string.
fn tag_names(output: &str) -> Vec<String> {
    static TAG: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"</?([a-zA-Z]+)").expect("tag name pattern is valid"));
    TAG.captures_iter(output)
        .map(|caps| caps[1].to_string())
        .collect()
}

const ADVERSARIAL_INPUTS: &[&str] = &[
    "<script>alert(1)</script>",
    "<img src=x onerror=alert(1)>",
    "<a href=\"javascript:alert(1)\">link</a>",
    "<B ONCLICK='x'>bold</B>",
    "<span style=\"color:red;background:url(evil)\">x</span>",
    "<span style='color: expression(alert(1))'>x</span>",
    "<span style=`color:red`>backtick quotes</span>",
    "<sp<b>an>split</b>",
    "<<b>>double</b>",
    "a < b and c > d",
    "unterminated <span style=\"color:red",
    "<svg/onload=alert(1)>",
    "<p align=center>mixed <I>case</i> tags</P>",
    "<br/><br /><br>",
    "letter text with 💌 and <u>underline</u>",
];

#[test]
fn test_allowlist_closure() {
    for input in ADVERSARIAL_INPUTS {
        let output = sanitize_letter_html(input);
        for name in tag_names(&output) {
            assert!(
                ["b", "i", "u", "s", "span", "br", "p"].contains(&name.as_str()),
                "disallowed tag {name:?} survived in {output:?} (input {input:?})"
            );
        }
    }
}

#[test]
fn test_idempotence() {
    for input in ADVERSARIAL_INPUTS {
        let once = sanitize_letter_html(input);
        let twice = sanitize_letter_html(&once);
        assert_eq!(twice, once, "not idempotent for input {input:?}");
    }
}

#[test]
fn test_style_closure() {
    static SPAN_STYLE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"<span style="([^"]*)">"#).expect("span style pattern is valid")
    });
    static ACCEPTED_VALUE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?i)^color: (#[0-9a-f]{3,8}|rgba?\s*\([^)]+\)|hsla?\s*\([^)]+\)|[a-z-]+)$",
        )
        .expect("accepted value pattern is valid")
    });
    for input in ADVERSARIAL_INPUTS {
        let output = sanitize_letter_html(input);
        for caps in SPAN_STYLE.captures_iter(&output) {
            assert!(
                ACCEPTED_VALUE.is_match(&caps[1]),
                "style declaration {:?} escaped the accepted shapes (input {input:?})",
                &caps[1]
            );
        }
    }
}

#[test]
fn test_no_injection() {
    let output = sanitize_letter_html("<script>alert(1)</script>");
    assert_eq!(output, "alert(1)");
    assert!(!output.contains("<script"));
}

#[test]
fn test_style_stripping() {
    assert_eq!(
        sanitize_letter_html("<span style=\"color:red;background:url(x)\">x</span>"),
        "<span style=\"color: red\">x</span>"
    );
}

#[test]
fn test_unterminated_tag_degrades_to_text() {
    assert_eq!(sanitize_letter_html("a < b"), "a < b");
}

#[test]
fn test_plain_text_extraction() {
    assert_eq!(strip_html_to_text("<b>Hi</b> there"), "Hi there");
}

#[test]
fn test_classifier() {
    assert!(is_letter_html("<span>x</span>"));
    assert!(!is_letter_html("plain text"));
    assert_eq!(classify("<span>x</span>"), ContentKind::Markup);
    assert_eq!(classify("plain text"), ContentKind::Plain);
}

#[test]
fn test_sanitized_output_still_classifies_as_markup() {
    let output = sanitize_letter_html("<p>Dear <b>you</b></p>");
    assert_eq!(classify(&output), ContentKind::Markup);
}

#[test]
fn test_strip_after_sanitize_matches_direct_strip_for_allowed_tags() {
    let input = "<p>Dear <b>you</b>,<br>warm regards</p>";
    assert_eq!(
        strip_html_to_text(&sanitize_letter_html(input)),
        strip_html_to_text(input)
    );
}
