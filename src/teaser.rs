//! Teaser text and date display helpers for job cards.
//!
//! These operate on the ORIGINAL, non-normalized intro — normalization exists
//! only for comparison, never for display. Tag stripping and truncation are
//! independent of the filter engine; they are pure string functions the card
//! renderer calls per job.

use chrono::DateTime;

/// Character budget for a card teaser.
pub const TEASER_MAX_CHARS: usize = 100;

/// Shown when a listing carries no usable posting date.
pub const DATE_NOT_AVAILABLE: &str = "Date not available";

/// Removes angle-bracket tag runs from markup-bearing text.
///
/// A `<` consumes everything through the next `>`; an unterminated tag
/// swallows the remainder of the string. Entities and text content are left
/// untouched — this is teaser hygiene, not an HTML parser.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '<' {
            for tag_ch in chars.by_ref() {
                if tag_ch == '>' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Builds the card teaser for an intro: strip tags, truncate to `max_chars`
/// characters, append an ellipsis.
///
/// An empty intro yields an empty teaser with no ellipsis. The ellipsis is
/// always appended for non-empty intros, even short ones — the card layout
/// relies on it. Truncation counts characters, not bytes, so multi-byte text
/// never splits mid-character.
pub fn teaser(intro: &str, max_chars: usize) -> String {
    if intro.is_empty() {
        return String::new();
    }
    let stripped = strip_html(intro);
    let mut out: String = stripped.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Formats a posting timestamp (whole seconds since epoch) as
/// `"{day} {Month} {year}"`, e.g. `"25 April 2024"`.
///
/// Returns [`DATE_NOT_AVAILABLE`] when the timestamp is absent or outside
/// the representable range. Timestamps are seconds, not milliseconds.
pub fn format_posting_date(timestamp: Option<i64>) -> String {
    let Some(secs) = timestamp else {
        return DATE_NOT_AVAILABLE.to_string();
    };
    match DateTime::from_timestamp(secs, 0) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => DATE_NOT_AVAILABLE.to_string(),
    }
}
