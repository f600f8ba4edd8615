//! Text normalization
//!
//! Strips bracketed citation markers (e.g. "[12]") and collapses every
//! whitespace run, newlines included, into a single space. Normalization
//! is total and idempotent: normalizing already-normalized text is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[0-9]*\]").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw text for sentence splitting and scoring.
///
/// Citation markers are replaced with a single space before whitespace
/// collapsing, so a marker between words never glues them together.
/// The output contains no newline and no run of two or more spaces.
pub fn normalize(text: &str) -> String {
    let stripped = RE_CITATION.replace_all(text, " ");
    RE_WHITESPACE.replace_all(&stripped, " ").into_owned()
}
