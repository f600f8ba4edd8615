//! Web page fetching and text extraction
//!
//! The summarization core never touches the network; this module is the
//! narrow collaborator that turns a URL into plain text (string in,
//! string out, explicit failure kind). Enabled with the `fetch` feature.

use crate::errors::{Result, SummarizeError};
use crate::summarizer::summarize;
use crate::types::LengthPreset;
use std::time::Duration;

/// Minimum word count for directly-supplied text; callers enforce this
/// before invoking the core, which itself accepts any string.
pub const MIN_TEXT_WORDS: usize = 5;

/// Minimum word count for URL-sourced text after extraction.
pub const MIN_URL_WORDS: usize = 20;

/// Extracted page text is truncated to this many characters.
pub const MAX_FETCHED_CHARS: usize = 12_000;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Check whether a value has the shape of a fetchable http(s) URL.
pub fn looks_like_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.has_host()
        }
        Err(_) => false,
    }
}

/// Extract readable plain text from an HTML document.
///
/// Script, style, and noscript blocks are removed first so their contents
/// never count as page text; remaining text nodes are joined by spaces and
/// whitespace-normalized.
pub fn extract_text(html: &str) -> String {
    let without_scripts = strip_tag_blocks(html, "script");
    let without_styles = strip_tag_blocks(&without_scripts, "style");
    let cleaned = strip_tag_blocks(&without_styles, "noscript");

    let document = scraper::Html::parse_document(&cleaned);
    let text = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fetch a URL and return its extracted plain text.
///
/// Fails with [`SummarizeError::InvalidUrl`] for non-http(s) shapes,
/// [`SummarizeError::Fetch`] for transport failures and non-success
/// statuses, and [`SummarizeError::InsufficientContent`] when fewer than
/// [`MIN_URL_WORDS`] words survive extraction. Extracted text is capped at
/// [`MAX_FETCHED_CHARS`] characters before the word-count check.
pub fn fetch_and_extract(url: &str) -> Result<String> {
    if !looks_like_url(url) {
        return Err(SummarizeError::invalid_url(url));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SummarizeError::fetch(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            tracing::warn!(url, error = %e, "page fetch failed");
            SummarizeError::fetch(e.to_string())
        })?;

    let html = response
        .text()
        .map_err(|e| SummarizeError::fetch(e.to_string()))?;

    let text: String = extract_text(&html).chars().take(MAX_FETCHED_CHARS).collect();
    let words = text.split_whitespace().count();
    if words < MIN_URL_WORDS {
        return Err(SummarizeError::insufficient_content(words, MIN_URL_WORDS));
    }

    Ok(text)
}

/// Fetch a page and summarize its text under the given preset.
pub fn summarize_url(url: &str, preset: LengthPreset) -> Result<String> {
    let text = fetch_and_extract(url)?;
    Ok(summarize(&text, preset.target_words, preset.max_sentences))
}

/// Remove `<tag ...> ... </tag>` blocks, ASCII-case-insensitively.
///
/// Conservative by construction: a block is only removed when its close
/// tag is found; an unterminated block leaves the rest of the document
/// untouched.
fn strip_tag_blocks(html: &str, tag: &str) -> String {
    let open_pat = format!("<{tag}");
    let close_pat = format!("</{tag}>");
    let lower = html.to_ascii_lowercase();

    let mut out = String::with_capacity(html.len());
    let mut i = 0usize;
    while let Some(rel_start) = lower[i..].find(&open_pat) {
        let start = i + rel_start;
        let after_open = start + open_pat.len();
        if let Some(rel_end) = lower[after_open..].find(&close_pat) {
            out.push_str(&html[i..start]);
            i = after_open + rel_end + close_pat.len();
        } else {
            break;
        }
    }
    out.push_str(&html[i..]);
    out
}
