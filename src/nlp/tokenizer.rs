//! Unicode-aware tokenization
//!
//! This module provides UAX #29 compliant sentence and word segmentation.
//! Sentence boundaries handle what naive period splitting gets wrong:
//! decimal numbers ("3.14"), terminators followed by lowercase
//! continuations ("e.g. the appendix"), and ?/! punctuation.

use unicode_segmentation::UnicodeSegmentation;

/// Split normalized text into an ordered list of sentences.
///
/// Each sentence is trimmed; empty segments are dropped. Empty input
/// yields an empty list, and input without any sentence-ending punctuation
/// yields a single sentence. The returned order is the document order and
/// is the sole ordering key for summary output.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase and tokenize text into word tokens.
///
/// Segmentation follows UAX #29 word boundaries, so pure punctuation never
/// appears in the output. Numbers and mixed alphanumerics do; callers that
/// need content words apply [`is_alphabetic_word`] on top.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .map(str::to_string)
        .collect()
}

/// Check whether a token is composed entirely of alphabetic characters.
pub fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
