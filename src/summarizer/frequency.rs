//! Word-frequency model
//!
//! Builds occurrence counts of content words over the whole document.
//! The table is created fresh for every summarization call and discarded
//! on return; no state crosses calls.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_alphabetic_word, tokenize_words};
use rustc_hash::FxHashMap;

/// Mapping from lowercased content word to its occurrence count
pub type FrequencyTable = FxHashMap<String, usize>;

/// Build a frequency table over the full normalized text.
///
/// Tokenization runs over the whole document, not sentence-by-sentence.
/// Only content words are counted: alphabetic tokens that are not
/// stopwords. An empty table is a valid outcome (e.g. text made entirely
/// of stopwords or digits) and signals the caller to fall back to
/// positional truncation.
pub fn build_frequency_table(text: &str, stopwords: &StopwordFilter) -> FrequencyTable {
    let mut freq = FrequencyTable::default();
    for word in tokenize_words(text) {
        if is_alphabetic_word(&word) && !stopwords.is_stopword(&word) {
            *freq.entry(word).or_insert(0) += 1;
        }
    }
    freq
}
