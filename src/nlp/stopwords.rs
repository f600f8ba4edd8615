//! Stopword filtering
//!
//! This module provides multi-language stopword filtering using the
//! `stop-words` crate. Lists are embedded in the binary and loaded once;
//! an unknown language degrades to an empty set (no filtering) rather
//! than failing, so summarization still works with every alphabetic word
//! counting as a content word.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

static ENGLISH: Lazy<StopwordFilter> = Lazy::new(|| StopwordFilter::new("en"));

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da,
    /// fi, hu, tr, pl, ar. Anything else yields an empty filter.
    pub fn new(language: &str) -> Self {
        let stopwords = Self::load_stopwords(language);
        Self { stopwords }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// The process-wide English filter, initialized on first use.
    pub fn english() -> &'static StopwordFilter {
        &ENGLISH
    }

    /// Check if a word is a stopword
    ///
    /// Callers are expected to pass lowercased tokens.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load stopwords for a language
    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => {
                tracing::warn!(language = other, "no stopword list; filtering disabled");
                return FxHashSet::default();
            }
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
