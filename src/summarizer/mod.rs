//! Extractive summarization
//!
//! Selects and reorders a subset of the input's own sentences, ranked by
//! summed word frequencies, under a word budget and sentence cap.

pub mod frequency;
pub mod scorer;
pub mod selector;

use crate::nlp::normalizer::normalize;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::split_sentences;
use crate::types::{LengthPreset, SummaryConfig};
use frequency::build_frequency_table;
use scorer::score_sentences;
use selector::select;

/// Summarize text under an explicit word budget and sentence cap.
///
/// This is the sole public operation of the core and is total over its
/// domain: any string, including the empty string, produces a summary
/// string without error. Degenerate inputs degrade step by step: empty
/// text yields an empty summary, inputs with no more sentences than the
/// cap pass through verbatim, and inputs with no scorable content fall
/// back to positional truncation.
///
/// Each call builds and discards its own state, so concurrent calls need
/// no coordination.
pub fn summarize(text: &str, target_words: usize, max_sentences: usize) -> String {
    summarize_with_stopwords(text, target_words, max_sentences, StopwordFilter::english())
}

/// Summarize using a named length preset ("short", "medium", "long").
///
/// Unrecognized preset names fall back to short.
pub fn summarize_with_preset(text: &str, preset_name: &str) -> String {
    let preset = LengthPreset::named(preset_name);
    summarize(text, preset.target_words, preset.max_sentences)
}

fn summarize_with_stopwords(
    text: &str,
    target_words: usize,
    max_sentences: usize,
    stopwords: &StopwordFilter,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = normalize(text);
    let sentences = split_sentences(&text);
    if sentences.is_empty() {
        return String::new();
    }

    // Nothing to rank when every sentence fits under the cap: return the
    // document verbatim without scoring.
    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let freq = build_frequency_table(&text, stopwords);
    if freq.is_empty() {
        return head(&sentences, max_sentences);
    }

    let scored = score_sentences(&sentences, &freq);
    if scored.is_empty() {
        return head(&sentences, max_sentences);
    }

    select(&scored, target_words, max_sentences)
}

/// Positional fallback: the first `n` sentences, joined verbatim.
fn head(sentences: &[String], n: usize) -> String {
    sentences[..n.min(sentences.len())].join(" ")
}

/// Configurable summarizer
///
/// Holds a [`SummaryConfig`] (language + length preset) and applies it to
/// any number of inputs. The stopword list for the configured language is
/// loaded when the summarizer is built.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummaryConfig,
    stopwords: StopwordFilter,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default config (English, short preset)
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: SummaryConfig) -> Self {
        let stopwords = StopwordFilter::new(&config.language);
        Self { config, stopwords }
    }

    /// Set the length preset
    pub fn with_preset(mut self, preset: LengthPreset) -> Self {
        self.config.preset = preset;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize `text` under the configured preset
    pub fn run(&self, text: &str) -> String {
        let preset = self.config.preset;
        summarize_with_stopwords(text, preset.target_words, preset.max_sentences, &self.stopwords)
    }
}
