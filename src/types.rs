//! Core types for rapid_summarize
//!
//! This module defines the fundamental data structures used throughout the
//! library: scored sentences, length presets, and configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Scored Sentence
// ============================================================================

/// A sentence with its frequency score and selection metadata
///
/// The score is the sum of document-wide frequency counts over the
/// sentence's alphabetic words. `word_count` counts ALL alphabetic words,
/// stopwords included: stopwords contribute to a sentence's length budget
/// but never to its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Summed word-frequency score
    pub score: u64,
    /// Sentence index within the document (original position)
    pub index: usize,
    /// The sentence text
    pub text: String,
    /// Number of alphabetic words in the sentence
    pub word_count: usize,
}

impl ScoredSentence {
    /// Create a new scored sentence
    pub fn new(score: u64, index: usize, text: impl Into<String>, word_count: usize) -> Self {
        Self {
            score,
            index,
            text: text.into(),
            word_count,
        }
    }
}

// ============================================================================
// Length Preset
// ============================================================================

/// Named summary-size configuration
///
/// A preset pairs a soft word budget (`target_words`) with a hard cap on
/// the number of sentences returned (`max_sentences`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthPreset {
    /// Soft word budget for the summary
    pub target_words: usize,
    /// Hard cap on the number of sentences returned
    pub max_sentences: usize,
}

impl LengthPreset {
    /// Short summary: up to 3 sentences, ~120 words
    pub const SHORT: LengthPreset = LengthPreset {
        target_words: 120,
        max_sentences: 3,
    };

    /// Medium summary: up to 5 sentences, ~220 words
    pub const MEDIUM: LengthPreset = LengthPreset {
        target_words: 220,
        max_sentences: 5,
    };

    /// Long summary: up to 8 sentences, ~350 words
    pub const LONG: LengthPreset = LengthPreset {
        target_words: 350,
        max_sentences: 8,
    };

    /// Create a preset with explicit values
    pub fn new(target_words: usize, max_sentences: usize) -> Self {
        Self {
            target_words,
            max_sentences,
        }
    }

    /// Look up a preset by name ("short", "medium", "long")
    ///
    /// Unrecognized names fall back to [`LengthPreset::SHORT`].
    pub fn named(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "medium" => Self::MEDIUM,
            "long" => Self::LONG,
            _ => Self::SHORT,
        }
    }

    /// Validate the preset
    pub fn validate(&self) -> Result<()> {
        if self.target_words == 0 {
            return Err(SummarizeError::invalid_config("target_words must be > 0"));
        }
        if self.max_sentences == 0 {
            return Err(SummarizeError::invalid_config("max_sentences must be > 0"));
        }
        Ok(())
    }
}

impl Default for LengthPreset {
    fn default() -> Self {
        Self::SHORT
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the summarizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Language code for the stopword list (e.g., "en", "de", "fr")
    pub language: String,
    /// Summary size preset
    pub preset: LengthPreset,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            preset: LengthPreset::default(),
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set preset
    pub fn with_preset(mut self, preset: LengthPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Builder method: set preset by name, falling back to short
    pub fn with_preset_name(mut self, name: &str) -> Self {
        self.preset = LengthPreset::named(name);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.preset.validate()
    }
}
