//! # rapid_summarize
//!
//! Fast extractive text summarization using word-frequency sentence scoring.
//!
//! The summarizer selects and reorders a subset of the input's own
//! sentences: text is normalized, split into sentences, and scored by the
//! summed document-wide frequencies of its content words; the
//! highest-scoring sentences are then chosen greedily under a word budget
//! and sentence cap and emitted in original reading order.
//!
//! ## Features
//!
//! - **Total over strings**: any input, including the empty string,
//!   produces a summary without error; degenerate inputs degrade
//!   gracefully instead of failing
//! - **Unicode-aware**: UAX #29 sentence and word segmentation
//! - **Deterministic**: identical input and preset always produce
//!   byte-identical output
//! - **Fetch collaborator**: optional URL fetching and HTML text
//!   extraction behind the `fetch` feature
//!
//! ## Example
//!
//! ```
//! use rapid_summarize::{summarize, LengthPreset};
//!
//! let preset = LengthPreset::SHORT;
//! let summary = summarize(
//!     "Rust is a systems language. Rust programs are fast. Cats are nice. \
//!      Rust also prevents data races.",
//!     preset.target_words,
//!     preset.max_sentences,
//! );
//! assert!(summary.contains("Rust"));
//! ```

pub mod errors;
pub mod nlp;
pub mod summarizer;
pub mod types;

#[cfg(feature = "fetch")]
pub mod fetch;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{LengthPreset, ScoredSentence, SummaryConfig};

// Re-export main functionality
pub use nlp::normalizer::normalize;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{split_sentences, tokenize_words};
pub use summarizer::{summarize, summarize_with_preset, Summarizer};

#[cfg(feature = "fetch")]
pub use fetch::{fetch_and_extract, summarize_url};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
