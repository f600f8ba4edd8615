//! Sentence scoring
//!
//! Scores each sentence by the summed document-wide frequencies of its
//! alphabetic words. Note the asymmetry with the frequency model: the
//! per-sentence word count is NOT stopword-filtered. A stopword widens a
//! sentence's footprint in the word budget while contributing zero score,
//! because stopwords never appear in the frequency table.

use super::frequency::FrequencyTable;
use crate::nlp::tokenizer::{is_alphabetic_word, tokenize_words};
use crate::types::ScoredSentence;

/// Score sentences against a document frequency table.
///
/// Sentences are visited in original order and keep their original index.
/// Sentences with no alphabetic words at all are excluded: they cannot be
/// ranked or budgeted. An empty result signals the caller to fall back to
/// the first `max_sentences` sentences unscored.
pub fn score_sentences(sentences: &[String], freq: &FrequencyTable) -> Vec<ScoredSentence> {
    let mut scored = Vec::with_capacity(sentences.len());

    for (index, sentence) in sentences.iter().enumerate() {
        let mut score: u64 = 0;
        let mut word_count = 0usize;

        for word in tokenize_words(sentence) {
            if is_alphabetic_word(&word) {
                score += freq.get(&word).copied().unwrap_or(0) as u64;
                word_count += 1;
            }
        }

        if word_count > 0 {
            scored.push(ScoredSentence::new(score, index, sentence.clone(), word_count));
        }
    }

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::summarizer::frequency::build_frequency_table;

    fn sentences(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_sums_frequencies() {
        let mut freq = FrequencyTable::default();
        freq.insert("cat".to_string(), 3);
        freq.insert("dog".to_string(), 1);

        let scored = score_sentences(&sentences(&["The cat saw the dog."]), &freq);

        assert_eq!(scored.len(), 1);
        // cat (3) + dog (1); "the" and "saw" miss the table and add 0.
        assert_eq!(scored[0].score, 4);
    }

    #[test]
    fn test_word_count_includes_stopwords() {
        let stopwords = StopwordFilter::from_list(&["the"]);
        let text = "The cat sat.";
        let freq = build_frequency_table(text, &stopwords);
        let scored = score_sentences(&sentences(&[text]), &freq);

        // "the" is filtered from the frequency table but still counts
        // toward sentence length.
        assert_eq!(scored[0].word_count, 3);
        assert_eq!(scored[0].score, 2); // cat (1) + sat (1)
    }

    #[test]
    fn test_word_count_excludes_numbers() {
        let freq = FrequencyTable::default();
        let scored = score_sentences(&sentences(&["Route 66 is long."]), &freq);

        assert_eq!(scored[0].word_count, 3); // route, is, long
    }

    #[test]
    fn test_non_alphabetic_sentence_excluded() {
        let freq = FrequencyTable::default();
        let scored = score_sentences(&sentences(&["1234!", "Real words here."]), &freq);

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].index, 1);
    }

    #[test]
    fn test_indices_track_original_positions() {
        let freq = FrequencyTable::default();
        let scored = score_sentences(&sentences(&["One.", "...", "Three."]), &freq);

        let indices: Vec<usize> = scored.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_unknown_words_score_zero() {
        let freq = FrequencyTable::default();
        let scored = score_sentences(&sentences(&["Completely unknown words."]), &freq);

        assert_eq!(scored[0].score, 0);
        assert_eq!(scored[0].word_count, 3);
    }

    #[test]
    fn test_empty_input() {
        let freq = FrequencyTable::default();
        assert!(score_sentences(&[], &freq).is_empty());
    }
}
