//! Greedy sentence selection
//!
//! Picks the highest-scoring sentences under a word budget and sentence
//! cap, restores document order, and applies a final word-count clamp.

use crate::types::ScoredSentence;

/// Select sentences for the summary.
///
/// The sort on score is stable with no secondary key: equally-scored
/// sentences keep their incoming (document) order. Selection then walks
/// the ranked list greedily. Two stop conditions are checked before each
/// candidate is accepted: the sentence cap, and the word budget. The
/// budget never blocks the first sentence, so any non-empty scored set
/// produces a non-empty summary.
pub fn select(scored: &[ScoredSentence], target_words: usize, max_sentences: usize) -> String {
    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let mut chosen: Vec<&ScoredSentence> = Vec::new();
    let mut acc_words = 0usize;
    for sentence in ranked {
        if chosen.len() >= max_sentences {
            break;
        }
        if acc_words >= target_words && !chosen.is_empty() {
            break;
        }
        chosen.push(sentence);
        acc_words += sentence.word_count;
    }

    chosen.sort_by_key(|s| s.index);
    let result = chosen
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    clamp_words(&result, target_words)
}

/// Truncate the joined summary to floor(1.25 × target) words.
///
/// When the clamp fires, the output is exactly that many
/// whitespace-delimited words followed by an ellipsis.
fn clamp_words(result: &str, target_words: usize) -> String {
    let limit = target_words + target_words / 4;
    let words: Vec<&str> = result.split_whitespace().collect();
    if words.len() > limit {
        format!("{}…", words[..limit].join(" "))
    } else {
        result.to_string()
    }
}
