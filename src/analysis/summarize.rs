//! Frequency-based extractive summarization
//!
//! Sentences are scored by the counts of the top-K frequent words they
//! contain and the best `n` are kept verbatim.
//!
//! Containment is a substring check against the lower-cased sentence, so a top
//! word like "king" also matches "kingdom". The summary lists sentences in
//! score order, not document order, and never repeats a line.

use crate::analysis::frequency::{build_frequency, top_k};
use crate::analysis::tokenize::{segment, tokenize};
use crate::types::{Document, ScoredSentence, Sentence, Summary, TopWords};
use std::collections::HashMap;
use tracing::debug;

/// Number of sentences kept in a summary
pub const DEFAULT_SUMMARY_SENTENCES: usize = 2;

/// Score each sentence by the counts of the top words it contains
///
/// Each top word contributes its count at most once per sentence.
/// Output is in document order.
pub fn score_sentences(sentences: &[Sentence], top_words: &TopWords) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|sentence| {
            let lowered = sentence.text.to_lowercase();
            let score = top_words
                .iter()
                .filter(|w| lowered.contains(w.word.as_str()))
                .map(|w| w.count)
                .sum();
            ScoredSentence {
                sentence: sentence.clone(),
                score,
            }
        })
        .collect()
}

/// Fold repeated sentences into one entry per distinct text
///
/// A repeated line (a chorus) adds its score once per occurrence and keeps the
/// position of its first occurrence.
pub fn merge_repeats(scores: &[ScoredSentence]) -> Vec<ScoredSentence> {
    let mut merged: Vec<ScoredSentence> = Vec::with_capacity(scores.len());
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for scored in scores {
        match positions.get(scored.sentence.text.as_str()) {
            Some(&pos) => merged[pos].score += scored.score,
            None => {
                positions.insert(scored.sentence.text.as_str(), merged.len());
                merged.push(scored.clone());
            }
        }
    }

    merged
}

/// Keep the `n` highest-scoring distinct sentences
///
/// Repeated sentences are merged first, so a line appears at most once.
/// Equal scores keep document order. When fewer than `n` sentences score
/// above zero, zero-score sentences fill the remaining slots.
pub fn select_summary(scores: &[ScoredSentence], n: usize) -> Summary {
    let mut ranked = merge_repeats(scores);
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    Summary {
        sentences: ranked
            .into_iter()
            .take(n)
            .map(|scored| scored.sentence)
            .collect(),
    }
}

/// Full summarization of a document
pub fn summarize(document: &Document, k: usize, n: usize) -> Summary {
    let sentences = segment(document.text());
    let table = build_frequency(&tokenize(document.text()));
    let top_words = top_k(&table, k);

    debug!(
        "Summarizing {} sentences, top words: {:?}",
        sentences.len(),
        top_words.iter().map(|w| w.word.as_str()).collect::<Vec<_>>()
    );

    let scores = score_sentences(&sentences, &top_words);
    select_summary(&scores, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::frequency::DEFAULT_TOP_K;
    use crate::types::WordCount;

    fn top(words: &[(&str, usize)]) -> TopWords {
        words
            .iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_score_counts_each_top_word_once() {
        let sentences = segment("Love love love me. Nothing here.");
        let scores = score_sentences(&sentences, &top(&[("love", 3)]));
        assert_eq!(scores[0].score, 3);
        assert_eq!(scores[1].score, 0);
    }

    #[test]
    fn test_score_uses_substring_match() {
        let sentences = segment("Welcome to my kingdom.");
        let scores = score_sentences(&sentences, &top(&[("king", 2)]));
        assert_eq!(scores[0].score, 2);
    }

    #[test]
    fn test_score_is_case_insensitive() {
        let sentences = segment("HEART of GOLD.");
        let scores = score_sentences(&sentences, &top(&[("heart", 1), ("gold", 1)]));
        assert_eq!(scores[0].score, 2);
    }

    #[test]
    fn test_select_summary_uses_score_order() {
        let sentences = segment("Quiet start. Fire fire burning. Fire again.");
        let scores = score_sentences(&sentences, &top(&[("fire", 3), ("burning", 1)]));
        let summary = select_summary(&scores, 2);
        assert_eq!(summary.to_text(), "Fire fire burning. Fire again.");
    }

    #[test]
    fn test_select_summary_pads_with_zero_scores() {
        let sentences = segment("Nothing. Love here. Silence.");
        let scores = score_sentences(&sentences, &top(&[("love", 1)]));
        let summary = select_summary(&scores, 2);
        let texts: Vec<_> = summary.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Love here.", "Nothing."]);
    }

    #[test]
    fn test_repeated_line_appears_once_with_summed_score() {
        // "love" (2) and "hate" (1) are the top words
        let summary = summarize(&Document::new("Love me. Love me. Hate you."), DEFAULT_TOP_K, 2);
        assert_eq!(summary.to_text(), "Love me. Hate you.");
    }

    #[test]
    fn test_merge_repeats_sums_and_keeps_first_position() {
        let sentences = segment("Hold on.\nLet go.\nHold on.\nHold on.");
        let merged = merge_repeats(&score_sentences(&sentences, &top(&[("hold", 3), ("go", 1)])));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].sentence.index, 0);
        assert_eq!(merged[0].score, 9);
        assert_eq!(merged[1].sentence.text, "Let go.");
        assert_eq!(merged[1].score, 1);
    }

    #[test]
    fn test_summary_selection_beats_document_order() {
        let document = Document::new("Hello there. Dance dance dance all night. Dance with me.");
        let summary = summarize(&document, DEFAULT_TOP_K, 2);
        assert_eq!(
            summary.to_text(),
            "Dance dance dance all night. Dance with me."
        );
    }

    #[test]
    fn test_summarize_empty_document() {
        let summary = summarize(&Document::new(""), DEFAULT_TOP_K, DEFAULT_SUMMARY_SENTENCES);
        assert!(summary.is_empty());
        assert_eq!(summary.to_text(), "");
    }

    #[test]
    fn test_summary_never_fabricates_text() {
        let text = "Kings and queens. Power to the people! We rise, we fall. Crowns of gold.";
        let summary = summarize(&Document::new(text), DEFAULT_TOP_K, DEFAULT_SUMMARY_SENTENCES);
        let sentences = segment(text);
        assert!(summary.sentences.len() <= DEFAULT_SUMMARY_SENTENCES);
        for selected in &summary.sentences {
            assert!(sentences.contains(selected));
        }
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let document = Document::new("A b c love. Love d e. Heart f g. Heart love h.");
        let first = summarize(&document, DEFAULT_TOP_K, 2).to_text();
        let second = summarize(&document, DEFAULT_TOP_K, 2).to_text();
        assert_eq!(first, second);
    }
}
