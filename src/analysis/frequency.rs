//! Word frequency table and top-K selection

use crate::types::{FrequencyTable, TopWords, WordCount};

/// Number of frequent words that drive sentence scoring
pub const DEFAULT_TOP_K: usize = 10;

/// Count every token in one pass
pub fn build_frequency<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for token in tokens {
        table.record(token.as_ref());
    }
    table
}

/// The `k` highest-count entries, ties kept in first-seen order
///
/// Returns every entry when the table holds fewer than `k` distinct tokens.
pub fn top_k(table: &FrequencyTable, k: usize) -> TopWords {
    let mut entries: Vec<WordCount> = table
        .entries()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();

    // Stable sort keeps first-seen order among equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(k);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize::tokenize;

    fn words(top: &TopWords) -> Vec<&str> {
        top.iter().map(|w| w.word.as_str()).collect()
    }

    #[test]
    fn test_build_frequency_counts() {
        let table = build_frequency(&["love", "beat", "love"]);
        assert_eq!(table.count("love"), 2);
        assert_eq!(table.count("beat"), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_top_k_ties_keep_first_seen_order() {
        let table = build_frequency(&["night", "fire", "love", "fire", "night", "sky"]);
        let top = top_k(&table, 3);
        assert_eq!(words(&top), vec!["night", "fire", "love"]);
        assert_eq!(top[0].count, 2);
        assert_eq!(top[2].count, 1);
    }

    #[test]
    fn test_top_k_fewer_than_k() {
        let table = build_frequency(&["one", "two"]);
        assert_eq!(top_k(&table, DEFAULT_TOP_K).len(), 2);
        assert!(top_k(&build_frequency::<&str>(&[]), DEFAULT_TOP_K).is_empty());
    }

    #[test]
    fn test_top_k_dominates_unreturned_counts() {
        let text = "Rain rain rain falls. Sun sun comes. Wind blows, rain stays, sun sets, \
                    stars shine, moon glows, cloud drifts, storm rolls, sea waves, tide turns.";
        let table = build_frequency(&tokenize(text));
        let top = top_k(&table, 4);
        assert!(top.len() <= 4);

        let min_returned = top.iter().map(|w| w.count).min().unwrap_or(0);
        for (word, count) in table.entries() {
            if !top.iter().any(|w| w.word == word) {
                assert!(count <= min_returned, "{} ({}) beats a returned word", word, count);
            }
        }
    }
}
