//! Sentence segmentation and word tokenization
//!
//! Both functions are deterministic and locale independent: case folding uses
//! Unicode lower-casing and the stop-word list is fixed.

use crate::types::Sentence;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// English stop words excluded from frequency scoring (NLTK list)
static STOP_WORDS: Lazy<HashSet<String>> =
    Lazy::new(|| stop_words::get(stop_words::LANGUAGE::English).into_iter().collect());

/// Alphanumeric runs joined by inner apostrophes ("don't", "rock'n'roll")
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").expect("word pattern is valid")
});

/// Returns true if the (already lower-cased) word is a stop word
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

/// Closing punctuation that stays attached to the sentence it ends
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | ')' | ']')
}

/// Split text into sentences in document order
///
/// A sentence ends after a run of `.`, `!`, `?` or `…` (plus any closing
/// quotes/brackets) that is followed by whitespace or the end of the text.
/// Line breaks also end a sentence since transcribed lyrics are line-oriented.
/// Sentence text is trimmed and blank pieces are dropped.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c == '\n' {
            push_sentence(&mut sentences, &text[start..pos]);
            start = pos + c.len_utf8();
            i += 1;
            continue;
        }

        if is_terminator(c) {
            let mut j = i + 1;
            while j < chars.len() && (is_terminator(chars[j].1) || is_closer(chars[j].1)) {
                j += 1;
            }
            let at_boundary = j == chars.len() || chars[j].1.is_whitespace();
            if at_boundary {
                let end = chars.get(j).map(|(p, _)| *p).unwrap_or(text.len());
                push_sentence(&mut sentences, &text[start..end]);
                start = end;
            }
            i = j;
            continue;
        }

        i += 1;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence(sentences: &mut Vec<Sentence>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(Sentence::new(sentences.len(), trimmed));
    }
}

/// Split text into lower-cased word tokens, dropping stop words
///
/// A word is a run of alphanumeric characters; an apostrophe between two
/// alphanumerics is kept ("don't"), curly apostrophes are folded to `'`.
/// Punctuation never becomes a token.
pub fn tokenize(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .filter(|word| !is_stop_word(word))
        .collect()
}

/// Split text into lower-cased words without stop-word filtering
pub(crate) fn words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase().replace('’', "'"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_segment_basic_sentences() {
        let sentences =
            segment("I feel love in my heart. The king has power. We dance to the beat.");
        assert_eq!(
            texts(&sentences),
            vec![
                "I feel love in my heart.",
                "The king has power.",
                "We dance to the beat."
            ]
        );
        assert_eq!(sentences[2].index, 2);
    }

    #[test]
    fn test_segment_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n ").is_empty());
    }

    #[test]
    fn test_segment_line_breaks_and_runs() {
        let sentences = segment("Oh no!! Where are you?\nStill waiting\n\n\"Come home.\" Now");
        assert_eq!(
            texts(&sentences),
            vec!["Oh no!!", "Where are you?", "Still waiting", "\"Come home.\"", "Now"]
        );
    }

    #[test]
    fn test_segment_keeps_inner_periods() {
        let sentences = segment("Version 2.0 is out. Ok");
        assert_eq!(texts(&sentences), vec!["Version 2.0 is out.", "Ok"]);
    }

    #[test]
    fn test_segment_covers_text_in_order() {
        let text = "  First line!  Second one?   Third...\nFourth\n\n  \"Fifth.\" Sixth ";
        let sentences = segment(text);
        assert_eq!(sentences.len(), 6);

        // Each sentence starts after the previous one, separated by whitespace only
        let mut cursor = 0;
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
            let offset = text[cursor..]
                .find(sentence.text.as_str())
                .unwrap_or_else(|| panic!("{:?} not found after offset {}", sentence.text, cursor));
            let gap = &text[cursor..cursor + offset];
            assert!(gap.trim().is_empty(), "non-whitespace {:?} skipped", gap);
            cursor += offset + sentence.text.len();
        }
        assert!(text[cursor..].trim().is_empty());
    }

    #[test]
    fn test_tokenize_lowercases_and_filters_stop_words() {
        let tokens = tokenize("The King and THE Queen");
        assert_eq!(tokens, vec!["king", "queen"]);
    }

    #[test]
    fn test_words_drop_punctuation_and_keep_contractions() {
        assert_eq!(
            words("Baby, don’t go! Rock'n'roll... 'til 2am"),
            vec!["baby", "don't", "go", "rock'n'roll", "til", "2am"]
        );
    }

    #[test]
    fn test_tokenize_filters_nltk_stop_words() {
        let tokens = tokenize("I was dancing through the night, and you were there");
        assert_eq!(tokens, vec!["dancing", "night"]);
        assert!(is_stop_word("ourselves"));
        assert!(!is_stop_word("love"));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("the and of").is_empty());
    }
}
