//! Lexicon-based sentiment polarity
//!
//! Pattern-style scoring: every lexicon word found in the text contributes its
//! polarity, an intensifier right before it scales the value, a negation right
//! before it flips and dampens it. Text polarity is the mean contribution.

use crate::analysis::tokenize::words;
use crate::analysis::traits::SentimentScorer;

/// Word polarities in [-1.0, 1.0]
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("alive", 0.1),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("bright", 0.7),
    ("calm", 0.3),
    ("celebrate", 0.5),
    ("cheer", 0.5),
    ("dream", 0.3),
    ("dreams", 0.3),
    ("easy", 0.43),
    ("fine", 0.42),
    ("free", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("glory", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("hope", 0.4),
    ("joy", 0.8),
    ("kind", 0.6),
    ("laugh", 0.5),
    ("light", 0.4),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("nice", 0.6),
    ("peace", 0.5),
    ("perfect", 1.0),
    ("pretty", 0.25),
    ("proud", 0.8),
    ("shine", 0.5),
    ("smile", 0.3),
    ("strong", 0.43),
    ("sweet", 0.35),
    ("true", 0.35),
    ("warm", 0.6),
    ("win", 0.8),
    ("wonderful", 1.0),
    // negative
    ("alone", -0.4),
    ("angry", -0.5),
    ("bad", -0.7),
    ("broken", -0.4),
    ("cold", -0.6),
    ("cry", -0.5),
    ("crying", -0.5),
    ("dark", -0.15),
    ("dead", -0.2),
    ("die", -0.5),
    ("empty", -0.1),
    ("fear", -0.6),
    ("hate", -0.8),
    ("hurt", -0.6),
    ("lonely", -0.5),
    ("lost", -0.5),
    ("mad", -0.63),
    ("miss", -0.3),
    ("pain", -0.7),
    ("sad", -0.5),
    ("scared", -0.6),
    ("sick", -0.71),
    ("sorry", -0.5),
    ("tears", -0.4),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Words that scale the polarity of the word right after them
const INTENSIFIERS: &[(&str, f64)] = &[
    ("really", 1.3),
    ("very", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("truly", 1.3),
    ("extremely", 1.5),
    ("totally", 1.5),
    ("forever", 1.2),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "can't", "won't", "ain't", "isn't", "wasn't", "doesn't",
    "didn't", "cannot", "nothing", "nobody",
];

/// Factor applied to a negated word's polarity
const NEGATION_FACTOR: f64 = -0.5;

fn lookup(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, polarity)| *polarity)
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, factor)| *factor)
}

/// Built-in sentiment scorer backed by a small English lexicon
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentimentScorer;

impl LexiconSentimentScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn polarity(&self, text: &str) -> f64 {
        let words = words(text);
        let mut contributions = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let Some(mut value) = lookup(word) else {
                continue;
            };

            // Look back over at most an intensifier and a negation: "not very good"
            let mut back = i;
            if back > 0 {
                if let Some(factor) = intensity(&words[back - 1]) {
                    value *= factor;
                    back -= 1;
                }
            }
            if back > 0 && NEGATIONS.contains(&words[back - 1].as_str()) {
                value *= NEGATION_FACTOR;
            }

            contributions.push(value.clamp(-1.0, 1.0));
        }

        if contributions.is_empty() {
            return 0.0;
        }

        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
