//! Keyword rules for genre and theme, plus the combined category label
//!
//! Rules are evaluated in order and the first rule with any keyword present
//! (substring match on the lower-cased text) wins.

use crate::analysis::mood::classify_mood;
use crate::analysis::traits::SentimentScorer;
use crate::types::{CategoryLabel, Genre, Theme};
use tracing::debug;

/// A keyword-presence rule
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub genre: Genre,
    pub theme: Theme,
}

impl KeywordRule {
    /// True if any keyword occurs in the already lower-cased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Ordered rule list; earlier rules take precedence
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["love", "heart"],
        genre: Genre::PopRomance,
        theme: Theme::Love,
    },
    KeywordRule {
        keywords: &["king", "queen", "power"],
        genre: Genre::RockEpicPop,
        theme: Theme::PowerLeadership,
    },
    KeywordRule {
        keywords: &["dance", "beat"],
        genre: Genre::DancePop,
        theme: Theme::Energy,
    },
];

/// Result when no rule matches
pub const DEFAULT_GENRE_THEME: (Genre, Theme) = (Genre::Unknown, Theme::General);

/// Apply a rule list with first-match-wins semantics
pub fn classify_with_rules(text: &str, rules: &[KeywordRule]) -> (Genre, Theme) {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| (rule.genre, rule.theme))
        .unwrap_or(DEFAULT_GENRE_THEME)
}

/// Genre and theme from the built-in rules
pub fn classify_genre_theme(text: &str) -> (Genre, Theme) {
    classify_with_rules(text, RULES)
}

/// Full category label: keyword genre/theme plus sentiment mood
///
/// Also returns the polarity the mood was derived from.
pub fn categorize(text: &str, scorer: &dyn SentimentScorer) -> (CategoryLabel, f64) {
    let (mood, polarity) = classify_mood(text, scorer);
    let (genre, theme) = classify_genre_theme(text);
    let label = CategoryLabel { genre, mood, theme };
    debug!("Categorized as {}", label);
    (label, polarity)
}
