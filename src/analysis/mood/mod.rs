//! Mood classification from sentiment polarity

pub mod lexicon;

use crate::analysis::traits::SentimentScorer;
use crate::types::Mood;
use tracing::debug;

pub use lexicon::LexiconSentimentScorer;

/// Polarity above this is Positive/Uplifting
pub const POSITIVE_THRESHOLD: f64 = 0.2;

/// Polarity below this is Negative/Sad
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Bucket a polarity value; both thresholds are exclusive
pub fn mood_for_polarity(polarity: f64) -> Mood {
    if polarity > POSITIVE_THRESHOLD {
        Mood::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Mood::Negative
    } else {
        Mood::Neutral
    }
}

/// Score the text and bucket it into a mood, returning the polarity too
pub fn classify_mood(text: &str, scorer: &dyn SentimentScorer) -> (Mood, f64) {
    let polarity = scorer.polarity(text);
    let mood = mood_for_polarity(polarity);
    debug!(
        "Polarity {:.3} from {} scorer -> {}",
        polarity,
        scorer.name(),
        mood
    );
    (mood, polarity)
}
