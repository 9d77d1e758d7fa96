//! Lyric analysis modules
//!
//! The text stages (tokenize, frequency, summarize, mood, categorize) are pure
//! functions over the lyrics. The traits abstract the external collaborators so
//! backends can be swapped without changing pipeline code.

pub mod categorize;
pub mod frequency;
pub mod mood;
pub mod separation;
pub mod summarize;
pub mod tokenize;
pub mod traits;
pub mod transcription;

pub use traits::{SentimentScorer, Transcriber, Transcript, TranscriptStatus, VocalSeparator};

pub use categorize::{categorize, classify_genre_theme};
pub use frequency::{build_frequency, top_k};
pub use mood::{classify_mood, LexiconSentimentScorer};
pub use summarize::{merge_repeats, score_sentences, select_summary, summarize};
pub use tokenize::{segment, tokenize};

// External service backends
pub use separation::SpleeterSeparator;
pub use transcription::AssemblyAiTranscriber;
