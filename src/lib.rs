//! lyricprep - Lyric Analysis Pipeline
//!
//! A command-line utility that turns a song into a short lyric profile:
//! isolated vocals, transcribed lyrics, an extractive summary and a coarse
//! Genre/Mood/Theme label.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `analysis`: tokenization, frequency scoring, summarization, mood and
//!   keyword classification, plus the separator/transcriber backends
//! - `pipeline`: the four stages and the `all` sequencer
//! - `export`: atomic artifact writes and the JSON profile report
//!
//! # Example
//!
//! ```
//! use lyricprep::analysis::{categorize, summarize, LexiconSentimentScorer};
//! use lyricprep::types::Document;
//!
//! let lyrics = Document::new("I feel love in my heart. The king has power. We dance to the beat.");
//! let summary = summarize(&lyrics, 10, 2);
//! assert!(summary.sentences.len() <= 2);
//!
//! let (label, _polarity) = categorize(lyrics.text(), &LexiconSentimentScorer::new());
//! assert!(label.to_string().starts_with("Genre: Pop/Romance"));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod types;

// Re-export key types at crate root
pub use error::{LyricprepError, Result};
pub use types::{CategoryLabel, Document, Genre, Mood, Sentence, Summary, Theme};
