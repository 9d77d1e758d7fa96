//! Analysis trait abstractions
//!
//! These traits define the interface for the external collaborators the
//! pipeline talks to. Current implementations shell out to spleeter, call the
//! AssemblyAI HTTP API, and use a built-in sentiment lexicon.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Vocal separation backend
pub trait VocalSeparator {
    /// Split a song into stems and return the path of the vocal stem
    ///
    /// # Arguments
    /// * `input_path` - Path to the source audio file
    /// * `output_dir` - Directory the separator writes into
    ///
    /// # Returns
    /// Path to `output_dir/<file stem>/vocals.wav`
    fn separate(&self, input_path: &Path, output_dir: &Path) -> Result<PathBuf>;

    /// Get the name of this separator (for logging)
    fn name(&self) -> &'static str;
}

/// Outcome reported by a transcription service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptStatus {
    Completed,
    Error,
}

/// Response of a speech-to-text service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub status: TranscriptStatus,
    /// Transcribed text (empty unless completed)
    pub text: String,
    /// Service-provided message when status is `Error`
    pub error: Option<String>,
}

impl Transcript {
    pub fn completed(text: impl Into<String>) -> Self {
        Self {
            status: TranscriptStatus::Completed,
            text: text.into(),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: TranscriptStatus::Error,
            text: String::new(),
            error: Some(message.into()),
        }
    }
}

/// Speech-to-text backend
pub trait Transcriber {
    /// Transcribe an audio file
    ///
    /// A service-side failure is reported as `TranscriptStatus::Error`;
    /// `Err` is reserved for failures to reach the service at all.
    fn transcribe(&self, audio_path: &Path) -> Result<Transcript>;

    /// Get the name of this transcriber (for logging)
    fn name(&self) -> &'static str;
}

/// Sentiment polarity backend
pub trait SentimentScorer {
    /// Polarity of the text in [-1.0, 1.0]
    fn polarity(&self, text: &str) -> f64;

    /// Get the name of this scorer (for logging)
    fn name(&self) -> &'static str;
}
