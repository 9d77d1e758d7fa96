//! The four pipeline stages
//!
//! Each stage reads exactly one input artifact and writes exactly one output
//! artifact. The text stages are split into a pure part that maps artifact
//! contents to output contents and a thin wrapper doing the file I/O.

use crate::analysis::categorize::categorize;
use crate::analysis::summarize::summarize;
use crate::analysis::traits::{SentimentScorer, Transcriber, TranscriptStatus, VocalSeparator};
use crate::error::{LyricprepError, Result};
use crate::export::{read_document, require_input, write_provenance, write_text};
use crate::types::{ArtifactKind, Document};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Separate,
    Transcribe,
    Summarize,
    Categorize,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Separate,
        Stage::Transcribe,
        Stage::Summarize,
        Stage::Categorize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Separate => "separate",
            Stage::Transcribe => "transcribe",
            Stage::Summarize => "summarize",
            Stage::Categorize => "categorize",
        }
    }

    /// Artifact this stage consumes
    pub fn input_kind(self) -> ArtifactKind {
        match self {
            Stage::Separate => ArtifactKind::SourceAudio,
            Stage::Transcribe => ArtifactKind::VocalAudio,
            Stage::Summarize | Stage::Categorize => ArtifactKind::Lyrics,
        }
    }

    /// Artifact this stage produces
    pub fn output_kind(self) -> ArtifactKind {
        match self {
            Stage::Separate => ArtifactKind::VocalAudio,
            Stage::Transcribe => ArtifactKind::Lyrics,
            Stage::Summarize => ArtifactKind::Summary,
            Stage::Categorize => ArtifactKind::Category,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a completed stage reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub stage: Stage,
    /// Artifact written by the stage
    pub artifact: PathBuf,
    /// Human-readable status line
    pub status: String,
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status)
    }
}

// =============================================================================
// Pure stage bodies
// =============================================================================

/// Summary artifact contents for a lyrics document
pub fn summary_text(document: &Document, top_k: usize, sentences: usize) -> String {
    summarize(document, top_k, sentences).to_text()
}

/// Category artifact contents for a lyrics document
pub fn category_text(document: &Document, scorer: &dyn SentimentScorer) -> String {
    let (label, _) = categorize(document.text(), scorer);
    label.to_string()
}

// =============================================================================
// Stage wrappers
// =============================================================================

/// Separate the vocals of `input` into `output_dir/<stem>/vocals.wav`
///
/// The vocal track's provenance sidecar records `input`.
pub fn separate(
    separator: &dyn VocalSeparator,
    input: &Path,
    output_dir: &Path,
) -> Result<StageOutcome> {
    require_input(ArtifactKind::SourceAudio, input)?;
    info!("Separating vocals with {}", separator.name());

    let vocals = separator.separate(input, output_dir)?;
    write_provenance(&vocals, input)?;

    Ok(StageOutcome {
        stage: Stage::Separate,
        status: format!("Vocals separated to {}", vocals.display()),
        artifact: vocals,
    })
}

/// Transcribe a vocal track into a lyrics file
///
/// The lyrics file (and its provenance sidecar naming `vocal_file`) is only
/// written when the service reports completion; on an error status any
/// existing lyrics file is left untouched.
pub fn transcribe(
    transcriber: &dyn Transcriber,
    vocal_file: &Path,
    output_file: &Path,
) -> Result<StageOutcome> {
    require_input(ArtifactKind::VocalAudio, vocal_file)?;
    info!("Transcribing {} with {}", vocal_file.display(), transcriber.name());

    let transcript = transcriber.transcribe(vocal_file)?;
    match transcript.status {
        TranscriptStatus::Completed => {
            if transcript.text.trim().is_empty() {
                warn!("Transcription of {} came back empty", vocal_file.display());
            }
            write_text(output_file, &transcript.text)?;
            write_provenance(output_file, vocal_file)?;
            Ok(StageOutcome {
                stage: Stage::Transcribe,
                artifact: output_file.to_path_buf(),
                status: format!("Lyrics saved to {}: {}", output_file.display(), transcript.text),
            })
        }
        TranscriptStatus::Error => Err(LyricprepError::TranscriptionFailed {
            reason: transcript
                .error
                .unwrap_or_else(|| "unknown error".to_string()),
        }),
    }
}

/// Write an extractive summary of the lyrics file
pub fn summarize_file(
    input_file: &Path,
    output_file: &Path,
    top_k: usize,
    sentences: usize,
) -> Result<StageOutcome> {
    let document = read_document(ArtifactKind::Lyrics, input_file)?;
    if document.is_blank() {
        warn!("{} is empty, writing an empty summary", input_file.display());
    }
    let summary = summary_text(&document, top_k, sentences);
    write_text(output_file, &summary)?;

    Ok(StageOutcome {
        stage: Stage::Summarize,
        artifact: output_file.to_path_buf(),
        status: format!("Summary saved to {}: {}", output_file.display(), summary),
    })
}

/// Write the Genre/Mood/Theme line for the lyrics file
pub fn categorize_file(
    scorer: &dyn SentimentScorer,
    input_file: &Path,
    output_file: &Path,
) -> Result<StageOutcome> {
    let document = read_document(ArtifactKind::Lyrics, input_file)?;
    let category = category_text(&document, scorer);
    write_text(output_file, &category)?;

    Ok(StageOutcome {
        stage: Stage::Categorize,
        artifact: output_file.to_path_buf(),
        status: format!("Category saved to {}: {}", output_file.display(), category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::mood::LexiconSentimentScorer;
    use crate::analysis::traits::Transcript;
    use std::fs;
    use tempfile::TempDir;

    struct FixedTranscriber(Transcript);

    impl Transcriber for FixedTranscriber {
        fn transcribe(&self, _audio_path: &Path) -> Result<Transcript> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    const LYRICS: &str = "I feel love in my heart. The king has power. We dance to the beat.";

    #[test]
    fn test_stage_order_and_artifacts() {
        assert_eq!(Stage::ALL[0], Stage::Separate);
        assert_eq!(Stage::Separate.output_kind(), Stage::Transcribe.input_kind());
        // Summarize and categorize both branch off the lyrics
        assert_eq!(Stage::Transcribe.output_kind(), Stage::Summarize.input_kind());
        assert_eq!(Stage::Transcribe.output_kind(), Stage::Categorize.input_kind());
    }

    #[test]
    fn test_category_text_scenario() {
        let text = category_text(&Document::new(LYRICS), &LexiconSentimentScorer::new());
        assert!(text.starts_with("Genre: Pop/Romance, Mood: "));
        assert!(text.ends_with(", Theme: Love"));
    }

    #[test]
    fn test_summarize_file_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let lyrics = dir.path().join("lyrics.txt");
        let summary = dir.path().join("summary.txt");
        fs::write(&lyrics, LYRICS).unwrap();

        summarize_file(&lyrics, &summary, 10, 2).unwrap();
        let first = fs::read(&summary).unwrap();
        summarize_file(&lyrics, &summary, 10, 2).unwrap();
        let second = fs::read(&summary).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summarize_missing_lyrics_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let summary = dir.path().join("summary.txt");
        let err = summarize_file(&dir.path().join("lyrics.txt"), &summary, 10, 2).unwrap_err();
        assert!(matches!(err, LyricprepError::MissingInput { .. }));
        assert!(!summary.exists());
    }

    #[test]
    fn test_transcribe_error_status_keeps_existing_lyrics() {
        let dir = TempDir::new().unwrap();
        let vocals = dir.path().join("vocals.wav");
        let lyrics = dir.path().join("lyrics.txt");
        fs::write(&vocals, b"RIFF").unwrap();
        fs::write(&lyrics, "previous lyrics").unwrap();

        let transcriber = FixedTranscriber(Transcript::failed("Audio file is too short"));
        let err = transcribe(&transcriber, &vocals, &lyrics).unwrap_err();

        assert!(err.to_string().contains("Audio file is too short"));
        assert_eq!(fs::read_to_string(&lyrics).unwrap(), "previous lyrics");
    }

    #[test]
    fn test_transcribe_completed_writes_lyrics() {
        let dir = TempDir::new().unwrap();
        let vocals = dir.path().join("vocals.wav");
        let lyrics = dir.path().join("lyrics.txt");
        fs::write(&vocals, b"RIFF").unwrap();

        let transcriber = FixedTranscriber(Transcript::completed(LYRICS));
        let outcome = transcribe(&transcriber, &vocals, &lyrics).unwrap();

        assert_eq!(outcome.stage, Stage::Transcribe);
        assert_eq!(fs::read_to_string(&lyrics).unwrap(), LYRICS);
        assert_eq!(crate::export::recorded_source(&lyrics), Some(vocals));
        assert!(outcome.status.starts_with("Lyrics saved to "));
    }

    #[test]
    fn test_transcribe_missing_vocals() {
        let dir = TempDir::new().unwrap();
        let transcriber = FixedTranscriber(Transcript::completed("unused"));
        let err = transcribe(
            &transcriber,
            &dir.path().join("vocals.wav"),
            &dir.path().join("lyrics.txt"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LyricprepError::MissingInput {
                artifact: ArtifactKind::VocalAudio,
                ..
            }
        ));
    }
}
