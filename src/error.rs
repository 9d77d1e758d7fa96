//! Unified error types for lyricprep
//!
//! Error strategy:
//! - Missing input artifacts: reported immediately, stage aborts
//! - External service failures (separation, transcription): reported with the
//!   service's message, stage aborts, prior artifacts stay on disk
//! - Empty or degenerate text is never an error; analysis returns defaults
//!
//! All errors include actionable suggestions where possible.

use crate::types::ArtifactKind;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for lyricprep operations
#[derive(Debug, Error)]
pub enum LyricprepError {
    // =========================================================================
    // Input errors - the stage cannot start
    // =========================================================================
    #[error("File {path} not found.\n  Tip: {artifact} is produced by the previous stage, or can be supplied directly")]
    MissingInput { artifact: ArtifactKind, path: PathBuf },

    // =========================================================================
    // External service errors - stage aborts, nothing is written
    // =========================================================================
    #[error("Vocal separation failed: {reason}\n  Tip: Check that spleeter is installed (pip install spleeter) or set LYRICPREP_SPLEETER")]
    SeparationFailed { reason: String },

    #[error("Transcription failed: {reason}")]
    TranscriptionFailed { reason: String },

    #[error("HTTP error talking to the transcription service: {0}")]
    Http(#[from] reqwest::Error),

    // =========================================================================
    // Output and configuration errors
    // =========================================================================
    #[error("Cannot write output to '{path}': {reason}\n  Tip: Check write permissions for the output directory")]
    OutputError { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lyricprep operations
pub type Result<T> = std::result::Result<T, LyricprepError>;

impl LyricprepError {
    /// Returns true if an external collaborator (separator or transcription
    /// service) reported the failure
    pub fn is_external_failure(&self) -> bool {
        matches!(
            self,
            LyricprepError::SeparationFailed { .. }
                | LyricprepError::TranscriptionFailed { .. }
                | LyricprepError::Http(_)
        )
    }

    /// Create a missing input error for the given artifact
    pub fn missing_input(artifact: ArtifactKind, path: impl Into<PathBuf>) -> Self {
        LyricprepError::MissingInput {
            artifact,
            path: path.into(),
        }
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!("Permission denied. Check that you have write access to {}", path.display())
            }
            std::io::ErrorKind::NotFound => {
                format!("Directory does not exist: {}", path.parent().map(|p| p.display().to_string()).unwrap_or_default())
            }
            _ => err.to_string(),
        };
        LyricprepError::OutputError { path, reason }
    }

    /// Create a config error for a missing transcription credential
    pub fn missing_api_key() -> Self {
        LyricprepError::ConfigError(
            "ASSEMBLYAI_API_KEY is not set.\n  Tip: Add it to a .env file or pass --api-key".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_failure_classification() {
        let err = LyricprepError::TranscriptionFailed {
            reason: "audio too short".to_string(),
        };
        assert!(err.is_external_failure());

        let err = LyricprepError::missing_input(ArtifactKind::Lyrics, "lyrics.txt");
        assert!(!err.is_external_failure());
    }

    #[test]
    fn test_missing_input_message() {
        let err = LyricprepError::missing_input(ArtifactKind::Lyrics, "lyrics.txt");
        let message = err.to_string();
        assert!(message.starts_with("File lyrics.txt not found."));
        assert!(message.contains("lyrics"));
    }

    #[test]
    fn test_output_error_permission_hint() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LyricprepError::output_error("/root/summary.txt", io);
        assert!(err.to_string().contains("Permission denied"));
    }
}
