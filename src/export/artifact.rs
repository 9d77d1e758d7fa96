//! Plain-text pipeline artifacts
//!
//! Artifacts are the only handoff between stages. Writes go through a temp
//! file in the same directory followed by a rename, so a reader sees either
//! the old artifact or the complete new one, never a partial file.

use crate::error::{LyricprepError, Result};
use crate::types::{ArtifactKind, Document};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a text artifact, failing with `MissingInput` when it does not exist
pub fn read_document(kind: ArtifactKind, path: &Path) -> Result<Document> {
    require_input(kind, path)?;
    let text = std::fs::read_to_string(path)?;
    debug!("Loaded {} ({} bytes) from {}", kind, text.len(), path.display());
    Ok(Document::new(text))
}

/// Fail with `MissingInput` unless `path` is an existing file
pub fn require_input(kind: ArtifactKind, path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(LyricprepError::missing_input(kind, path))
    }
}

/// Sidecar next to an artifact naming the upstream file it was made from
pub fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".source");
    artifact.with_file_name(name)
}

/// Record that `artifact` was produced from `source`
pub fn write_provenance(artifact: &Path, source: &Path) -> Result<()> {
    write_text(&provenance_path(artifact), &source.display().to_string())
}

/// Upstream file recorded for `artifact`, if any
pub fn recorded_source(artifact: &Path) -> Option<PathBuf> {
    let text = std::fs::read_to_string(provenance_path(artifact)).ok()?;
    let source = text.trim_end_matches(['\r', '\n']);
    (!source.is_empty()).then(|| PathBuf::from(source))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write bytes to `path` atomically, creating parent directories
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| LyricprepError::output_error(parent, e))?;
        }
    }

    // Temp file in the same directory keeps the rename on one filesystem
    let temp_path = temp_path_for(path);

    let cleanup_and_error = |reason: String| -> LyricprepError {
        let _ = std::fs::remove_file(&temp_path);
        LyricprepError::OutputError {
            path: path.to_path_buf(),
            reason,
        }
    };

    let mut file = File::create(&temp_path).map_err(|e| LyricprepError::OutputError {
        path: path.to_path_buf(),
        reason: format!("Failed to create temp file: {}", e),
    })?;

    file.write_all(contents)
        .and_then(|_| file.sync_all())
        .map_err(|e| cleanup_and_error(format!("Failed to write: {}", e)))?;
    drop(file);

    std::fs::rename(&temp_path, path)
        .map_err(|e| cleanup_and_error(format!("Failed to finalize file: {}", e)))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Write a text artifact atomically
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    write_atomic(path, text.as_bytes())
}
