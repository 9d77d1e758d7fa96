//! Spleeter based vocal separator
//!
//! Runs `spleeter separate -p spleeter:2stems -o <dir> <input>` as a child
//! process and checks that the vocal stem landed where spleeter puts it.

use crate::analysis::traits::VocalSeparator;
use crate::error::{LyricprepError, Result};
use crate::types::vocals_path;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Default executable name
pub const DEFAULT_SPLEETER_COMMAND: &str = "spleeter";

/// Two-stem model: vocals + accompaniment
pub const TWO_STEMS_MODEL: &str = "spleeter:2stems";

/// Vocal separator that shells out to spleeter
#[derive(Debug, Clone)]
pub struct SpleeterSeparator {
    /// Executable to run
    program: PathBuf,
    /// Arguments placed before `separate` (e.g. `-m spleeter` for python)
    leading_args: Vec<String>,
    /// Pretrained model descriptor passed with `-p`
    model: String,
}

impl SpleeterSeparator {
    pub fn new() -> Self {
        Self::with_command(DEFAULT_SPLEETER_COMMAND, Vec::new())
    }

    /// Run spleeter through another executable, e.g. `python3 -m spleeter`
    pub fn with_command(program: impl Into<PathBuf>, leading_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            leading_args,
            model: TWO_STEMS_MODEL.to_string(),
        }
    }

    /// Parse a command line such as `"python3 -m spleeter"`
    ///
    /// Returns `None` for a blank command.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::with_command(
            program,
            parts.map(|s| s.to_string()).collect(),
        ))
    }

    fn build_command(&self, input_path: &Path, output_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .arg("separate")
            .arg("-p")
            .arg(&self.model)
            .arg("-o")
            .arg(output_dir)
            .arg(input_path);
        command
    }
}

impl Default for SpleeterSeparator {
    fn default() -> Self {
        Self::new()
    }
}

impl VocalSeparator for SpleeterSeparator {
    fn separate(&self, input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)
            .map_err(|e| LyricprepError::output_error(output_dir, e))?;

        debug!(
            "Running {} on {} -> {}",
            self.program.display(),
            input_path.display(),
            output_dir.display()
        );

        let output = self
            .build_command(input_path, output_dir)
            .output()
            .map_err(|e| LyricprepError::SeparationFailed {
                reason: match e.kind() {
                    std::io::ErrorKind::NotFound => {
                        format!("'{}' was not found on PATH", self.program.display())
                    }
                    _ => format!("could not start '{}': {}", self.program.display(), e),
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("no error output");
            return Err(LyricprepError::SeparationFailed {
                reason: format!("spleeter exited with {}: {}", output.status, detail.trim()),
            });
        }

        let vocals = vocals_path(input_path, output_dir);
        if !vocals.exists() {
            return Err(LyricprepError::SeparationFailed {
                reason: format!("spleeter finished but {} was not created", vocals.display()),
            });
        }

        info!("Vocals separated to {}", vocals.display());
        Ok(vocals)
    }

    fn name(&self) -> &'static str {
        "spleeter"
    }
}
