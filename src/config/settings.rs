//! Runtime configuration settings

use super::cli::{Cli, Commands};
use crate::analysis::frequency::DEFAULT_TOP_K;
use crate::analysis::separation::spleeter::DEFAULT_SPLEETER_COMMAND;
use crate::analysis::summarize::DEFAULT_SUMMARY_SENTENCES;
use crate::analysis::transcription::assemblyai::{DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL};
use crate::export::PROFILE_FILE_NAME;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the transcription API key
pub const API_KEY_ENV: &str = "ASSEMBLYAI_API_KEY";

/// Environment variable overriding the transcription endpoint
pub const API_URL_ENV: &str = "LYRICPREP_ASSEMBLYAI_URL";

/// Environment variable overriding the spleeter command
pub const SPLEETER_ENV: &str = "LYRICPREP_SPLEETER";

/// Runtime settings for the lyric pipeline
#[derive(Debug, Clone)]
pub struct Settings {
    /// Number of frequent words used to score sentences
    pub top_k: usize,
    /// Number of sentences kept in the summary
    pub summary_sentences: usize,
    /// Directory the separator writes stems into
    pub output_dir: PathBuf,
    /// Lyrics artifact used by `all`
    pub lyrics_path: PathBuf,
    /// Summary artifact used by `all`
    pub summary_path: PathBuf,
    /// Category artifact used by `all`
    pub category_path: PathBuf,
    /// Profile report written by `all --json`
    pub profile_path: PathBuf,
    /// Re-run stages whose output already exists
    pub force: bool,
    /// Write the JSON profile report
    pub write_json: bool,
    /// Dry run mode - show the plan without running it
    pub dry_run: bool,
    /// Transcription API key
    pub api_key: Option<String>,
    /// Transcription service base URL
    pub api_url: String,
    /// Delay between transcription status polls
    pub poll_interval: Duration,
    /// Command line used to run spleeter
    pub separator_command: String,
    /// Show progress spinners
    pub show_progress: bool,
}

impl Settings {
    /// Create settings from CLI arguments and the environment
    pub fn from_cli(cli: &Cli) -> Self {
        let mut settings = Self {
            top_k: cli.top_words,
            summary_sentences: cli.summary_sentences,
            api_key: cli.api_key.clone().or_else(|| env_non_empty(API_KEY_ENV)),
            api_url: env_non_empty(API_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            separator_command: cli
                .separator
                .clone()
                .or_else(|| env_non_empty(SPLEETER_ENV))
                .unwrap_or_else(|| DEFAULT_SPLEETER_COMMAND.to_string()),
            show_progress: !cli.quiet,
            ..Self::default()
        };

        if let Commands::All {
            output_dir,
            force,
            json,
            dry_run,
            ..
        } = &cli.command
        {
            settings.output_dir = output_dir.clone();
            settings.force = *force;
            settings.write_json = *json;
            settings.dry_run = *dry_run;
        }

        settings
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            output_dir: PathBuf::from("output_directory"),
            lyrics_path: PathBuf::from("lyrics.txt"),
            summary_path: PathBuf::from("summary.txt"),
            category_path: PathBuf::from("category.txt"),
            profile_path: PathBuf::from(PROFILE_FILE_NAME),
            force: false,
            write_json: false,
            dry_run: false,
            api_key: None,
            api_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            separator_command: DEFAULT_SPLEETER_COMMAND.to_string(),
            show_progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_artifact_names() {
        let settings = Settings::default();
        assert_eq!(settings.lyrics_path, PathBuf::from("lyrics.txt"));
        assert_eq!(settings.summary_path, PathBuf::from("summary.txt"));
        assert_eq!(settings.category_path, PathBuf::from("category.txt"));
        assert_eq!(settings.top_k, 10);
        assert_eq!(settings.summary_sentences, 2);
    }

    #[test]
    fn test_from_cli_all_flags() {
        let cli = Cli::try_parse_from([
            "lyricprep",
            "all",
            "song.mp3",
            "--output-dir",
            "stems",
            "--force",
            "--dry-run",
            "--api-key",
            "secret",
            "--separator",
            "python3 -m spleeter",
        ])
        .unwrap();
        let settings = Settings::from_cli(&cli);
        assert_eq!(settings.output_dir, PathBuf::from("stems"));
        assert!(settings.force);
        assert!(settings.dry_run);
        assert!(!settings.write_json);
        assert_eq!(settings.api_key.as_deref(), Some("secret"));
        assert_eq!(settings.separator_command, "python3 -m spleeter");
    }
}
