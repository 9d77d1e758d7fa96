//! CLI argument parsing and configuration

use crate::analysis::frequency::DEFAULT_TOP_K;
use crate::analysis::summarize::DEFAULT_SUMMARY_SENTENCES;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lyricprep - Turn a song into a short lyric profile
///
/// Separates the vocals, transcribes the lyrics, then writes an extractive
/// summary and a Genre/Mood/Theme label. Every step reads and writes plain
/// files, so any step can be re-run on its own.
#[derive(Parser, Debug)]
#[command(name = "lyricprep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,

    /// Number of frequent words used to score sentences
    #[arg(long, value_name = "K", default_value_t = DEFAULT_TOP_K, global = true)]
    pub top_words: usize,

    /// Number of sentences kept in the summary
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SUMMARY_SENTENCES, global = true)]
    pub summary_sentences: usize,

    /// AssemblyAI API key (defaults to ASSEMBLYAI_API_KEY, .env is honored)
    #[arg(long, value_name = "KEY", global = true)]
    pub api_key: Option<String>,

    /// Command used to run spleeter (defaults to LYRICPREP_SPLEETER or "spleeter")
    #[arg(long, value_name = "COMMAND", global = true)]
    pub separator: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Separate vocals from an audio file using spleeter
    Separate {
        /// Song to separate
        input: PathBuf,

        /// Directory spleeter writes stems into
        #[arg(default_value = "output_directory")]
        output_dir: PathBuf,
    },

    /// Transcribe vocals to text using AssemblyAI
    Transcribe {
        /// Vocal track produced by `separate`
        vocal_file: PathBuf,

        #[arg(default_value = "lyrics.txt")]
        output_file: PathBuf,
    },

    /// Summarize lyrics from a text file
    Summarize {
        #[arg(default_value = "lyrics.txt")]
        input_file: PathBuf,

        #[arg(default_value = "summary.txt")]
        output_file: PathBuf,
    },

    /// Categorize a song based on its lyrics
    Categorize {
        #[arg(default_value = "lyrics.txt")]
        input_file: PathBuf,

        #[arg(default_value = "category.txt")]
        output_file: PathBuf,
    },

    /// Run all steps: separate, transcribe, summarize, categorize
    All {
        /// Song to analyze
        input_file: PathBuf,

        /// Directory spleeter writes stems into
        #[arg(long, value_name = "DIR", default_value = "output_directory")]
        output_dir: PathBuf,

        /// Re-run steps whose output already exists (by default they are reused)
        #[arg(long, default_value = "false")]
        force: bool,

        /// Also write profile.json with the combined results
        #[arg(long, default_value = "false")]
        json: bool,

        /// Dry run - show which steps would run without running them
        #[arg(long, default_value = "false")]
        dry_run: bool,
    },
}

impl Cli {
    /// Get the log filter based on verbosity flags
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_defaults() {
        let cli = Cli::try_parse_from(["lyricprep", "summarize"]).unwrap();
        match cli.command {
            Commands::Summarize {
                input_file,
                output_file,
            } => {
                assert_eq!(input_file, PathBuf::from("lyrics.txt"));
                assert_eq!(output_file, PathBuf::from("summary.txt"));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.top_words, DEFAULT_TOP_K);
        assert_eq!(cli.summary_sentences, DEFAULT_SUMMARY_SENTENCES);
    }

    #[test]
    fn test_separate_requires_input() {
        assert!(Cli::try_parse_from(["lyricprep", "separate"]).is_err());
        let cli = Cli::try_parse_from(["lyricprep", "separate", "song.mp3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Separate { ref output_dir, .. } if output_dir == &PathBuf::from("output_directory")
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lyricprep", "all", "song.mp3", "--json", "-vv", "--top-words", "5"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.top_words, 5);
        assert_eq!(cli.log_filter(), "debug");
        assert!(matches!(cli.command, Commands::All { json: true, force: false, .. }));
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let cli = Cli::try_parse_from(["lyricprep", "-q", "-v", "categorize"]).unwrap();
        assert_eq!(cli.log_filter(), "error");
    }
}
