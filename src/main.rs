//! lyricprep CLI entry point

use clap::Parser;
use lyricprep::analysis::{AssemblyAiTranscriber, LexiconSentimentScorer, SpleeterSeparator};
use lyricprep::config::{Cli, Commands, Settings};
use lyricprep::pipeline::{self, Backends};
use lyricprep::{LyricprepError, Result};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Credentials may live in a .env file next to the songs
    let dotenv = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli);

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    // Build settings from CLI and environment
    let settings = Settings::from_cli(&cli);

    match run(&cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn spleeter(settings: &Settings) -> Result<SpleeterSeparator> {
    SpleeterSeparator::from_command_line(&settings.separator_command).ok_or_else(|| {
        LyricprepError::ConfigError("separator command is empty".to_string())
    })
}

fn run(command: &Commands, settings: &Settings) -> Result<()> {
    let outcome = match command {
        Commands::Separate { input, output_dir } => {
            pipeline::separate(&spleeter(settings)?, input, output_dir)?
        }
        Commands::Transcribe {
            vocal_file,
            output_file,
        } => {
            let transcriber = AssemblyAiTranscriber::from_settings(settings)?;
            pipeline::transcribe(&transcriber, vocal_file, output_file)?
        }
        Commands::Summarize {
            input_file,
            output_file,
        } => pipeline::summarize_file(
            input_file,
            output_file,
            settings.top_k,
            settings.summary_sentences,
        )?,
        Commands::Categorize {
            input_file,
            output_file,
        } => pipeline::categorize_file(&LexiconSentimentScorer::new(), input_file, output_file)?,
        Commands::All { input_file, .. } => {
            let separator = spleeter(settings)?;
            let transcriber = AssemblyAiTranscriber::from_settings(settings)?;
            let scorer = LexiconSentimentScorer::new();
            let backends = Backends {
                separator: &separator,
                transcriber: &transcriber,
                scorer: &scorer,
            };

            let result = pipeline::run_all(input_file, settings, &backends)?;
            if !settings.dry_run {
                info!(
                    "{} stages ran, {} reused",
                    result.completed.len(),
                    result.reused.len()
                );
            }
            return Ok(());
        }
    };

    println!("{}", outcome);
    Ok(())
}
