//! Pipeline orchestration
//!
//! Sequences separate -> transcribe -> summarize -> categorize. Stages only
//! talk through their artifacts. The vocal track and the lyrics carry a
//! provenance sidecar, so a run of the same song resumes after the last
//! external stage that finished, while a different song redoes everything.
//! A run stops at the first stage that fails; artifacts written before the
//! failure stay on disk for the next attempt.

use crate::analysis::categorize::categorize;
use crate::analysis::frequency::{build_frequency, top_k};
use crate::analysis::summarize::summarize;
use crate::analysis::tokenize::tokenize;
use crate::analysis::traits::{SentimentScorer, Transcriber, VocalSeparator};
use crate::config::Settings;
use crate::error::Result;
use crate::export::{self, LyricProfile};
use crate::pipeline::stages::{self, Stage, StageOutcome};
use crate::types::{vocals_path, ArtifactKind, Document};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// External collaborators used by a full run
pub struct Backends<'a> {
    pub separator: &'a dyn VocalSeparator,
    pub transcriber: &'a dyn Transcriber,
    pub scorer: &'a dyn SentimentScorer,
}

/// Whether a stage will do work or reuse its existing artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedAction {
    Run,
    Reuse,
}

/// One stage of a planned run with the artifacts it connects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePlan {
    pub stage: Stage,
    pub input: PathBuf,
    pub output: PathBuf,
    pub action: PlannedAction,
}

/// Pipeline result summary
#[derive(Debug, Default)]
pub struct PipelineResult {
    /// Stages that ran, in order
    pub completed: Vec<StageOutcome>,
    /// Stages whose existing artifact was reused
    pub reused: Vec<Stage>,
    /// Profile report, when requested
    pub profile: Option<PathBuf>,
}

/// Work out which stages a run of `input` has to execute
///
/// Only the external stages can be reused: their artifact must exist, its
/// provenance sidecar must name this run's upstream file, `force` must be off
/// and nothing upstream may be regenerated. Summarize and categorize are cheap
/// and always run, so shared `summary.txt` / `category.txt` paths never carry
/// another song's results.
pub fn plan(input: &Path, settings: &Settings) -> Vec<StagePlan> {
    let vocals = vocals_path(input, &settings.output_dir);
    let mut upstream_changed = false;

    Stage::ALL
        .iter()
        .map(|&stage| {
            let (stage_input, output) = match stage {
                Stage::Separate => (input.to_path_buf(), vocals.clone()),
                Stage::Transcribe => (vocals.clone(), settings.lyrics_path.clone()),
                Stage::Summarize => (settings.lyrics_path.clone(), settings.summary_path.clone()),
                Stage::Categorize => (settings.lyrics_path.clone(), settings.category_path.clone()),
            };

            let reusable = matches!(stage, Stage::Separate | Stage::Transcribe)
                && !settings.force
                && !upstream_changed
                && output.is_file()
                && export::recorded_source(&output).as_deref() == Some(stage_input.as_path());

            let action = if reusable {
                PlannedAction::Reuse
            } else {
                upstream_changed = true;
                PlannedAction::Run
            };

            StagePlan {
                stage,
                input: stage_input,
                output,
                action,
            }
        })
        .collect()
}

/// Run every stage for `input`, skipping stages whose artifacts can be reused
pub fn run_all(input: &Path, settings: &Settings, backends: &Backends<'_>) -> Result<PipelineResult> {
    let pipeline_start = Instant::now();
    let steps = plan(input, settings);

    if settings.dry_run {
        print_plan(&steps, settings);
        return Ok(PipelineResult::default());
    }

    let mut result = PipelineResult::default();
    let mut vocal_file = vocals_path(input, &settings.output_dir);

    for step in &steps {
        if step.action == PlannedAction::Reuse {
            info!("Reusing {} for {}", step.output.display(), step.stage);
            println!(
                "Skipping {}: {} is up to date (use --force to redo)",
                step.stage,
                step.output.display()
            );
            result.reused.push(step.stage);
            continue;
        }

        let stage_start = Instant::now();
        let outcome = match step.stage {
            Stage::Separate => {
                let outcome = stages::separate(backends.separator, input, &settings.output_dir)?;
                vocal_file = outcome.artifact.clone();
                outcome
            }
            Stage::Transcribe => {
                stages::transcribe(backends.transcriber, &vocal_file, &settings.lyrics_path)?
            }
            Stage::Summarize => stages::summarize_file(
                &settings.lyrics_path,
                &settings.summary_path,
                settings.top_k,
                settings.summary_sentences,
            )?,
            Stage::Categorize => stages::categorize_file(
                backends.scorer,
                &settings.lyrics_path,
                &settings.category_path,
            )?,
        };

        info!(
            "Stage {} completed in {:.2}s",
            step.stage,
            stage_start.elapsed().as_secs_f64()
        );
        println!("{}", outcome);
        result.completed.push(outcome);
    }

    if settings.write_json {
        let document = export::read_document(ArtifactKind::Lyrics, &settings.lyrics_path)?;
        let profile = build_profile(
            &document,
            settings,
            backends.scorer,
            Some(input.display().to_string()),
        );
        export::write_profile(&profile, &settings.profile_path)?;
        println!("Profile saved to {}", settings.profile_path.display());
        result.profile = Some(settings.profile_path.clone());
    }

    info!(
        "Total pipeline time: {:.2}s",
        pipeline_start.elapsed().as_secs_f64()
    );

    Ok(result)
}

/// Assemble the combined profile of a lyrics document
pub fn build_profile(
    document: &Document,
    settings: &Settings,
    scorer: &dyn SentimentScorer,
    source: Option<String>,
) -> LyricProfile {
    let summary = summarize(document, settings.top_k, settings.summary_sentences);
    let top_words = top_k(&build_frequency(&tokenize(document.text())), settings.top_k);
    let (category, polarity) = categorize(document.text(), scorer);
    debug!("Profile: {} (polarity {:.3})", category, polarity);

    LyricProfile {
        source,
        summary,
        category,
        polarity,
        top_words,
    }
}

/// Dry run mode - show the stages that would run without running them
fn print_plan(steps: &[StagePlan], settings: &Settings) {
    println!();
    println!("=== DRY RUN MODE ===");
    println!();

    for step in steps {
        let action = match step.action {
            PlannedAction::Run => "run",
            PlannedAction::Reuse => "reuse",
        };
        println!(
            "  {:<10} {:<5} {} -> {}",
            step.stage.name(),
            action,
            step.input.display(),
            step.output.display()
        );
    }

    if settings.write_json {
        println!("  {:<10} {:<5} {}", "profile", "write", settings.profile_path.display());
    }
    println!();
}
