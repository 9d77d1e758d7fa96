//! Pipeline stages and the `all` sequencer

pub mod orchestrator;
pub mod stages;

pub use orchestrator::{build_profile, plan, run_all, Backends, PipelineResult, PlannedAction, StagePlan};
pub use stages::{categorize_file, separate, summarize_file, transcribe, Stage, StageOutcome};
