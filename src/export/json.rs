//! JSON profile report for interoperability with other tools

use crate::error::{LyricprepError, Result};
use crate::export::artifact::write_atomic;
use crate::types::{CategoryLabel, Summary, TopWords, WordCount};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// JSON output schema version
const SCHEMA_VERSION: &str = "1.0";

/// Default report file name
pub const PROFILE_FILE_NAME: &str = "profile.json";

/// Top-level JSON output structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileJson {
    /// Schema version for forward compatibility
    pub version: String,
    /// lyricprep version that generated this file
    pub generator_version: String,
    /// Timestamp of export
    pub exported_at: String,
    /// Source audio file, when the profile came from a full run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub summary: String,
    pub category: CategoryJson,
    /// Frequent content words that drove the summary
    pub top_words: Vec<WordCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryJson {
    pub genre: String,
    pub mood: String,
    pub theme: String,
    /// Sentiment polarity the mood was bucketed from
    pub polarity: f64,
    /// The category artifact line
    pub label: String,
}

/// Everything the report needs from one pipeline run
#[derive(Debug, Clone)]
pub struct LyricProfile {
    pub source: Option<String>,
    pub summary: Summary,
    pub category: CategoryLabel,
    pub polarity: f64,
    pub top_words: TopWords,
}

fn profile_to_json(profile: &LyricProfile) -> ProfileJson {
    ProfileJson {
        version: SCHEMA_VERSION.to_string(),
        generator_version: env!("CARGO_PKG_VERSION").to_string(),
        exported_at: chrono::Utc::now().to_rfc3339(),
        source: profile.source.clone(),
        summary: profile.summary.to_text(),
        category: CategoryJson {
            genre: profile.category.genre.label().to_string(),
            mood: profile.category.mood.label().to_string(),
            theme: profile.category.theme.label().to_string(),
            polarity: profile.polarity,
            label: profile.category.to_string(),
        },
        top_words: profile.top_words.clone(),
    }
}

/// Write the profile report atomically
pub fn write_profile(profile: &LyricProfile, output_path: &Path) -> Result<()> {
    let json = serde_json::to_vec_pretty(&profile_to_json(profile)).map_err(|e| {
        LyricprepError::OutputError {
            path: output_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    write_atomic(output_path, &json)?;
    info!("Wrote profile to {}", output_path.display());
    Ok(())
}
