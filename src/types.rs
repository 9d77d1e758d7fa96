//! Core data types for lyricprep
//!
//! These types represent the domain model and flow through the pipeline.
//! Everything here is built fresh per run from an upstream artifact; only the
//! artifacts themselves persist between runs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// Text primitives
// =============================================================================

/// The lyrics of a song as an immutable text blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Raw text as transcribed or loaded from disk
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the document holds no non-whitespace characters
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A sentence of a [`Document`], in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position in the segmented document (0-based)
    pub index: usize,
    /// Trimmed sentence text, verbatim from the document
    pub text: String,
}

impl Sentence {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

// =============================================================================
// Frequency scoring
// =============================================================================

/// Occurrence counts of filtered tokens over a whole document
///
/// Built in one pass; entries remember the order in which each token was
/// first seen so ties can be broken stably.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl FrequencyTable {
    /// Record one occurrence of a token
    pub(crate) fn record(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
                self.first_seen.push(token.to_string());
            }
        }
    }

    /// Count for a token (0 when never seen)
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.first_seen
            .iter()
            .map(move |token| (token.as_str(), self.counts[token]))
    }
}

/// A frequent content word and its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// The K most frequent words, highest count first, ties in first-seen order
pub type TopWords = Vec<WordCount>;

/// A sentence together with its accumulated rank score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: usize,
}

/// Extractive summary: selected sentences in selection (score) order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub sentences: Vec<Sentence>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Artifact text: sentences joined by a single space
    pub fn to_text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================================
// Category labels
// =============================================================================

/// Overall tone of the lyrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Positive => "Positive/Uplifting",
            Mood::Negative => "Negative/Sad",
            Mood::Neutral => "Neutral",
        }
    }
}

/// Coarse genre guessed from keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    PopRomance,
    RockEpicPop,
    DancePop,
    Unknown,
}

impl Genre {
    pub fn label(self) -> &'static str {
        match self {
            Genre::PopRomance => "Pop/Romance",
            Genre::RockEpicPop => "Rock/Epic Pop",
            Genre::DancePop => "Dance/Pop",
            Genre::Unknown => "Unknown",
        }
    }
}

/// Lyrical theme guessed from keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Love,
    PowerLeadership,
    Energy,
    General,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Theme::Love => "Love",
            Theme::PowerLeadership => "Power/Leadership",
            Theme::Energy => "Energy",
            Theme::General => "General",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Mood, Genre, Theme);

/// (Genre, Mood, Theme) triple derived from the lyrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub genre: Genre,
    pub mood: Mood,
    pub theme: Theme,
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Genre: {}, Mood: {}, Theme: {}",
            self.genre, self.mood, self.theme
        )
    }
}

// =============================================================================
// Pipeline artifacts
// =============================================================================

/// Files that hand work from one stage to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Source song handed to the separator (input only, never written)
    SourceAudio,
    VocalAudio,
    Lyrics,
    Summary,
    Category,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::SourceAudio => "the source audio file",
            ArtifactKind::VocalAudio => "the vocal track",
            ArtifactKind::Lyrics => "the lyrics file",
            ArtifactKind::Summary => "the summary file",
            ArtifactKind::Category => "the category file",
        };
        f.write_str(name)
    }
}

/// Where the separator leaves the vocal stem for a given input song:
/// `output_dir/<file stem>/vocals.wav`
pub fn vocals_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("track");
    output_dir.join(stem).join("vocals.wav")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_format() {
        let label = CategoryLabel {
            genre: Genre::Unknown,
            mood: Mood::Neutral,
            theme: Theme::General,
        };
        assert_eq!(
            label.to_string(),
            "Genre: Unknown, Mood: Neutral, Theme: General"
        );
    }

    #[test]
    fn test_vocals_path_strips_extension() {
        let path = vocals_path(Path::new("/music/kings_and_queens.mp3"), Path::new("output_directory"));
        assert_eq!(path, PathBuf::from("output_directory/kings_and_queens/vocals.wav"));
    }

    #[test]
    fn test_frequency_table_first_seen_order() {
        let mut table = FrequencyTable::default();
        for token in ["beat", "love", "beat", "night"] {
            table.record(token);
        }
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries, vec![("beat", 2), ("love", 1), ("night", 1)]);
        assert_eq!(table.count("missing"), 0);
    }

    #[test]
    fn test_summary_joins_with_single_space() {
        let summary = Summary {
            sentences: vec![Sentence::new(1, "The king has power."), Sentence::new(0, "I feel love.")],
        };
        assert_eq!(summary.to_text(), "The king has power. I feel love.");
    }
}
