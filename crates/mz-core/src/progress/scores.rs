//! High score table
//!
//! Keeps the best scores sorted highest first and capped at `MAX_SCORES`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player name
    pub name: String,
    /// Final score
    pub score: i64,
    /// When the score was recorded
    pub date: DateTime<Utc>,
}

impl ScoreEntry {
    /// Create an entry stamped with the current time
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self::with_date(name, score, Utc::now())
    }

    pub fn with_date(name: impl Into<String>, score: i64, date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            score,
            date,
        }
    }

    /// Format the score entry for display
    pub fn format_short(&self) -> String {
        format!(
            "{:>8} {} ({})",
            self.score,
            self.name,
            self.date.format("%Y-%m-%d")
        )
    }
}

/// High score table
///
/// Serialized as a plain list. Loading re-sorts and trims the list, so a
/// hand-edited or legacy file cannot break the ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoreEntry>", into = "Vec<ScoreEntry>")]
pub struct HighScores {
    pub entries: Vec<ScoreEntry>,
}

impl From<Vec<ScoreEntry>> for HighScores {
    fn from(entries: Vec<ScoreEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<HighScores> for Vec<ScoreEntry> {
    fn from(scores: HighScores) -> Self {
        scores.entries
    }
}

impl HighScores {
    /// Create a new empty high score table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a table from arbitrary entries, sorting and trimming them
    pub fn from_entries(entries: impl IntoIterator<Item = ScoreEntry>) -> Self {
        let mut scores = Self::new();
        for entry in entries {
            scores.add_score(entry);
        }
        scores
    }

    /// Add a new score entry, maintaining sorted order.
    /// Returns the rank (1-indexed) if the score made it to the list.
    pub fn add_score(&mut self, entry: ScoreEntry) -> Option<usize> {
        let pos = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());

        if pos >= MAX_SCORES {
            return None;
        }

        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_SCORES);

        Some(pos + 1)
    }

    /// Get the top N scores
    pub fn top(&self, n: usize) -> &[ScoreEntry] {
        let end = n.min(self.entries.len());
        &self.entries[..end]
    }

    /// Get the highest score
    pub fn highest(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    /// Check if a score would make the high score list
    pub fn would_qualify(&self, score: i64) -> bool {
        self.entries.len() < MAX_SCORES
            || self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
