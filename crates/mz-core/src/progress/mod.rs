//! Player progress: current level, tutorial flag and high scores

mod names;
mod scores;
mod stats;

pub use names::{MOUSE_NAMES, random_player_name};
pub use scores::{HighScores, MAX_SCORES, ScoreEntry};
pub use stats::{LevelStats, MoveLog};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::level::{LevelDefinition, TUTORIAL_LEVELS, get_level_definition};
use crate::rng::RandomSource;

/// Level index the first post-tutorial level starts at
pub const FIRST_REGULAR_LEVEL: i32 = 1;

/// Persisted game progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(default, rename = "gameStats")]
    pub scores: HighScores,
    #[serde(default)]
    pub current_level: i32,
    #[serde(default)]
    pub tutorial_passed: bool,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next level.
    ///
    /// Finishing the last tutorial flips `tutorial_passed` and restarts the
    /// numbering at the first regular level.
    pub fn next_level(&mut self) {
        let last_tutorial = TUTORIAL_LEVELS.len() as i32 - 1;
        if !self.tutorial_passed && self.current_level >= last_tutorial {
            info!("tutorial complete");
            self.tutorial_passed = true;
            self.current_level = FIRST_REGULAR_LEVEL;
        } else {
            self.current_level += 1;
        }
    }

    /// Record a finished game's score. Returns the rank if it made the table.
    pub fn record_score(&mut self, name: &str, score: i64) -> Option<usize> {
        let rank = self.scores.add_score(ScoreEntry::new(name, score));
        if let Some(rank) = rank {
            info!("{} scored {} (rank {})", name, score, rank);
        }
        rank
    }

    /// Level definition for the stored level and tutorial flag
    pub fn current_definition<R: RandomSource>(&self, rng: &mut R) -> Result<LevelDefinition> {
        get_level_definition(self.current_level, self.tutorial_passed, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelKind;
    use crate::rng::GameRng;

    #[test]
    fn test_tutorial_progression() {
        let mut progress = Progress::new();
        for expected in 1..=3 {
            progress.next_level();
            assert_eq!(progress.current_level, expected);
            assert!(!progress.tutorial_passed);
        }
        progress.next_level();
        assert!(progress.tutorial_passed);
        assert_eq!(progress.current_level, FIRST_REGULAR_LEVEL);

        progress.next_level();
        assert_eq!(progress.current_level, 2);
        assert!(progress.tutorial_passed);
    }

    #[test]
    fn test_current_definition_follows_progress() {
        let mut rng = GameRng::new(10);
        let mut progress = Progress::new();
        let def = progress.current_definition(&mut rng).unwrap();
        assert_eq!(def.id, "T1");

        for _ in 0..4 {
            progress.next_level();
        }
        let def = progress.current_definition(&mut rng).unwrap();
        assert_eq!(def.kind, LevelKind::Static);
        assert_eq!(def.id, "L-1");
    }

    #[test]
    fn test_record_score() {
        let mut progress = Progress::new();
        assert_eq!(progress.record_score("Pip", 40), Some(1));
        assert_eq!(progress.record_score("Tiny", 90), Some(1));
        assert_eq!(progress.scores.highest().map(|e| e.name.as_str()), Some("Tiny"));
    }

    #[test]
    fn test_json_keys_and_defaults() {
        let mut progress = Progress::new();
        progress.current_level = 6;
        progress.tutorial_passed = true;
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["currentLevel"], 6);
        assert_eq!(json["tutorialPassed"], true);
        assert!(json["gameStats"].is_array());

        let partial: Progress = serde_json::from_str(r#"{"currentLevel": 2}"#).unwrap();
        assert_eq!(partial.current_level, 2);
        assert!(!partial.tutorial_passed);
        assert!(partial.scores.is_empty());
    }
}
