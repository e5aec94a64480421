//! Per-level move log and statistics

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::maze::Direction;

/// Commands entered while planning a level, plus timing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveLog {
    pub moves: Vec<Direction>,
    pub planning_ms: u64,
    pub running_ms: u64,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_move(&mut self, dir: Direction) {
        self.moves.push(dir);
    }

    pub fn set_planning_ms(&mut self, ms: u64) {
        self.planning_ms = ms;
    }

    pub fn set_running_ms(&mut self, ms: u64) {
        self.running_ms = ms;
    }

    /// Clear moves and timings before a new attempt
    pub fn reset(&mut self) {
        self.moves.clear();
        self.planning_ms = 0;
        self.running_ms = 0;
    }

    /// Summarise this log for `level`
    pub fn stats(&self, level: i32) -> LevelStats {
        let mut by_dir: HashMap<Direction, u32> = Direction::iter().map(|d| (d, 0)).collect();
        for dir in &self.moves {
            *by_dir.entry(*dir).or_insert(0) += 1;
        }

        LevelStats {
            level,
            moves: self.moves.len() as u32,
            by_dir,
            planning_ms: self.planning_ms,
            running_ms: self.running_ms,
        }
    }
}

/// Summary of one finished level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    pub level: i32,
    pub moves: u32,
    pub by_dir: HashMap<Direction, u32>,
    pub planning_ms: u64,
    pub running_ms: u64,
}

impl LevelStats {
    /// Whether the move count lies inside a tutorial's command bounds
    pub fn within_bounds(&self, min_commands: Option<u32>, max_commands: Option<u32>) -> bool {
        min_commands.is_none_or(|min| self.moves >= min)
            && max_commands.is_none_or(|max| self.moves <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counts_by_direction() {
        let mut log = MoveLog::new();
        log.add_move(Direction::Right);
        log.add_move(Direction::Down);
        log.add_move(Direction::Right);
        log.set_planning_ms(1200);
        log.set_running_ms(800);

        let stats = log.stats(4);
        assert_eq!(stats.level, 4);
        assert_eq!(stats.moves, 3);
        assert_eq!(stats.by_dir[&Direction::Right], 2);
        assert_eq!(stats.by_dir[&Direction::Down], 1);
        assert_eq!(stats.by_dir[&Direction::Up], 0);
        assert_eq!(stats.planning_ms, 1200);
        assert_eq!(stats.running_ms, 800);
    }

    #[test]
    fn test_reset() {
        let mut log = MoveLog::new();
        log.add_move(Direction::Left);
        log.set_planning_ms(5);
        log.reset();
        assert_eq!(log, MoveLog::default());
    }

    #[test]
    fn test_within_bounds() {
        let mut log = MoveLog::new();
        for _ in 0..5 {
            log.add_move(Direction::Up);
        }
        let stats = log.stats(0);
        assert!(stats.within_bounds(Some(4), Some(8)));
        assert!(!stats.within_bounds(Some(6), Some(10)));
        assert!(!stats.within_bounds(None, Some(4)));
        assert!(stats.within_bounds(None, None));
    }

    #[test]
    fn test_json_keys() {
        let stats = MoveLog::new().stats(1);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["byDir"]["UP"], 0);
        assert_eq!(json["planningMs"], 0);
    }
}
