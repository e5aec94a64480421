//! Level definition as handed to the game screen

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::maze::{Grid, Position};

/// Marker for the mouse start cell
pub const MOUSE_MARKER: char = 'M';

/// Marker for the cheese (goal) cell
pub const CHEESE_MARKER: char = 'S';

/// Marker for the cat start cell (tutorials only)
pub const CAT_MARKER: char = 'C';

/// Where a level came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LevelKind {
    Tutorial,
    Static,
    Random,
}

/// Grid dimensions of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }
}

/// A fully populated, playable level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDefinition {
    /// Level identifier (`T1`, `L-3`, `R-42`, ...)
    pub id: String,

    #[serde(rename = "type")]
    pub kind: LevelKind,

    /// Layout rows: `#` wall, `.` floor, plus `M`, `S` and `C` markers
    pub rows: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<GridSize>,

    /// Ticks per cat move; 0 means the cat never moves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat_speed: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_commands: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_commands: Option<u32>,
}

impl LevelDefinition {
    /// Walkability grid for this level
    pub fn grid(&self) -> Grid {
        Grid::from_rows(&self.rows)
    }

    /// First position holding `marker`, scanning row by row
    pub fn find_marker(&self, marker: char) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.chars()
                .position(|c| c == marker)
                .map(|x| Position::new(x as i32, y as i32))
        })
    }

    pub fn mouse_start(&self) -> Option<Position> {
        self.find_marker(MOUSE_MARKER)
    }

    pub fn cheese(&self) -> Option<Position> {
        self.find_marker(CHEESE_MARKER)
    }

    pub fn cat_start(&self) -> Option<Position> {
        self.find_marker(CAT_MARKER)
    }

    /// Actual dimensions of the layout rows
    pub fn dimensions(&self) -> GridSize {
        GridSize {
            rows: self.rows.len(),
            cols: self.rows.first().map_or(0, |r| r.chars().count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::is_open;

    fn sample() -> LevelDefinition {
        LevelDefinition {
            id: "T3".to_string(),
            kind: LevelKind::Tutorial,
            rows: vec![
                "#####".to_string(),
                "#M.C#".to_string(),
                "#..S#".to_string(),
                "#####".to_string(),
            ],
            grid_size: None,
            cat_speed: Some(1),
            min_commands: Some(2),
            max_commands: Some(4),
        }
    }

    #[test]
    fn test_markers() {
        let level = sample();
        assert_eq!(level.mouse_start(), Some(Position::new(1, 1)));
        assert_eq!(level.cat_start(), Some(Position::new(3, 1)));
        assert_eq!(level.cheese(), Some(Position::new(3, 2)));
        assert_eq!(level.find_marker('X'), None);
    }

    #[test]
    fn test_grid_treats_markers_as_floor() {
        let level = sample();
        let grid = level.grid();
        assert!(is_open(&grid, Position::new(1, 1)));
        assert!(is_open(&grid, Position::new(3, 2)));
        assert!(!is_open(&grid, Position::new(0, 0)));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(sample().dimensions(), GridSize { rows: 4, cols: 5 });
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "tutorial");
        assert_eq!(json["catSpeed"], 1);
        assert_eq!(json["minCommands"], 2);
        assert!(json.get("gridSize").is_none());

        let back: LevelDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(LevelKind::Static.to_string(), "static");
        assert_eq!(LevelKind::Random.to_string(), "random");
    }
}
