//! Static level tables: tutorials and hand-authored template packs

use super::definition::{GridSize, LevelDefinition, LevelKind};

/// A fixed, hand-scripted tutorial level
#[derive(Debug, Clone, Copy)]
pub struct TutorialLevel {
    pub id: &'static str,
    pub rows: &'static [&'static str],
    pub min_commands: u32,
    pub max_commands: u32,
    pub cat_speed: u32,
}

impl TutorialLevel {
    pub fn to_definition(&self) -> LevelDefinition {
        LevelDefinition {
            id: self.id.to_string(),
            kind: LevelKind::Tutorial,
            rows: self.rows.iter().map(|r| r.to_string()).collect(),
            grid_size: None,
            cat_speed: Some(self.cat_speed),
            min_commands: Some(self.min_commands),
            max_commands: Some(self.max_commands),
        }
    }
}

/// Hand-authored templates for one level number
#[derive(Debug, Clone, Copy)]
pub struct LevelPack {
    pub level: i32,
    pub grid_size: GridSize,
    pub templates: &'static [&'static [&'static str]],
}

pub static TUTORIAL_LEVELS: [TutorialLevel; 4] = [
    TutorialLevel {
        id: "T1",
        rows: &["########", "#M.....#", "#......#", "#.....S#", "########"],
        min_commands: 4,
        max_commands: 8,
        cat_speed: 0,
    },
    TutorialLevel {
        id: "T2",
        rows: &["########", "#M.....#", "###.####", "#.....S#", "########"],
        min_commands: 6,
        max_commands: 10,
        cat_speed: 0,
    },
    TutorialLevel {
        id: "T3",
        rows: &["########", "#M..C..#", "#......#", "#.....S#", "########"],
        min_commands: 5,
        max_commands: 10,
        cat_speed: 1,
    },
    TutorialLevel {
        id: "T4",
        rows: &[
            "##########",
            "#M.......#",
            "#.######.#",
            "#......C.#",
            "#.######.#",
            "#.......S#",
            "##########",
        ],
        min_commands: 10,
        max_commands: 16,
        cat_speed: 1,
    },
];

pub static STATIC_LEVEL_PACKS: &[LevelPack] = &[
    LevelPack {
        level: 1,
        grid_size: GridSize::square(5),
        templates: &[
            &["#####", "#M..#", "#...#", "#..S#", "#####"],
            &["#####", "#M..#", "#.#.#", "#..S#", "#####"],
        ],
    },
    LevelPack {
        level: 2,
        grid_size: GridSize::square(7),
        templates: &[&[
            "#######",
            "#M....#",
            "#.###.#",
            "#.....#",
            "#.###.#",
            "#....S#",
            "#######",
        ]],
    },
    LevelPack {
        level: 3,
        grid_size: GridSize::square(7),
        templates: &[&[
            "#######",
            "#M..#S#",
            "#.#.#.#",
            "#.#...#",
            "#.###.#",
            "#.....#",
            "#######",
        ]],
    },
];

/// Look up the static pack for an exact level number. Packs without
/// templates are skipped.
pub fn find_pack(packs: &[LevelPack], level: i32) -> Option<&LevelPack> {
    packs
        .iter()
        .find(|p| p.level == level && !p.templates.is_empty())
}
