//! Level definitions and level selection
//!
//! Levels come from three sources: the fixed tutorial list, static template
//! packs multiplied by rotation and mirroring, and procedurally carved mazes.

mod data;
mod definition;
mod selector;
mod transform;

pub use data::{LevelPack, STATIC_LEVEL_PACKS, TUTORIAL_LEVELS, TutorialLevel, find_pack};
pub use definition::{
    CAT_MARKER, CHEESE_MARKER, GridSize, LevelDefinition, LevelKind, MOUSE_MARKER,
};
pub use selector::{
    FAST_CAT_LEVEL, LevelSelector, STATIC_LEVEL_RANGE, generate_random_level,
    get_grid_size_by_level, get_level_definition,
};
pub use transform::{Variant, expand_templates, mirror_horizontal, mirror_vertical, rotate90};
