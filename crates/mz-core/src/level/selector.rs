//! Level selection
//!
//! Maps a level number and the tutorial flag to a level definition. This is
//! a pure classification: the caller owns the progress state and passes it
//! in on every call.

use std::ops::RangeInclusive;

use log::{debug, warn};

use crate::error::{MazeError, Result};
use crate::maze::get_maze;
use crate::rng::RandomSource;

use super::data::{LevelPack, STATIC_LEVEL_PACKS, TUTORIAL_LEVELS, TutorialLevel, find_pack};
use super::definition::{GridSize, LevelDefinition, LevelKind};
use super::transform::expand_templates;

/// Level numbers that may be served from a static pack
pub const STATIC_LEVEL_RANGE: RangeInclusive<i32> = 1..=10;

/// From this level on the cat moves every tick instead of every other tick
pub const FAST_CAT_LEVEL: i32 = 30;

/// (last level of tier, square grid size)
const GRID_TIERS: [(i32, usize); 13] = [
    (3, 7),
    (7, 9),
    (11, 11),
    (15, 13),
    (17, 15),
    (19, 17),
    (21, 19),
    (23, 21),
    (25, 23),
    (27, 25),
    (29, 27),
    (31, 29),
    (33, 31),
];

/// Past the last tier, even levels get the larger size and odd levels the smaller
const CAP_EVEN_SIZE: usize = 31;
const CAP_ODD_SIZE: usize = 29;

/// Grid size of the procedural maze for `level`
pub fn get_grid_size_by_level(level: i32) -> GridSize {
    GRID_TIERS
        .iter()
        .find(|(last, _)| level <= *last)
        .map(|(_, size)| GridSize::square(*size))
        .unwrap_or_else(|| {
            if level % 2 == 0 {
                GridSize::square(CAP_EVEN_SIZE)
            } else {
                GridSize::square(CAP_ODD_SIZE)
            }
        })
}

/// Generate a procedural level for `level`
pub fn generate_random_level<R: RandomSource>(level: i32, rng: &mut R) -> Result<LevelDefinition> {
    let size = get_grid_size_by_level(level);
    let maze = get_maze(size.rows, size.cols, rng)?;

    Ok(LevelDefinition {
        id: format!("R-{}", level),
        kind: LevelKind::Random,
        rows: maze.to_rows(),
        grid_size: Some(size),
        cat_speed: Some(if level < FAST_CAT_LEVEL { 1 } else { 2 }),
        min_commands: None,
        max_commands: None,
    })
}

/// Chooses level definitions from a tutorial list and a set of static packs
#[derive(Debug, Clone, Copy)]
pub struct LevelSelector<'a> {
    tutorials: &'a [TutorialLevel],
    packs: &'a [LevelPack],
}

impl Default for LevelSelector<'static> {
    fn default() -> Self {
        Self::new(&TUTORIAL_LEVELS, STATIC_LEVEL_PACKS)
    }
}

impl<'a> LevelSelector<'a> {
    /// Create a selector over custom tables. `tutorials` must not be empty.
    pub fn new(tutorials: &'a [TutorialLevel], packs: &'a [LevelPack]) -> Self {
        Self { tutorials, packs }
    }

    pub fn tutorial_count(&self) -> usize {
        self.tutorials.len()
    }

    /// Level definition for `level_number`.
    ///
    /// Before the tutorial is passed the number is clamped onto the tutorial
    /// list. Afterwards levels 1..=10 use their static pack when one exists,
    /// and everything else is carved procedurally.
    pub fn definition<R: RandomSource>(
        &self,
        level_number: i32,
        tutorial_passed: bool,
        rng: &mut R,
    ) -> Result<LevelDefinition> {
        if level_number < 0 {
            return Err(MazeError::InvalidArgument(format!(
                "level number must be non-negative, got {}",
                level_number
            )));
        }

        if !tutorial_passed {
            let last = self.tutorials.len().checked_sub(1).ok_or_else(|| {
                MazeError::InvalidArgument("no tutorial levels configured".to_string())
            })?;
            let idx = (level_number as usize).min(last);
            debug!("level {}: tutorial {}", level_number, self.tutorials[idx].id);
            return Ok(self.tutorials[idx].to_definition());
        }

        if STATIC_LEVEL_RANGE.contains(&level_number) {
            let pack = find_pack(self.packs, level_number);
            match pack.and_then(|pack| static_definition(pack, rng)) {
                Some(level) => return Ok(level),
                None => warn!(
                    "level {}: no static pack, falling back to a generated maze",
                    level_number
                ),
            }
        }

        let level = generate_random_level(level_number, rng)?;
        debug!(
            "level {}: generated {}x{} maze",
            level_number,
            level.rows.len(),
            level.dimensions().cols
        );
        Ok(level)
    }
}

fn static_definition<R: RandomSource>(pack: &LevelPack, rng: &mut R) -> Option<LevelDefinition> {
    let variants = expand_templates(pack);
    let pick = rng.rn2(variants.len() as u32) as usize;
    debug!(
        "level {}: static variant {} of {}",
        pack.level,
        pick,
        variants.len()
    );
    let rows = variants.into_iter().nth(pick)?;

    Some(LevelDefinition {
        id: format!("L-{}", pack.level),
        kind: LevelKind::Static,
        rows,
        grid_size: Some(pack.grid_size),
        cat_speed: Some(0),
        min_commands: None,
        max_commands: None,
    })
}

/// Level definition from the built-in tutorial and pack tables
pub fn get_level_definition<R: RandomSource>(
    level_number: i32,
    tutorial_passed: bool,
    rng: &mut R,
) -> Result<LevelDefinition> {
    LevelSelector::default().definition(level_number, tutorial_passed, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::transform::Variant;
    use crate::rng::GameRng;

    /// Returns a fixed index (clamped to the range asked for)
    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn rn2(&mut self, n: u32) -> u32 {
            if n == 0 { 0 } else { self.0.min(n - 1) }
        }
    }

    #[test]
    fn test_grid_size_tiers() {
        assert_eq!(get_grid_size_by_level(0), GridSize::square(7));
        assert_eq!(get_grid_size_by_level(3), GridSize::square(7));
        assert_eq!(get_grid_size_by_level(4), GridSize::square(9));
        assert_eq!(get_grid_size_by_level(11), GridSize::square(11));
        assert_eq!(get_grid_size_by_level(12), GridSize::square(13));
        assert_eq!(get_grid_size_by_level(16), GridSize::square(15));
        assert_eq!(get_grid_size_by_level(29), GridSize::square(27));
        assert_eq!(get_grid_size_by_level(31), GridSize::square(29));
        assert_eq!(get_grid_size_by_level(33), GridSize::square(31));
    }

    #[test]
    fn test_grid_size_cap_alternates_by_parity() {
        assert_eq!(get_grid_size_by_level(34), GridSize::square(31));
        assert_eq!(get_grid_size_by_level(35), GridSize::square(29));
        assert_eq!(get_grid_size_by_level(100), GridSize::square(31));
        assert_eq!(get_grid_size_by_level(101), GridSize::square(29));
    }

    #[test]
    fn test_grid_size_non_decreasing_through_tiers() {
        let mut last = 0;
        for level in 0..=33 {
            let size = get_grid_size_by_level(level).rows;
            assert!(size >= last, "level {} shrank to {}", level, size);
            last = size;
        }
    }

    #[test]
    fn test_tutorial_clamp() {
        let mut rng = GameRng::new(1);
        let first = get_level_definition(0, false, &mut rng).unwrap();
        assert_eq!(first.id, "T1");
        assert_eq!(first.kind, LevelKind::Tutorial);

        let last = get_level_definition(3, false, &mut rng).unwrap();
        let clamped = get_level_definition(999, false, &mut rng).unwrap();
        assert_eq!(last.id, "T4");
        assert_eq!(clamped, last);
    }

    #[test]
    fn test_negative_level_rejected() {
        let mut rng = GameRng::new(1);
        assert!(matches!(
            get_level_definition(-1, true, &mut rng),
            Err(MazeError::InvalidArgument(_))
        ));
        assert!(get_level_definition(-5, false, &mut rng).is_err());
    }

    #[test]
    fn test_static_level_uses_pack() {
        let mut rng = GameRng::new(8);
        let level = get_level_definition(2, true, &mut rng).unwrap();
        assert_eq!(level.id, "L-2");
        assert_eq!(level.kind, LevelKind::Static);
        assert_eq!(level.grid_size, Some(GridSize::square(7)));
        assert_eq!(level.cat_speed, Some(0));
        assert!(level.mouse_start().is_some());
        assert!(level.cheese().is_some());
    }

    #[test]
    fn test_static_variant_picked_by_rng() {
        let pack = &STATIC_LEVEL_PACKS[0];
        let level = LevelSelector::default()
            .definition(1, true, &mut Fixed(7))
            .unwrap();
        // Index 7 is the second template rotated by 90 degrees
        assert_eq!(level.rows, Variant::Rotate90.apply(pack.templates[1]));
    }

    #[test]
    fn test_missing_pack_falls_back_to_random() {
        let mut rng = GameRng::new(3);
        let level = get_level_definition(5, true, &mut rng).unwrap();
        assert_eq!(level.kind, LevelKind::Random);
        assert_eq!(level.id, "R-5");
        assert_eq!(level.grid_size, Some(GridSize::square(9)));
        assert_eq!(level.cat_speed, Some(1));
    }

    #[test]
    fn test_custom_pack_for_five() {
        const PACKS: &[LevelPack] = &[LevelPack {
            level: 5,
            grid_size: GridSize::square(3),
            templates: &[&["M.#", "#.#", "#.S"]],
        }];
        let selector = LevelSelector::new(&TUTORIAL_LEVELS, PACKS);
        let level = selector.definition(5, true, &mut GameRng::new(4)).unwrap();
        assert_eq!(level.kind, LevelKind::Static);
        assert_eq!(level.grid_size, Some(GridSize::square(3)));
    }

    #[test]
    fn test_empty_pack_falls_back_to_random() {
        const PACKS: &[LevelPack] = &[LevelPack {
            level: 4,
            grid_size: GridSize::square(5),
            templates: &[],
        }];
        let selector = LevelSelector::new(&TUTORIAL_LEVELS, PACKS);
        let level = selector.definition(4, true, &mut GameRng::new(4)).unwrap();
        assert_eq!(level.kind, LevelKind::Random);
        assert_eq!(level.id, "R-4");
        assert_eq!(level.grid_size, Some(GridSize::square(9)));
        assert_eq!(level.rows.len(), 9);
    }

    #[test]
    fn test_zero_after_tutorial_is_random() {
        let level = get_level_definition(0, true, &mut GameRng::new(6)).unwrap();
        assert_eq!(level.kind, LevelKind::Random);
        assert_eq!(level.id, "R-0");
    }

    #[test]
    fn test_late_level_fast_cat() {
        let mut rng = GameRng::new(11);
        let level = get_level_definition(35, true, &mut rng).unwrap();
        assert_eq!(level.kind, LevelKind::Random);
        assert_eq!(level.cat_speed, Some(2));
        assert_eq!(level.grid_size, Some(GridSize::square(29)));
        assert_eq!(level.rows.len(), 29);
        assert!(level.rows.iter().all(|r| r.len() == 29));

        let level = get_level_definition(29, true, &mut rng).unwrap();
        assert_eq!(level.cat_speed, Some(1));
    }

    #[test]
    fn test_empty_tutorial_table() {
        let selector = LevelSelector::new(&[], STATIC_LEVEL_PACKS);
        assert!(selector.definition(0, false, &mut GameRng::new(1)).is_err());
    }
}
