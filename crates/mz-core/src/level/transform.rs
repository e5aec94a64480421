//! Symmetry transforms on row-string layouts
//!
//! Used to turn a handful of hand-authored templates into many visually
//! distinct variants. Only square templates are expanded, so a rotation
//! keeps the pack's grid size.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::maze::WALL_CHAR;

use super::data::LevelPack;

/// One of the six variants produced per template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Variant {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    MirrorHorizontal,
    MirrorVertical,
}

impl Variant {
    /// Apply this variant to a layout
    pub fn apply<S: AsRef<str>>(&self, rows: &[S]) -> Vec<String> {
        match self {
            Variant::Identity => rows.iter().map(|r| r.as_ref().to_string()).collect(),
            Variant::Rotate90 => rotate90(rows),
            Variant::Rotate180 => rotate90(&rotate90(rows)),
            Variant::Rotate270 => rotate90(&rotate90(&rotate90(rows))),
            Variant::MirrorHorizontal => mirror_horizontal(rows),
            Variant::MirrorVertical => mirror_vertical(rows),
        }
    }
}

/// Rotate 90 degrees clockwise.
///
/// Output row `x` is input column `x` read from the bottom row up. Short
/// input rows are treated as wall past their end.
pub fn rotate90<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    let cells: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
    let width = cells.first().map_or(0, Vec::len);

    (0..width)
        .map(|x| {
            cells
                .iter()
                .rev()
                .map(|row| row.get(x).copied().unwrap_or(WALL_CHAR))
                .collect()
        })
        .collect()
}

/// Reverse the characters of every row
pub fn mirror_horizontal<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    rows.iter().map(|r| r.as_ref().chars().rev().collect()).collect()
}

/// Reverse the order of the rows
pub fn mirror_vertical<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    rows.iter().rev().map(|r| r.as_ref().to_string()).collect()
}

/// Expand every template of `pack` into its six variants.
///
/// Order is per template: identity, 90, 180, 270, horizontal mirror,
/// vertical mirror. Symmetric templates yield duplicates, which are kept.
pub fn expand_templates(pack: &LevelPack) -> Vec<Vec<String>> {
    pack.templates
        .iter()
        .flat_map(|&base| Variant::iter().map(move |variant| variant.apply(base)))
        .collect()
}
