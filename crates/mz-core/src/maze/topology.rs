//! Movement queries over a grid
//!
//! All queries are total: positions outside the grid are simply not open.

use super::cell::{Cell, Direction, Grid, Position};

/// Check whether `pos` is inside the grid and open
pub fn is_open(grid: &Grid, pos: Position) -> bool {
    grid.cell_at(pos) == Some(Cell::Open)
}

/// Position reached by one step in `dir`, or None if that cell is blocked
pub fn step(grid: &Grid, pos: Position, dir: Direction) -> Option<Position> {
    pos.offset(dir).filter(|next| is_open(grid, *next))
}

/// Directions with an open cell one step away
pub fn open_neighbours(grid: &Grid, pos: Position) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|dir| pos.offset(*dir).is_some_and(|next| is_open(grid, next)))
        .collect()
}

/// A junction has three or more open orthogonal neighbours
pub fn is_junction(grid: &Grid, pos: Position) -> bool {
    open_neighbours(grid, pos).len() >= 3
}

/// Move in `dir` until the next step is blocked or a junction is entered.
///
/// Returns `pos` unchanged when the first step is already blocked.
pub fn slide(grid: &Grid, pos: Position, dir: Direction) -> Position {
    let mut current = pos;
    while let Some(next) = step(grid, current, dir) {
        current = next;
        if is_junction(grid, current) {
            break;
        }
    }
    current
}
