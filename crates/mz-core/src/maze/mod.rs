//! Maze system
//!
//! Contains the grid representation, the perfect-maze generator and the
//! movement queries used once a level is playable.

mod cell;
mod generator;
mod topology;

pub use cell::{Cell, Direction, Grid, OPEN_CHAR, Position, WALL_CHAR};
pub use generator::{carve, create_grid, get_maze};
pub use topology::{is_junction, is_open, open_neighbours, slide, step};
