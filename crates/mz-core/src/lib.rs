//! mz-core: Core game logic for the mouse maze game
//!
//! This crate contains maze generation, maze topology queries, level
//! selection and the bookkeeping around them. It does no file I/O apart
//! from loading the options file; persistence lives in `mz-save`.

pub mod level;
pub mod maze;
pub mod options;
pub mod progress;
pub mod sound;

mod error;
mod rng;

pub use error::{MazeError, Result};
pub use rng::{GameRng, RandomSource};
