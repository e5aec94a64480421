//! Perfect maze generation
//!
//! Randomized depth-first carving on a step-2 lattice. Each carved cell
//! visits its four 2-step neighbours in a freshly shuffled order and opens
//! the wall between itself and every neighbour that is still solid. The
//! open cells always form a spanning tree rooted at the start cell.

use log::debug;

use crate::error::{MazeError, Result};
use crate::rng::RandomSource;

use super::cell::{Cell, Direction, Grid};

/// One cell on the carve stack with the directions it has yet to try
struct Frame {
    row: usize,
    col: usize,
    dirs: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: RandomSource>(row: usize, col: usize, rng: &mut R) -> Self {
        let mut dirs = Direction::ALL;
        rng.shuffle(&mut dirs);
        Self {
            row,
            col,
            dirs,
            next: 0,
        }
    }
}

/// Create a `rows` x `cols` grid with every cell set to wall
pub fn create_grid(rows: usize, cols: usize) -> Result<Grid> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::InvalidArgument(format!(
            "grid dimensions must be at least 1x1, got {}x{}",
            rows, cols
        )));
    }
    Ok(Grid::filled(rows, cols, Cell::Wall))
}

/// Carve a perfect maze into `grid` starting at (`start_row`, `start_col`).
///
/// Uses an explicit stack instead of recursion, so the carve depth is not
/// limited by the call stack.
pub fn carve<'g, R: RandomSource>(
    grid: &'g mut Grid,
    start_row: usize,
    start_col: usize,
    rng: &mut R,
) -> Result<&'g mut Grid> {
    if grid.get(start_row, start_col).is_none() {
        return Err(MazeError::InvalidArgument(format!(
            "carve start ({}, {}) outside {}x{} grid",
            start_row,
            start_col,
            grid.rows(),
            grid.cols()
        )));
    }

    grid.set(start_row, start_col, Cell::Open);
    let mut stack = Vec::with_capacity(grid.rows() * grid.cols() / 4 + 1);
    stack.push(Frame::new(start_row, start_col, rng));

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.dirs.len() {
            stack.pop();
            continue;
        }
        let dir = frame.dirs[frame.next];
        frame.next += 1;
        let (row, col) = (frame.row, frame.col);

        let (dx, dy) = dir.delta();
        let target_row = row as i64 + 2 * dy as i64;
        let target_col = col as i64 + 2 * dx as i64;
        if target_row < 0 || target_col < 0 {
            continue;
        }
        let (target_row, target_col) = (target_row as usize, target_col as usize);

        if grid.get(target_row, target_col) != Some(Cell::Wall) {
            continue;
        }

        let mid_row = (row as i64 + dy as i64) as usize;
        let mid_col = (col as i64 + dx as i64) as usize;
        grid.set(mid_row, mid_col, Cell::Open);
        grid.set(target_row, target_col, Cell::Open);
        stack.push(Frame::new(target_row, target_col, rng));
    }

    debug!(
        "carved {} open cells into {}x{} grid from ({}, {})",
        grid.open_count(),
        grid.rows(),
        grid.cols(),
        start_row,
        start_col
    );
    Ok(grid)
}

/// Generate a `rows` x `cols` maze carved from the origin
pub fn get_maze<R: RandomSource>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    let mut grid = create_grid(rows, cols)?;
    carve(&mut grid, 0, 0, rng)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    /// Always returns 0, so every shuffle yields the same permutation
    struct FirstChoice;

    impl RandomSource for FirstChoice {
        fn rn2(&mut self, _n: u32) -> u32 {
            0
        }
    }

    #[test]
    fn test_create_grid_all_wall() {
        let grid = create_grid(4, 6).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.open_count(), 0);
    }

    #[test]
    fn test_create_grid_rejects_zero() {
        assert!(matches!(create_grid(0, 5), Err(MazeError::InvalidArgument(_))));
        assert!(matches!(create_grid(5, 0), Err(MazeError::InvalidArgument(_))));
    }

    #[test]
    fn test_single_cell_maze() {
        let mut rng = GameRng::new(1);
        let grid = get_maze(1, 1, &mut rng).unwrap();
        assert_eq!(grid.get(0, 0), Some(Cell::Open));
        assert_eq!(grid.open_count(), 1);
    }

    #[test]
    fn test_carve_rejects_outside_start() {
        let mut rng = GameRng::new(1);
        let mut grid = create_grid(3, 3).unwrap();
        assert!(carve(&mut grid, 3, 0, &mut rng).is_err());
    }

    #[test]
    fn test_origin_open() {
        let mut rng = GameRng::new(99);
        let grid = get_maze(9, 9, &mut rng).unwrap();
        assert_eq!(grid.get(0, 0), Some(Cell::Open));
    }

    #[test]
    fn test_odd_cells_stay_wall() {
        let mut rng = GameRng::new(5);
        let grid = get_maze(11, 11, &mut rng).unwrap();
        for row in (1..11).step_by(2) {
            for col in (1..11).step_by(2) {
                assert_eq!(grid.get(row, col), Some(Cell::Wall));
            }
        }
    }

    #[test]
    fn test_every_lattice_cell_carved() {
        let mut rng = GameRng::new(12);
        let grid = get_maze(7, 9, &mut rng).unwrap();
        for row in (0..7).step_by(2) {
            for col in (0..9).step_by(2) {
                assert_eq!(grid.get(row, col), Some(Cell::Open), "({}, {})", row, col);
            }
        }
        // 4x5 lattice cells plus one corridor per tree edge
        assert_eq!(grid.open_count(), 20 + 19);
    }

    #[test]
    fn test_fixed_choice_is_deterministic() {
        let a = get_maze(5, 5, &mut FirstChoice).unwrap();
        let b = get_maze(5, 5, &mut FirstChoice).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = get_maze(15, 15, &mut GameRng::new(2024)).unwrap();
        let b = get_maze(15, 15, &mut GameRng::new(2024)).unwrap();
        assert_eq!(a, b);
    }
}
