//! Grid cells, positions and directions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::MazeError;

/// Character used for walls in row-string level layouts
pub const WALL_CHAR: char = '#';

/// Character used for open floor in row-string level layouts
pub const OPEN_CHAR: char = '.';

/// A single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

impl Cell {
    /// Layout character for this cell
    pub const fn symbol(&self) -> char {
        match self {
            Cell::Wall => WALL_CHAR,
            Cell::Open => OPEN_CHAR,
        }
    }

    /// Parse a layout character. Markers (mouse, cheese, cat) sit on open floor.
    pub const fn from_symbol(c: char) -> Self {
        if c == WALL_CHAR { Cell::Wall } else { Cell::Open }
    }
}

/// Grid coordinate: `x` is the column, `y` is the row.
///
/// Signed so that probes past the top or left edge are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one unit step away in `dir`, or None past the coordinate range
    pub const fn offset(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in carve order (up, right, down, left)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit offset as (dx, dy)
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Rectangular grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to `cell`
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        }
    }

    /// Build a grid from row strings. `#` is a wall, anything else is open.
    /// Short rows are padded with wall.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let cols = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut grid = Self::filled(rows.len(), cols, Cell::Wall);
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.as_ref().chars().enumerate() {
                grid.set(row, col, Cell::from_symbol(c));
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col), or None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set the cell at (row, col). Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// Cell at a signed position, or None when outside the grid
    pub fn cell_at(&self, pos: Position) -> Option<Cell> {
        let row = usize::try_from(pos.y).ok()?;
        let col = usize::try_from(pos.x).ok()?;
        self.get(row, col)
    }

    /// Number of open cells
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Open).count()
    }

    /// Iterate over the positions of all open cells, row by row
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Open)
            .map(|(i, _)| Position::new((i % self.cols) as i32, (i / self.cols) as i32))
    }

    /// Render as row strings using `#` and `.`
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }
}

/// Unchecked serialized form of a `Grid`
#[derive(Deserialize)]
struct GridData {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridData> for Grid {
    type Error = MazeError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let expected = data.rows.checked_mul(data.cols);
        if expected != Some(data.cells.len()) {
            return Err(MazeError::InvalidArgument(format!(
                "{}x{} grid needs {} cells, found {}",
                data.rows,
                data.cols,
                data.rows.saturating_mul(data.cols),
                data.cells.len()
            )));
        }
        Ok(Self {
            rows: data.rows,
            cols: data.cols,
            cells: data.cells,
        })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
