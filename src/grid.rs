//! Board representation and validity checking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GridError;

/// Width and height of the board.
pub const GRID_SIZE: usize = 9;
/// Width and height of one box.
pub const BOX_SIZE: usize = 3;

/// A cell coordinate, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Both coordinates must be below [`GRID_SIZE`].
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// All 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Top-left corner of the box containing this position.
    fn box_origin(self) -> Position {
        Position::new(
            (self.row / BOX_SIZE) * BOX_SIZE,
            (self.col / BOX_SIZE) * BOX_SIZE,
        )
    }
}

/// A 9×9 Sudoku board. `0` marks an empty cell, `1`-`9` a placed digit.
///
/// Grids are plain values. The solver and generator clone internally, so a
/// grid passed to the engine is never modified in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 9]; 9]", into = "[[u8; 9]; 9]")]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create an all-empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Parse an 81-character puzzle string, `0` or `.` for empty cells.
    pub fn from_string(s: &str) -> Result<Self, GridError> {
        let len = s.chars().count();
        if len != GRID_SIZE * GRID_SIZE {
            return Err(GridError::InvalidShape(len));
        }

        let mut grid = Self::empty();
        for (i, c) in s.chars().enumerate() {
            grid.cells[i / GRID_SIZE][i % GRID_SIZE] = match c {
                '.' => 0,
                '0'..='9' => c as u8 - b'0',
                _ => return Err(GridError::InvalidCharacter(c)),
            };
        }
        Ok(grid)
    }

    /// Render as an 81-character string with `0` for empty cells.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&value| char::from(b'0' + value))
            .collect()
    }

    /// Value at `pos`, or `None` if the cell is empty.
    pub fn get(&self, pos: Position) -> Option<u8> {
        match self.cells[pos.row][pos.col] {
            0 => None,
            value => Some(value),
        }
    }

    /// Place a digit at `pos`, or clear the cell with `None`.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(value.map_or(true, |v| (1..=9).contains(&v)));
        self.cells[pos.row][pos.col] = value.unwrap_or(0);
    }

    /// True when every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value != 0)
    }

    /// True when no cell holds a digit.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value == 0)
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.filled_count()
    }

    /// First empty cell in row-major order, the scan order the solver uses.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.cells[pos.row][pos.col] == 0)
    }

    /// How many times each digit appears, indexed by digit. Index 0 counts
    /// the empty cells.
    pub fn digit_counts(&self) -> [usize; 10] {
        let mut counts = [0; 10];
        for &value in self.cells.iter().flatten() {
            counts[value as usize] += 1;
        }
        counts
    }

    /// Check whether placing `digit` at `pos` would clash with the same
    /// digit elsewhere in that row, column, or box.
    ///
    /// The probed cell's own content is ignored, so the check is equally
    /// valid for an empty cell and for a replacement. `digit` must be in
    /// `1..=9`; the empty marker is never a valid probe.
    pub fn is_valid_placement(&self, pos: Position, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));

        for col in 0..GRID_SIZE {
            if col != pos.col && self.cells[pos.row][col] == digit {
                return false;
            }
        }

        for row in 0..GRID_SIZE {
            if row != pos.row && self.cells[row][pos.col] == digit {
                return false;
            }
        }

        let origin = pos.box_origin();
        for row in origin.row..origin.row + BOX_SIZE {
            for col in origin.col..origin.col + BOX_SIZE {
                if (row != pos.row || col != pos.col) && self.cells[row][col] == digit {
                    return false;
                }
            }
        }

        true
    }

    /// Check whether the grid is a solved Sudoku: complete, with every row,
    /// column, and box holding each digit exactly once.
    ///
    /// A grid with any empty cell is never valid. The grid itself is not
    /// touched by the check.
    pub fn is_valid_solution(&self) -> bool {
        Position::all().all(|pos| match self.get(pos) {
            Some(digit) => self.is_valid_placement(pos, digit),
            None => false,
        })
    }
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = GridError;

    /// Adopt a raw cell array, rejecting any value above 9.
    fn try_from(cells: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        for (row, values) in cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::InvalidDigit { row, col, value });
                }
            }
        }
        Ok(Self { cells })
    }
}

impl From<Grid> for [[u8; 9]; 9] {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, values) in self.cells.iter().enumerate() {
            if row > 0 && row % BOX_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in values.iter().enumerate() {
                if col > 0 {
                    write!(f, "{}", if col % BOX_SIZE == 0 { " | " } else { " " })?;
                }
                match value {
                    0 => write!(f, ".")?,
                    digit => write!(f, "{}", digit)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
