//! Core engine for 9×9 Sudoku: grid representation, a backtracking solver,
//! a solution counter, and unique-solution puzzle generation.
//!
//! The crate is the engine only. Rendering, input handling, and frontend
//! state belong to the consumer, which drives the engine through a small
//! surface: [`Solver::solve`] to complete a puzzle,
//! [`Solver::count_solutions`] to decide uniqueness, the validity checks on
//! [`Grid`], and [`Generator::generate`] to produce new puzzles.
//!
//! Every call treats caller-owned grids as immutable snapshots: the solver
//! and generator work on private copies and hand back new grids.
//!
//! ```
//! use sudoku_engine::{Generator, Solver};
//!
//! let mut generator = Generator::with_seed(1);
//! let puzzle = generator.generate(40);
//!
//! let mut solver = Solver::new();
//! assert!(solver.has_unique_solution(&puzzle));
//! let solution = solver.solve(&puzzle).expect("generated puzzles are solvable");
//! assert!(solution.is_valid_solution());
//! ```

use thiserror::Error;

mod generator;
mod grid;
mod solver;

pub use generator::Generator;
pub use grid::{Grid, Position, BOX_SIZE, GRID_SIZE};
pub use solver::Solver;

/// Errors produced when building a [`Grid`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input does not describe exactly 81 cells.
    #[error("expected 81 cells, got {0}")]
    InvalidShape(usize),
    /// A puzzle string contained a character other than `0`-`9` or `.`.
    #[error("invalid character {0:?} in puzzle string")]
    InvalidCharacter(char),
    /// A cell value was outside the range 0-9.
    #[error("invalid digit {value} at ({row}, {col})")]
    InvalidDigit { row: usize, col: usize, value: u8 },
}
