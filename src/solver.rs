use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::Grid;

/// Backtracking Sudoku solver.
///
/// `solve` tries candidate digits in a shuffled order drawn from the
/// solver's own RNG, so two solvers built from the same seed walk the same
/// search path. Counting always tries digits in ascending order and does
/// not touch the RNG.
pub struct Solver {
    rng: SmallRng,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a solver with a fixed seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Solve the puzzle, returning the completed grid.
    ///
    /// The input grid is never modified. Returns `None` when no assignment
    /// of the empty cells satisfies the row, column, and box constraints.
    pub fn solve(&mut self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_recursive(&mut working) {
            Some(working)
        } else {
            debug!("no solution from {} givens", grid.filled_count());
            None
        }
    }

    /// Count solutions up to a limit.
    ///
    /// The search stops as soon as `limit` solutions have been found, so
    /// `count_solutions(grid, 2)` stays cheap even on a wide-open grid.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        let mut count = 0;
        self.count_solutions_recursive(&mut working, &mut count, limit);
        count
    }

    /// Check if the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    fn solve_recursive(&mut self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };

        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(&mut self.rng);

        for &digit in &digits {
            if grid.is_valid_placement(pos, digit) {
                grid.set(pos, Some(digit));
                if self.solve_recursive(grid) {
                    return true;
                }
                grid.set(pos, None);
            }
        }

        false
    }

    fn count_solutions_recursive(&self, grid: &mut Grid, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }

        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => {
                *count += 1;
                return;
            }
        };

        for digit in 1..=9 {
            if *count >= limit {
                return;
            }
            if grid.is_valid_placement(pos, digit) {
                grid.set(pos, Some(digit));
                self.count_solutions_recursive(grid, count, limit);
                grid.set(pos, None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_solve_classic() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(puzzle).unwrap();

        let mut solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert!(solution.is_valid_solution());
    }

    #[test]
    fn test_solve_preserves_givens() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(puzzle).unwrap();

        let mut solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        for pos in Position::all() {
            if let Some(digit) = grid.get(pos) {
                assert_eq!(solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_solve_leaves_input_untouched() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(puzzle).unwrap();
        let before = grid.clone();

        let mut solver = Solver::new();
        solver.solve(&grid).unwrap();

        assert_eq!(grid, before);
    }

    #[test]
    fn test_solve_unsolvable_returns_none() {
        // Row 0 forces a 9 into the last cell, but column 8 already has one.
        let puzzle =
            "123456780000000000000000000000000000000000000000000000000000000000000000000000009";
        let grid = Grid::from_string(puzzle).unwrap();

        let mut solver = Solver::new();
        assert_eq!(solver.solve(&grid), None);
    }

    #[test]
    fn test_solve_solved_grid_is_identity() {
        let puzzle =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        let grid = Grid::from_string(puzzle).unwrap();

        let mut solver = Solver::new();
        assert_eq!(solver.solve(&grid), Some(grid));
    }

    #[test]
    fn test_seeded_solvers_agree() {
        let mut first = Solver::with_seed(7);
        let mut second = Solver::with_seed(7);

        let empty = Grid::empty();
        assert_eq!(first.solve(&empty), second.solve(&empty));
    }

    #[test]
    fn test_unique_solution() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(puzzle).unwrap();

        let solver = Solver::new();
        assert!(solver.has_unique_solution(&grid));
    }

    #[test]
    fn test_multiple_solutions() {
        let grid = Grid::empty();

        let solver = Solver::new();
        assert!(!solver.has_unique_solution(&grid));
        assert_eq!(solver.count_solutions(&grid, 2), 2);
    }

    #[test]
    fn test_count_solutions_stops_at_limit() {
        let grid = Grid::empty();

        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&grid, 1), 1);
        assert_eq!(solver.count_solutions(&grid, 3), 3);
    }

    #[test]
    fn test_count_solutions_unsolvable_is_zero() {
        let puzzle =
            "123456780000000000000000000000000000000000000000000000000000000000000000000000009";
        let grid = Grid::from_string(puzzle).unwrap();

        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&grid, 2), 0);
    }
}
