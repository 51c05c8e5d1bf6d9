use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{Grid, Position, Solver};

/// Unique-puzzle generator.
///
/// Builds a complete random solution, then clears cells one at a time,
/// keeping each clearing only while the puzzle still has exactly one
/// solution. Every grid it returns therefore solves uniquely.
pub struct Generator {
    rng: SmallRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducible puzzles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle by clearing up to `target_removals` cells from a
    /// random solved grid.
    ///
    /// Cells are visited in a random order, and a clearing is rolled back
    /// whenever it would admit a second solution. The result always keeps
    /// at least `81 - target_removals` givens, so over-ambitious targets
    /// degrade to the sparsest unique puzzle the walk reaches.
    pub fn generate(&mut self, target_removals: usize) -> Grid {
        let mut grid = self.solved_grid();
        // Counting never touches the solver's RNG.
        let solver = Solver::new();

        let mut positions: Vec<Position> = Position::all().collect();
        positions.shuffle(&mut self.rng);

        let mut removed = 0;
        for pos in positions {
            if removed == target_removals {
                break;
            }

            // Skip if already empty
            let digit = match grid.get(pos) {
                Some(digit) => digit,
                None => continue,
            };

            grid.set(pos, None);
            if solver.has_unique_solution(&grid) {
                removed += 1;
            } else {
                grid.set(pos, Some(digit));
                trace!("restored {} at ({}, {})", digit, pos.row, pos.col);
            }
        }

        debug!(
            "generated puzzle with {} givens ({} of {} removals)",
            grid.filled_count(),
            removed,
            target_removals
        );
        grid
    }

    /// Produce a random fully solved grid.
    fn solved_grid(&mut self) -> Grid {
        let mut solver = Solver::with_seed(self.rng.gen());
        match solver.solve(&Grid::empty()) {
            Some(grid) => {
                debug!("base solution:\n{}", grid);
                grid
            }
            // An empty grid always solves.
            None => self.solved_grid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_unique_solution() {
        let mut generator = Generator::with_seed(42);
        let grid = generator.generate(45);

        assert!(grid.filled_count() >= 81 - 45);

        let solver = Solver::new();
        assert!(solver.has_unique_solution(&grid));
    }

    #[test]
    fn test_generated_puzzle_is_solvable() {
        let mut generator = Generator::with_seed(42);
        let grid = generator.generate(45);

        let mut solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();
        assert!(solution.is_valid_solution());
    }

    #[test]
    fn test_generate_zero_removals_returns_solved_grid() {
        let mut generator = Generator::with_seed(42);
        let grid = generator.generate(0);

        assert!(grid.is_complete());
        assert!(grid.is_valid_solution());
    }

    #[test]
    fn test_generate_small_target_removes_exactly() {
        // Breaking uniqueness takes at least four cleared cells, and the
        // walk retries elsewhere after a rollback, so a target of 4 is
        // always met exactly.
        let mut generator = Generator::with_seed(42);
        let grid = generator.generate(4);

        assert_eq!(grid.filled_count(), 77);

        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&grid, 2), 1);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut first = Generator::with_seed(123);
        let mut second = Generator::with_seed(123);

        assert_eq!(first.generate(40), second.generate(40));
    }
}
