//! Basic example of using the Sudoku engine

use sudoku_engine::{Generator, Grid, Solver};

fn main() {
    env_logger::init();

    // Generate a puzzle
    println!("Generating a puzzle with 45 cells removed...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate(45);

    println!("Generated puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.filled_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    let mut solver = Solver::new();
    if let Some(solution) = solver.solve(&puzzle) {
        println!("Solution:");
        println!("{}", solution);
        println!("Checks out: {}", solution.is_valid_solution());
    } else {
        println!("No solution found (this shouldn't happen for a generated puzzle!)");
    }

    // Parse a puzzle from a string
    println!("\n--- Parsing a puzzle from string ---\n");
    let puzzle_string = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    match Grid::from_string(puzzle_string) {
        Ok(grid) => {
            println!("Parsed puzzle:");
            println!("{}", grid);

            // Check uniqueness
            let solutions = solver.count_solutions(&grid, 2);
            println!("Number of solutions (up to 2): {}", solutions);
        }
        Err(err) => println!("Failed to parse: {}", err),
    }
}
