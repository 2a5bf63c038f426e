//! Basic example of using the N-Queens engine

use nqueens_core::{render_board, SolutionMode, Solver};

fn main() {
    let solver = Solver::new();

    for &mode in SolutionMode::all_modes() {
        println!("Solving 8x8 in {} mode...", mode);
        match solver.solve(8, mode) {
            Ok(result) => {
                println!(
                    "  {} solution(s) in {:.1}s ({} placements)",
                    result.solution_count, result.elapsed_secs, result.statistics.placements
                );
                if let Some(first) = result.first() {
                    println!("  {}: {}", first.name(), first.details);
                }
            }
            Err(e) => println!("  failed: {}", e),
        }
    }

    // Draw the first solution
    if let Ok(result) = solver.solve(8, SolutionMode::Single) {
        if let Some(first) = result.first() {
            println!("\n{}", render_board(first.queens()));
        }
    }
}
