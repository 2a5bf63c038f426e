//! Published solution counts, used to pre-size the registry.

use crate::error::{SolverError, SolverResult};
use crate::solver::SolutionMode;

/// Unique solutions (up to symmetry) for N = 1..=17.
const UNIQUE_COUNTS: [usize; 17] = [
    1, 0, 0, 1, 2, 1, 6, 12, 46, 92, 341, 1787, 9233, 45752, 285053, 1846955, 11977939,
];

/// All solutions for N = 1..=17.
const ALL_COUNTS: [usize; 17] = [
    1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2680, 14200, 73712, 365596, 2279184, 14772512, 95815104,
];

/// Number of solutions a complete run of `mode` yields on a `size` board.
///
/// Single mode needs no table: any board other than 2 and 3 has a solution.
pub fn known_solution_count(size: usize, mode: SolutionMode) -> SolverResult<usize> {
    if size == 0 {
        return Err(SolverError::InvalidArgument(
            "board size must be at least 1".to_string(),
        ));
    }
    let table = match mode {
        SolutionMode::Single => return Ok(usize::from(!matches!(size, 2 | 3))),
        SolutionMode::Unique => &UNIQUE_COUNTS,
        SolutionMode::All => &ALL_COUNTS,
    };
    table
        .get(size - 1)
        .copied()
        .ok_or(SolverError::UnsupportedBoardSize { size, mode })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_boards() {
        let unique: Vec<usize> = (1..=6)
            .map(|n| known_solution_count(n, SolutionMode::Unique).unwrap())
            .collect();
        let all: Vec<usize> = (1..=6)
            .map(|n| known_solution_count(n, SolutionMode::All).unwrap())
            .collect();
        assert_eq!(unique, vec![1, 0, 0, 1, 2, 1]);
        assert_eq!(all, vec![1, 0, 0, 2, 10, 4]);
    }

    #[test]
    fn test_single_mode() {
        assert_eq!(known_solution_count(1, SolutionMode::Single), Ok(1));
        assert_eq!(known_solution_count(3, SolutionMode::Single), Ok(0));
        assert_eq!(known_solution_count(100, SolutionMode::Single), Ok(1));
    }

    #[test]
    fn test_out_of_table() {
        assert_eq!(known_solution_count(17, SolutionMode::All), Ok(95815104));
        assert_eq!(
            known_solution_count(18, SolutionMode::Unique),
            Err(SolverError::UnsupportedBoardSize {
                size: 18,
                mode: SolutionMode::Unique
            })
        );
        assert!(matches!(
            known_solution_count(0, SolutionMode::All),
            Err(SolverError::InvalidArgument(_))
        ));
    }
}
