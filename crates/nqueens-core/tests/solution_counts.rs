//! End-to-end checks of solution counts against the published tables.

use nqueens_core::{
    known_solution_count, symmetric_images, SolutionMode, SolveStatus, Solver, SolverError,
};

fn count(size: usize, mode: SolutionMode) -> usize {
    let result = Solver::new().solve(size, mode).unwrap();
    assert_eq!(result.status, SolveStatus::Completed);
    assert_eq!(result.board_size, size);
    assert_eq!(result.mode, mode);
    result.solution_count
}

#[test]
fn unique_counts_match_table() {
    for size in 1..=9 {
        let expected = known_solution_count(size, SolutionMode::Unique).unwrap();
        assert_eq!(count(size, SolutionMode::Unique), expected, "N = {}", size);
    }
}

#[test]
fn all_counts_match_table() {
    for size in 1..=9 {
        let expected = known_solution_count(size, SolutionMode::All).unwrap();
        assert_eq!(count(size, SolutionMode::All), expected, "N = {}", size);
    }
}

#[test]
fn ten_by_ten() {
    assert_eq!(count(10, SolutionMode::Unique), 92);
    assert_eq!(count(10, SolutionMode::All), 724);
}

#[test]
fn single_mode_has_at_most_one_solution() {
    assert_eq!(count(1, SolutionMode::Single), 1);
    assert_eq!(count(2, SolutionMode::Single), 0);
    assert_eq!(count(3, SolutionMode::Single), 0);
    for size in 4..=12 {
        assert_eq!(count(size, SolutionMode::Single), 1, "N = {}", size);
    }
}

#[test]
fn four_by_four_scenario() {
    let solver = Solver::new();

    let unique = solver.solve(4, SolutionMode::Unique).unwrap();
    assert_eq!(unique.solution_count, 1);
    let representative = unique.solutions[0].queens().to_vec();
    assert!(representative == vec![1, 3, 0, 2] || representative == vec![2, 0, 3, 1]);
    assert_eq!(unique.solutions[0].name(), "Sol. No. 1");

    let all = solver.solve(4, SolutionMode::All).unwrap();
    assert_eq!(all.solution_count, 2);
    let mut boards: Vec<Vec<u16>> = all.solutions.iter().map(|s| s.queens().to_vec()).collect();
    boards.sort();
    assert_eq!(boards, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
}

#[test]
fn every_all_solution_orbit_stays_inside_the_set() {
    let result = Solver::new().solve(8, SolutionMode::All).unwrap();
    let boards: Vec<Vec<u16>> = result
        .solutions
        .iter()
        .map(|s| s.queens().to_vec())
        .collect();
    for board in &boards {
        for image in symmetric_images(board) {
            assert!(boards.contains(&image), "{:?} missing image {:?}", board, image);
        }
    }
}

#[test]
fn out_of_range_requests_fail() {
    let solver = Solver::new();
    assert!(matches!(
        solver.solve(0, SolutionMode::Unique),
        Err(SolverError::InvalidArgument(_))
    ));
    assert!(matches!(
        solver.solve(18, SolutionMode::Unique),
        Err(SolverError::UnsupportedBoardSize { size: 18, .. })
    ));
}
