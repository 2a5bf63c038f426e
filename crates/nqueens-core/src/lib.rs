//! N-Queens solver engine.
//!
//! Places N non-attacking queens on an N×N board with a column-by-column
//! backtracking search and reports solutions in one of three modes:
//! a single solution, unique solutions up to board symmetry, or every
//! solution including symmetric duplicates.
//!
//! ```no_run
//! use nqueens_core::{SolutionMode, Solver};
//!
//! let result = Solver::new().solve(8, SolutionMode::Unique).unwrap();
//! assert_eq!(result.solution_count, 12);
//! ```

pub mod board;
pub mod counts;
pub mod error;
pub mod observer;
pub mod registry;
pub mod result;
pub mod solver;
pub mod symmetry;

pub use board::{Board, Row, MAX_BOARD_SIZE};
pub use counts::known_solution_count;
pub use error::{SolverError, SolverResult};
pub use observer::{ChannelObserver, FnObserver, NoOpObserver, SolverEvent, SolverObserver};
pub use registry::SolutionRegistry;
pub use result::{render_board, SimulationResult, Solution};
pub use solver::{
    CancelHandle, SearchStatistics, SolutionMode, SolveStatus, SolveTask, Solver, SolverConfig,
};
pub use symmetry::{symmetric_images, Symmetry};
