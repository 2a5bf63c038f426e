use crate::solver::SolutionMode;
use thiserror::Error;

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors raised before a search starts.
///
/// Cancellation is not an error; see [`crate::SolveStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The board size is outside what the engine accepts at all.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No closed-form solution count is known for this size and mode.
    #[error("board size {size} is not supported in {mode} mode")]
    UnsupportedBoardSize { size: usize, mode: SolutionMode },
}
