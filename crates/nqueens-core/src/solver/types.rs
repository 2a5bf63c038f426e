use serde::{Deserialize, Serialize};

/// Which solutions a run keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolutionMode {
    /// Stop at the first solution
    Single,
    /// One representative per symmetry class
    Unique,
    /// Every solution, symmetric duplicates included
    All,
}

impl SolutionMode {
    /// Largest board size front ends should accept for this mode.
    ///
    /// Beyond these sizes exhaustive enumeration takes far too long.
    pub fn max_board_size(&self) -> usize {
        match self {
            SolutionMode::Single => 37,
            SolutionMode::Unique => 17,
            SolutionMode::All => 16,
        }
    }

    pub fn all_modes() -> &'static [SolutionMode] {
        &[SolutionMode::Single, SolutionMode::Unique, SolutionMode::All]
    }
}

impl Default for SolutionMode {
    fn default() -> Self {
        Self::Unique
    }
}

impl std::fmt::Display for SolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionMode::Single => write!(f, "Single"),
            SolutionMode::Unique => write!(f, "Unique"),
            SolutionMode::All => write!(f, "All"),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// The search ran to its natural end; the solution set is complete.
    Completed,
    /// Cancellation was observed; the solution set is partial.
    Cancelled,
}

impl SolveStatus {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SolveStatus::Cancelled)
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Completed => write!(f, "completed"),
            SolveStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Queens placed, including re-placements while backtracking
    pub placements: u64,
    /// Columns that ran out of safe rows
    pub backtracks: u64,
    /// Full placements reached, before mode filtering
    pub raw_solutions: u64,
}
