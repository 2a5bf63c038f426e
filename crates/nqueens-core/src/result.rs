//! Result assembly.

use crate::board::Row;
use crate::registry::SolutionRegistry;
use crate::solver::{SearchStatistics, SolutionMode, SolveStatus};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Queen glyph used in board drawings
pub const QUEEN: char = '♕';

/// One solution, copied out of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// 1-based position in enumeration order
    pub id: usize,
    /// Row of the queen in each column (0-based)
    queens: Vec<Row>,
    /// `(column, row)` pairs, 1-based
    pub details: String,
}

impl Solution {
    pub fn new(id: usize, queens: Vec<Row>) -> Self {
        let details = format_details(&queens);
        Self {
            id,
            queens,
            details,
        }
    }

    pub fn queens(&self) -> &[Row] {
        &self.queens
    }

    /// Display name, e.g. "Sol. No. 3".
    pub fn name(&self) -> String {
        format!("Sol. No. {}", self.id)
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.details)
    }
}

/// Space-separated `(column, row)` pairs with 1-based indices.
fn format_details(queens: &[Row]) -> String {
    queens
        .iter()
        .enumerate()
        .map(|(col, &row)| format!("({}, {})", col + 1, row as usize + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub board_size: usize,
    pub mode: SolutionMode,
    pub solutions: Vec<Solution>,
    pub solution_count: usize,
    /// Wall-clock time in seconds, rounded to one decimal
    pub elapsed_secs: f64,
    pub status: SolveStatus,
    pub statistics: SearchStatistics,
}

impl SimulationResult {
    pub(crate) fn assemble(
        board_size: usize,
        mode: SolutionMode,
        registry: SolutionRegistry,
        elapsed: Duration,
        status: SolveStatus,
        statistics: SearchStatistics,
    ) -> Self {
        let solutions: Vec<Solution> = registry
            .into_vec()
            .into_iter()
            .enumerate()
            .map(|(index, queens)| Solution::new(index + 1, queens))
            .collect();

        Self {
            board_size,
            mode,
            solution_count: solutions.len(),
            solutions,
            elapsed_secs: round_tenths(elapsed.as_secs_f64()),
            status,
            statistics,
        }
    }

    /// Whether the solution set is exhaustive for the mode.
    pub fn is_complete(&self) -> bool {
        !self.status.is_cancelled()
    }

    pub fn first(&self) -> Option<&Solution> {
        self.solutions.first()
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Draw a full assignment as text, row N-1 at the top.
///
/// ```text
/// |-|♕|-|-|
/// |♕|-|-|-|
/// |-|-|-|♕|
/// |-|-|♕|-|
/// ```
pub fn render_board(queens: &[Row]) -> String {
    let n = queens.len();
    let mut out = String::with_capacity(n * (2 * n + 2));
    for row in (0..n).rev() {
        for &queen_row in queens {
            out.push('|');
            out.push(if queen_row as usize == row { QUEEN } else { '-' });
        }
        out.push_str("|\n");
    }
    out
}
