//! Plain-text reports of a finished run.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;
use nqueens_core::{SimulationResult, SolutionMode};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const LABEL_WIDTH: usize = 28;
const VALUE_WIDTH: usize = 20;

/// Shown instead of a summary when the run found nothing
pub const NO_SOLUTION_MESSAGE: &str = "No Solutions found. Try a larger board size!";

/// Heading for a solution count in summaries.
pub fn count_label(mode: SolutionMode) -> &'static str {
    match mode {
        SolutionMode::Single => "No. of Solutions",
        SolutionMode::Unique => "No. of Unique Solutions",
        SolutionMode::All => "No. of All Solutions",
    }
}

/// Heading above the solution list.
pub fn list_title(mode: SolutionMode, solution_count: usize, max_output: usize) -> String {
    match mode {
        SolutionMode::Single => "Solution:".to_string(),
        SolutionMode::All if solution_count <= max_output => {
            "List of All Solutions (Included Symmetrical Ones):".to_string()
        }
        SolutionMode::Unique if solution_count <= max_output => {
            "List of Unique Solutions (Excluded Symmetrical Ones):".to_string()
        }
        SolutionMode::All => format!(
            "List of First {} Solution(s), May Include Symmetrical Ones:",
            max_output
        ),
        SolutionMode::Unique => format!(
            "List of First {} Unique Solution(s), Excluded Symmetrical Ones:",
            max_output
        ),
    }
}

/// Text report for one result: the solution list and a summary block.
pub struct Report<'a> {
    result: &'a SimulationResult,
    max_output: usize,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a SimulationResult, max_output: usize) -> Self {
        Self { result, max_output }
    }

    fn listed(&self) -> usize {
        self.result.solution_count.min(self.max_output)
    }

    /// Title line followed by one line per listed solution.
    pub fn solution_list(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            list_title(self.result.mode, self.result.solution_count, self.max_output)
        );
        for solution in self.result.solutions.iter().take(self.listed()) {
            let _ = writeln!(
                out,
                "Sol. No. {:<width$}{}",
                solution.id,
                solution.details,
                width = VALUE_WIDTH
            );
        }
        out.push('\n');
        out
    }

    pub fn summary(&self, now: DateTime<Local>) -> String {
        let result = self.result;
        let mut out = String::from("\nSummary of Results:\n");
        let mut row = |label: &str, value: String| {
            let _ = writeln!(
                out,
                "{:<lw$}{:>vw$}",
                label,
                value,
                lw = LABEL_WIDTH,
                vw = VALUE_WIDTH
            );
        };

        row("Date and Time", now.format("%Y-%m-%d %H:%M:%S").to_string());
        row("BoardSize", result.board_size.to_string());
        if result.solution_count > self.max_output {
            row("No. of Solutions Included", self.max_output.to_string());
        } else {
            row(count_label(result.mode), result.solution_count.to_string());
        }
        row("Elapsed Time (s)", format!("{:.2}", result.elapsed_secs));
        if result.status.is_cancelled() {
            row("Status", result.status.to_string());
        }
        out
    }

    pub fn render(&self, now: DateTime<Local>) -> String {
        format!("{}{}\n", self.solution_list(), self.summary(now))
    }

    /// File name for this board size.
    pub fn file_name(&self) -> String {
        format!("Board Size - {}.txt", self.result.board_size)
    }

    /// Write the report into `dir`, creating it as needed.
    pub fn export(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let path = dir.join(self.file_name());
        fs::write(&path, self.render(Local::now()))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("report written to {}", path.display());
        Ok(path)
    }
}
