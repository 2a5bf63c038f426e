//! Column-by-column backtracking search.

use super::{CancelHandle, SearchStatistics, SolutionMode, SolveStatus, SolverConfig};
use crate::board::Board;
use crate::observer::SolverObserver;
use crate::registry::SolutionRegistry;
use log::trace;
use std::ops::ControlFlow;
use std::thread;

/// Why the whole search stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    Cancelled,
    /// Mode rule satisfied: single solution found, or first column reached
    /// the midline.
    Done,
}

/// State owned by one search. Built fresh for every run.
pub(crate) struct Search<'a, O: SolverObserver + ?Sized> {
    board: Board,
    registry: SolutionRegistry,
    mode: SolutionMode,
    /// ceil(N/2): first-column rows from here on mirror rows already covered
    midline: usize,
    config: &'a SolverConfig,
    cancel: &'a CancelHandle,
    observer: &'a mut O,
    stats: SearchStatistics,
}

/// What a finished search hands to result assembly.
pub(crate) struct SearchOutcome {
    pub registry: SolutionRegistry,
    pub stats: SearchStatistics,
    pub status: SolveStatus,
}

impl<'a, O: SolverObserver + ?Sized> Search<'a, O> {
    pub(crate) fn new(
        size: usize,
        mode: SolutionMode,
        registry: SolutionRegistry,
        config: &'a SolverConfig,
        cancel: &'a CancelHandle,
        observer: &'a mut O,
    ) -> Self {
        Self {
            board: Board::new(size),
            registry,
            mode,
            midline: (size + 1) / 2,
            config,
            cancel,
            observer,
            stats: SearchStatistics::default(),
        }
    }

    pub(crate) fn run(mut self) -> SearchOutcome {
        let status = match self.explore(0) {
            ControlFlow::Break(Halt::Cancelled) => SolveStatus::Cancelled,
            ControlFlow::Break(Halt::Done) | ControlFlow::Continue(()) => SolveStatus::Completed,
        };
        SearchOutcome {
            registry: self.registry,
            stats: self.stats,
            status,
        }
    }

    /// Explore `column`: descend through every safe row in turn.
    ///
    /// `Continue` means this column is exhausted and the caller should try
    /// its next row; `Break` unwinds the whole search.
    fn explore(&mut self, column: usize) -> ControlFlow<Halt> {
        loop {
            if self.cancel.is_cancelled() {
                return ControlFlow::Break(Halt::Cancelled);
            }
            if self.should_stop() {
                return ControlFlow::Break(Halt::Done);
            }

            if column == self.board.size() {
                self.record_solution();
                return ControlFlow::Continue(());
            }

            if self.board.place_next(column).is_none() {
                self.stats.backtracks += 1;
                return ControlFlow::Continue(());
            }
            self.stats.placements += 1;

            if self.config.visualize {
                self.observer.on_queen_placed(self.board.rows());
                if !self.config.delay.is_zero() {
                    thread::sleep(self.config.delay);
                }
            }

            self.explore(column + 1)?;
        }
    }

    /// Mode-specific early exit, checked before any work at a column.
    fn should_stop(&mut self) -> bool {
        match self.mode {
            SolutionMode::Single => !self.registry.is_empty(),
            SolutionMode::Unique | SolutionMode::All => {
                let reached = self
                    .board
                    .get(0)
                    .is_some_and(|row| usize::from(row) == self.midline);
                if reached {
                    self.emit_progress();
                }
                reached
            }
        }
    }

    fn record_solution(&mut self) {
        let Some(rows) = self.board.snapshot() else {
            return;
        };
        self.stats.raw_solutions += 1;

        let added = self.registry.admit(rows.clone(), self.mode);
        trace!("solution {:?} added {} entries", rows, added);

        if self.config.visualize {
            self.observer.on_solution_found(&rows);
        }
        self.emit_progress();
    }

    fn emit_progress(&mut self) {
        let row = self.board.get(0).map_or(0, usize::from);
        let percent = if self.midline == 0 {
            0.0
        } else {
            (1000.0 * row as f64 / self.midline as f64).round() / 10.0
        };
        self.observer.on_progress(percent);
    }
}
