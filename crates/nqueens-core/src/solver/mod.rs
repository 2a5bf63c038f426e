//! Solver entry point.
//!
//! [`Solver`] validates the request, builds fresh per-run state, drives the
//! backtracking search and assembles the result. Runs can be cancelled from
//! any thread through a [`CancelHandle`].

mod backtrack;
mod types;

use crate::board::MAX_BOARD_SIZE;
use crate::counts::known_solution_count;
use crate::error::{SolverError, SolverResult};
use crate::observer::{NoOpObserver, SolverObserver};
use crate::registry::SolutionRegistry;
use crate::result::SimulationResult;
use backtrack::Search;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub use types::{SearchStatistics, SolutionMode, SolveStatus};

/// Default pause after each placement when visualizing
pub const DEFAULT_DELAY_MS: u64 = 250;

/// Upper bound on registry pre-allocation, whatever the expected count.
const MAX_PRESIZED_CAPACITY: usize = 1 << 16;

/// Configuration for a solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Emit placement and solution events, pausing after each placement
    pub visualize: bool,
    /// Pause after each placement while visualizing
    pub delay: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            visualize: false,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

impl SolverConfig {
    /// Visualizing configuration with the given pause per placement.
    pub fn visualized(delay: Duration) -> Self {
        Self {
            visualize: true,
            delay,
        }
    }
}

/// Cooperative cancellation flag of one run.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the running search to stop. Safe from any thread.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// N-Queens solver.
///
/// Holds only configuration and the handle of the latest run. Every run gets
/// its own [`CancelHandle`]; cancelling one run never touches another.
#[derive(Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    /// Handle of the most recently started run
    current: Mutex<CancelHandle>,
}

impl Clone for Solver {
    /// Clones share configuration only; the clone has no run in flight.
    fn clone(&self) -> Self {
        Self::with_config(self.config.clone())
    }
}

impl Solver {
    /// Create a solver with the default (non-visual) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            current: Mutex::new(CancelHandle::new()),
        }
    }

    /// Cancel the most recently started run of this solver.
    ///
    /// Earlier runs are unaffected; cancel those through their
    /// [`SolveTask`]. A no-op when the latest run has already finished.
    pub fn request_cancel(&self) {
        self.current_run().cancel();
    }

    /// Solve without observing events.
    pub fn solve(&self, size: usize, mode: SolutionMode) -> SolverResult<SimulationResult> {
        self.solve_with_observer(size, mode, &mut NoOpObserver)
    }

    /// Solve, reporting events to `observer`.
    ///
    /// The run can be stopped from another thread, or from the observer
    /// itself, with [`Solver::request_cancel`].
    pub fn solve_with_observer<O>(
        &self,
        size: usize,
        mode: SolutionMode,
        observer: &mut O,
    ) -> SolverResult<SimulationResult>
    where
        O: SolverObserver + ?Sized,
    {
        let cancel = self.begin_run();
        run(&self.config, size, mode, &cancel, observer)
    }

    /// Run the search on a worker thread.
    pub fn spawn<O>(&self, size: usize, mode: SolutionMode, mut observer: O) -> SolveTask
    where
        O: SolverObserver + Send + 'static,
    {
        let cancel = self.begin_run();
        let config = self.config.clone();
        let worker_cancel = cancel.clone();
        let handle =
            thread::spawn(move || run(&config, size, mode, &worker_cancel, &mut observer));
        SolveTask { handle, cancel }
    }

    /// Fresh handle for a new run, remembered as the latest.
    fn begin_run(&self) -> CancelHandle {
        let cancel = CancelHandle::new();
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = cancel.clone();
        cancel
    }

    fn current_run(&self) -> CancelHandle {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn run<O>(
    config: &SolverConfig,
    size: usize,
    mode: SolutionMode,
    cancel: &CancelHandle,
    observer: &mut O,
) -> SolverResult<SimulationResult>
where
    O: SolverObserver + ?Sized,
{
    let registry = prepare_registry(size, mode)?;
    debug!("solving {0}x{0} board in {1} mode", size, mode);

    let start = Instant::now();
    let outcome = Search::new(size, mode, registry, config, cancel, observer).run();
    let elapsed = start.elapsed();

    if outcome.status.is_cancelled() {
        info!(
            "run cancelled after {} placements with {} solutions registered",
            outcome.stats.placements,
            outcome.registry.len()
        );
    }
    debug!(
        "{} solutions, {:?}, {} ({:?})",
        outcome.registry.len(),
        elapsed,
        outcome.status,
        outcome.stats
    );

    Ok(SimulationResult::assemble(
        size,
        mode,
        outcome.registry,
        elapsed,
        outcome.status,
        outcome.stats,
    ))
}

fn prepare_registry(size: usize, mode: SolutionMode) -> SolverResult<SolutionRegistry> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(SolverError::InvalidArgument(format!(
            "board size must be between 1 and {}, got {}",
            MAX_BOARD_SIZE, size
        )));
    }
    let expected = known_solution_count(size, mode)?;
    let capacity = expected.min(MAX_PRESIZED_CAPACITY);
    debug!("expecting {} solutions, reserving {}", expected, capacity);
    Ok(SolutionRegistry::with_capacity(capacity))
}

/// A search running on a worker thread.
#[derive(Debug)]
pub struct SolveTask {
    handle: JoinHandle<SolverResult<SimulationResult>>,
    cancel: CancelHandle,
}

impl SolveTask {
    /// Ask the worker to stop; [`SolveTask::join`] then returns partial
    /// results.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Handle that cancels this run only.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker and return its result.
    ///
    /// A panic on the worker is resumed on the calling thread.
    pub fn join(self) -> SolverResult<SimulationResult> {
        match self.handle.join() {
            Ok(result) => result,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}
