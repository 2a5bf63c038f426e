//! Search observers.
//!
//! The engine reports three kinds of events:
//! - a queen was placed (visualization runs only)
//! - a full placement was found (visualization runs only)
//! - progress through the first column, as a percentage
//!
//! Observers run on the search thread. Moving events to another thread is
//! the caller's job; [`ChannelObserver`] covers the common case.

use crate::board::Row;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// Trait for receiving search events. Every method defaults to a no-op.
pub trait SolverObserver {
    /// A queen was placed; `queens` is the current partial assignment.
    fn on_queen_placed(&mut self, _queens: &[Option<Row>]) {}

    /// A full placement was found, before mode filtering.
    fn on_solution_found(&mut self, _queens: &[Row]) {}

    /// Progress in percent, rounded to one decimal.
    fn on_progress(&mut self, _percent: f64) {}
}

impl<T: SolverObserver + ?Sized> SolverObserver for &mut T {
    fn on_queen_placed(&mut self, queens: &[Option<Row>]) {
        (**self).on_queen_placed(queens)
    }

    fn on_solution_found(&mut self, queens: &[Row]) {
        (**self).on_solution_found(queens)
    }

    fn on_progress(&mut self, percent: f64) {
        (**self).on_progress(percent)
    }
}

impl<T: SolverObserver + ?Sized> SolverObserver for Box<T> {
    fn on_queen_placed(&mut self, queens: &[Option<Row>]) {
        (**self).on_queen_placed(queens)
    }

    fn on_solution_found(&mut self, queens: &[Row]) {
        (**self).on_solution_found(queens)
    }

    fn on_progress(&mut self, percent: f64) {
        (**self).on_progress(percent)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl SolverObserver for NoOpObserver {}

/// An owned copy of one search event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolverEvent {
    QueenPlaced(Vec<Option<Row>>),
    SolutionFound(Vec<Row>),
    Progress(f64),
}

/// Observer that forwards events over an mpsc channel.
///
/// Send failures (receiver dropped) are ignored; the search keeps going
/// until it finishes or is cancelled.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: Sender<SolverEvent>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<SolverEvent>) -> Self {
        Self { sender }
    }
}

impl SolverObserver for ChannelObserver {
    fn on_queen_placed(&mut self, queens: &[Option<Row>]) {
        let _ = self.sender.send(SolverEvent::QueenPlaced(queens.to_vec()));
    }

    fn on_solution_found(&mut self, queens: &[Row]) {
        let _ = self.sender.send(SolverEvent::SolutionFound(queens.to_vec()));
    }

    fn on_progress(&mut self, percent: f64) {
        let _ = self.sender.send(SolverEvent::Progress(percent));
    }
}

/// Observer built from a single closure over [`SolverEvent`]s.
pub struct FnObserver<F>
where
    F: FnMut(SolverEvent),
{
    callback: F,
}

impl<F> FnObserver<F>
where
    F: FnMut(SolverEvent),
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> SolverObserver for FnObserver<F>
where
    F: FnMut(SolverEvent),
{
    fn on_queen_placed(&mut self, queens: &[Option<Row>]) {
        (self.callback)(SolverEvent::QueenPlaced(queens.to_vec()));
    }

    fn on_solution_found(&mut self, queens: &[Row]) {
        (self.callback)(SolverEvent::SolutionFound(queens.to_vec()));
    }

    fn on_progress(&mut self, percent: f64) {
        (self.callback)(SolverEvent::Progress(percent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_channel_observer_forwards_events() {
        let (tx, rx) = mpsc::channel();
        let mut observer = ChannelObserver::new(tx);
        observer.on_queen_placed(&[Some(1), None]);
        observer.on_solution_found(&[1, 3, 0, 2]);
        observer.on_progress(50.0);

        let events: Vec<SolverEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                SolverEvent::QueenPlaced(vec![Some(1), None]),
                SolverEvent::SolutionFound(vec![1, 3, 0, 2]),
                SolverEvent::Progress(50.0),
            ]
        );
    }

    #[test]
    fn test_channel_observer_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut observer = ChannelObserver::new(tx);
        observer.on_progress(10.0);
    }

    #[test]
    fn test_fn_observer_through_mut_ref() {
        let mut seen = Vec::new();
        {
            let mut observer = FnObserver::new(|event| seen.push(event));
            let by_ref: &mut dyn SolverObserver = &mut observer;
            by_ref.on_progress(12.5);
            by_ref.on_solution_found(&[0]);
        }
        assert_eq!(
            seen,
            vec![SolverEvent::Progress(12.5), SolverEvent::SolutionFound(vec![0])]
        );
    }
}
