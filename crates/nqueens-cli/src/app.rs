use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use nqueens_core::{Row, SolutionMode, SolverEvent};
use std::time::{Duration, Instant};

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// State of the live board while a visualized run is in flight.
pub struct App {
    pub board_size: usize,
    pub mode: SolutionMode,
    /// Latest partial assignment reported by the solver
    pub queens: Vec<Option<Row>>,
    pub progress: f64,
    pub placements: u64,
    /// Full placements seen, before mode filtering
    pub solutions_seen: usize,
    pub last_solution: Option<Vec<Row>>,
    /// Set once the user asked to stop
    pub cancel_requested: bool,
    pub theme: Theme,
    started: Instant,
}

impl App {
    pub fn new(board_size: usize, mode: SolutionMode, theme: Theme) -> Self {
        Self {
            board_size,
            mode,
            queens: vec![None; board_size],
            progress: 0.0,
            placements: 0,
            solutions_seen: 0,
            last_solution: None,
            cancel_requested: false,
            theme,
            started: Instant::now(),
        }
    }

    pub fn handle_event(&mut self, event: SolverEvent) {
        match event {
            SolverEvent::QueenPlaced(queens) => {
                self.placements += 1;
                self.queens = queens;
            }
            SolverEvent::SolutionFound(queens) => {
                self.solutions_seen += 1;
                self.queens = queens.iter().copied().map(Some).collect();
                self.last_solution = Some(queens);
            }
            SolverEvent::Progress(percent) => self.progress = percent,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.cancel_requested = true;
                AppAction::Quit
            }
            _ => AppAction::Continue,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Column of the most recently placed queen, if any.
    pub fn active_column(&self) -> Option<usize> {
        self.queens.iter().rposition(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(4, SolutionMode::Unique, Theme::basic())
    }

    #[test]
    fn test_events_update_state() {
        let mut app = app();
        app.handle_event(SolverEvent::QueenPlaced(vec![Some(1), Some(3), None, None]));
        assert_eq!(app.placements, 1);
        assert_eq!(app.active_column(), Some(1));

        app.handle_event(SolverEvent::SolutionFound(vec![1, 3, 0, 2]));
        assert_eq!(app.solutions_seen, 1);
        assert_eq!(app.queens, vec![Some(1), Some(3), Some(0), Some(2)]);
        assert_eq!(app.last_solution.as_deref(), Some(&[1, 3, 0, 2][..]));

        app.handle_event(SolverEvent::Progress(50.0));
        assert_eq!(app.progress, 50.0);
    }

    #[test]
    fn test_quit_keys_request_cancel() {
        let mut app = app();
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.handle_key(other), AppAction::Continue);
        assert!(!app.cancel_requested);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.handle_key(esc), AppAction::Quit);
        assert!(app.cancel_requested);
    }
}
