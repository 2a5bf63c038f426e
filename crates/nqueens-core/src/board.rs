//! Per-column queen assignment with attack checks.

/// Row index of a queen. Columns are the positions in the assignment.
pub type Row = u16;

/// Largest board the engine accepts. Must stay within [`Row`]'s range.
pub const MAX_BOARD_SIZE: usize = 1024;

/// The partial assignment explored by one search.
///
/// Index is the column, value is the row of the queen in that column, or
/// `None` while the column has no queen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Option<Row>>,
}

impl Board {
    /// Create an empty board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![None; size],
        }
    }

    /// Board size (number of columns and rows).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row of the queen in `column`, if one is placed.
    pub fn get(&self, column: usize) -> Option<Row> {
        self.rows[column]
    }

    /// Current assignment, one entry per column.
    pub fn rows(&self) -> &[Option<Row>] {
        &self.rows
    }

    /// Whether every column holds a queen.
    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(Option::is_some)
    }

    /// Copy of the assignment when complete.
    pub fn snapshot(&self) -> Option<Vec<Row>> {
        self.rows.iter().copied().collect()
    }

    /// Whether a queen at (`column`, `row`) is safe from every queen in the
    /// columns before it.
    pub fn is_safe(&self, column: usize, row: Row) -> bool {
        self.rows[..column]
            .iter()
            .enumerate()
            .all(|(other_col, other)| match *other {
                Some(other_row) => {
                    let dr = row.abs_diff(other_row) as usize;
                    dr != 0 && dr != column - other_col
                }
                None => true,
            })
    }

    /// Advance the queen in `column` to the next safe row.
    ///
    /// Scanning resumes one past the row currently held by the column, so a
    /// row that already failed is never tried twice on the same path. When no
    /// row remains the column is cleared and `None` is returned.
    pub fn place_next(&mut self, column: usize) -> Option<Row> {
        let size = self.size();
        let start = self.rows[column].map_or(0, |r| r as usize + 1);
        let found = (start..size)
            .map(|r| r as Row)
            .find(|&row| self.is_safe(column, row));
        self.rows[column] = found;
        found
    }

    /// Clear every column.
    pub fn reset(&mut self) {
        self.rows.iter_mut().for_each(|r| *r = None);
    }
}

/// Check that a full assignment places N mutually non-attacking queens.
pub fn is_valid_solution(rows: &[Row]) -> bool {
    let n = rows.len();
    (0..n).all(|i| {
        (rows[i] as usize) < n
            && (i + 1..n).all(|j| {
                let dr = rows[i].abs_diff(rows[j]) as usize;
                dr != 0 && dr != j - i
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_next_finds_first_safe_row() {
        let mut board = Board::new(4);
        assert_eq!(board.place_next(0), Some(0));
        // Rows 0 and 1 are attacked by the queen at (0, 0).
        assert_eq!(board.place_next(1), Some(2));
        // Nothing fits in column 2 after (0,0), (1,2).
        assert_eq!(board.place_next(2), None);
        assert_eq!(board.get(2), None);
    }

    #[test]
    fn test_place_next_resumes_after_previous_row() {
        let mut board = Board::new(4);
        board.place_next(0);
        board.place_next(1);
        assert_eq!(board.place_next(1), Some(3));
        assert_eq!(board.place_next(1), None);
        // Exhausted column starts from scratch again.
        assert_eq!(board.place_next(1), Some(2));
    }

    #[test]
    fn test_is_safe_checks_rank_and_diagonals() {
        let mut board = Board::new(8);
        board.place_next(0); // (0, 0)
        assert!(!board.is_safe(1, 0));
        assert!(!board.is_safe(1, 1));
        assert!(board.is_safe(1, 2));
        assert!(!board.is_safe(3, 3));
        assert!(board.is_safe(3, 4));
    }

    #[test]
    fn test_snapshot_only_when_complete() {
        let mut board = Board::new(1);
        assert_eq!(board.snapshot(), None);
        assert_eq!(board.place_next(0), Some(0));
        assert!(board.is_complete());
        assert_eq!(board.snapshot(), Some(vec![0]));
        board.reset();
        assert!(!board.is_complete());
    }

    #[test]
    fn test_is_valid_solution() {
        assert!(is_valid_solution(&[1, 3, 0, 2]));
        assert!(is_valid_solution(&[0]));
        assert!(!is_valid_solution(&[0, 2, 1, 3]));
        assert!(!is_valid_solution(&[0, 0]));
        assert!(!is_valid_solution(&[0, 5]));
    }
}
