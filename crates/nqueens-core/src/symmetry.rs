//! The seven non-identity symmetries of the square board.

use crate::board::Row;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A reflection or rotation of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    /// Columns reversed (left/right mirror)
    MirrorHorizontal,
    /// Rows reversed (top/bottom mirror)
    MirrorVertical,
    /// Reflection across the main diagonal
    MirrorMainDiagonal,
    /// Reflection across the anti-diagonal
    MirrorAntiDiagonal,
    /// Quarter turn
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three-quarter turn
    Rotate270,
}

impl Symmetry {
    /// Every non-identity symmetry, in the order images are reported.
    pub fn all() -> &'static [Symmetry] {
        &[
            Symmetry::MirrorVertical,
            Symmetry::MirrorHorizontal,
            Symmetry::MirrorMainDiagonal,
            Symmetry::MirrorAntiDiagonal,
            Symmetry::Rotate90,
            Symmetry::Rotate180,
            Symmetry::Rotate270,
        ]
    }

    /// Apply this symmetry to a full assignment.
    ///
    /// # Panics
    ///
    /// Panics if any row is `>= rows.len()`.
    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        debug_assert!(in_range(rows), "row out of range in {:?}", rows);
        let n = rows.len();
        let mut image = vec![0; n];
        for (j, &row) in rows.iter().enumerate() {
            let r = row as usize;
            let flipped_col = (n - 1 - j) as Row;
            let flipped_row = (n - 1 - r) as Row;
            match self {
                Symmetry::MirrorHorizontal => image[n - 1 - j] = row,
                Symmetry::MirrorVertical => image[j] = flipped_row,
                Symmetry::MirrorMainDiagonal => image[r] = j as Row,
                Symmetry::MirrorAntiDiagonal => image[n - 1 - r] = flipped_col,
                Symmetry::Rotate90 => image[n - 1 - r] = j as Row,
                Symmetry::Rotate180 => image[n - 1 - j] = flipped_row,
                Symmetry::Rotate270 => image[r] = flipped_col,
            }
        }
        image
    }
}

impl std::fmt::Display for Symmetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symmetry::MirrorHorizontal => write!(f, "Horizontal Mirror"),
            Symmetry::MirrorVertical => write!(f, "Vertical Mirror"),
            Symmetry::MirrorMainDiagonal => write!(f, "Main Diagonal Mirror"),
            Symmetry::MirrorAntiDiagonal => write!(f, "Anti-Diagonal Mirror"),
            Symmetry::Rotate90 => write!(f, "Rotation 90°"),
            Symmetry::Rotate180 => write!(f, "Rotation 180°"),
            Symmetry::Rotate270 => write!(f, "Rotation 270°"),
        }
    }
}

/// The distinct symmetric images of a full assignment.
///
/// All seven transforms are built in one pass over the columns. Coincident
/// images collapse, so boards with self-symmetry yield fewer than seven, and
/// the result may contain `rows` itself.
///
/// # Panics
///
/// Panics if any row is `>= rows.len()`.
pub fn symmetric_images(rows: &[Row]) -> Vec<Vec<Row>> {
    debug_assert!(in_range(rows), "row out of range in {:?}", rows);
    let n = rows.len();
    let mut mirror_h = vec![0; n];
    let mut mirror_v = vec![0; n];
    let mut mirror_main = vec![0; n];
    let mut mirror_anti = vec![0; n];
    let mut rot90 = vec![0; n];
    let mut rot180 = vec![0; n];
    let mut rot270 = vec![0; n];

    for (j, &row) in rows.iter().enumerate() {
        let r = row as usize;
        let idx1 = n - 1 - j;
        let idx2 = n - 1 - r;

        mirror_h[idx1] = row;
        mirror_v[j] = idx2 as Row;
        rot180[idx1] = idx2 as Row;
        mirror_main[r] = j as Row;
        rot90[idx2] = j as Row;
        mirror_anti[idx2] = idx1 as Row;
        rot270[r] = idx1 as Row;
    }

    let images: IndexSet<Vec<Row>> = [
        mirror_v,
        mirror_h,
        mirror_main,
        mirror_anti,
        rot90,
        rot180,
        rot270,
    ]
    .into_iter()
    .collect();
    images.into_iter().collect()
}

/// Every row index lies on the board.
fn in_range(rows: &[Row]) -> bool {
    rows.iter().all(|&r| (r as usize) < rows.len())
}

/// Whether `a` and `b` lie in the same symmetry orbit.
pub fn are_equivalent(a: &[Row], b: &[Row]) -> bool {
    a == b || symmetric_images(a).iter().any(|image| image == b)
}
