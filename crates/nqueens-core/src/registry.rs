//! Deduplicating solution store.

use crate::board::Row;
use crate::solver::SolutionMode;
use crate::symmetry::symmetric_images;
use indexmap::IndexSet;
use log::trace;
use serde::{Deserialize, Serialize};

/// Set of full assignments keyed by element-wise equality.
///
/// Enumeration follows insertion order, which is what gives solutions their
/// ids once the run is assembled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionRegistry {
    solutions: IndexSet<Vec<Row>>,
}

impl SolutionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with room for `capacity` solutions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            solutions: IndexSet::with_capacity(capacity),
        }
    }

    /// Insert an assignment. Returns `false` if it was already present.
    pub fn add(&mut self, rows: Vec<Row>) -> bool {
        self.solutions.insert(rows)
    }

    pub fn contains(&self, rows: &[Row]) -> bool {
        self.solutions.contains(rows)
    }

    /// Whether any of `candidates` is already registered.
    pub fn overlaps<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a Vec<Row>>,
    {
        candidates.into_iter().any(|c| self.solutions.contains(c))
    }

    /// Record a freshly found raw solution according to `mode`.
    ///
    /// Returns the number of assignments newly added.
    pub fn admit(&mut self, rows: Vec<Row>, mode: SolutionMode) -> usize {
        match mode {
            SolutionMode::Single => usize::from(self.add(rows)),
            SolutionMode::All => {
                let images = symmetric_images(&rows);
                let mut added = usize::from(self.add(rows));
                for image in images {
                    added += usize::from(self.add(image));
                }
                added
            }
            SolutionMode::Unique => {
                let images = symmetric_images(&rows);
                if self.overlaps(&images) {
                    trace!("discarding {:?}: symmetric to a registered solution", rows);
                    0
                } else {
                    usize::from(self.add(rows))
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Registered assignments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &[Row]> {
        self.solutions.iter().map(Vec::as_slice)
    }

    pub fn into_vec(self) -> Vec<Vec<Row>> {
        self.solutions.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::are_equivalent;

    const EIGHT: [Row; 8] = [0, 4, 7, 5, 2, 6, 1, 3];

    #[test]
    fn test_add_deduplicates_by_value() {
        let mut registry = SolutionRegistry::new();
        assert!(registry.add(vec![1, 3, 0, 2]));
        assert!(!registry.add(vec![1, 3, 0, 2]));
        assert!(registry.add(vec![2, 0, 3, 1]));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut registry = SolutionRegistry::new();
        registry.add(vec![2, 0, 3, 1]);
        registry.add(vec![1, 3, 0, 2]);
        let order: Vec<&[Row]> = registry.iter().collect();
        let expected: Vec<&[Row]> = vec![&[2, 0, 3, 1], &[1, 3, 0, 2]];
        assert_eq!(order, expected);
    }

    #[test]
    fn test_overlaps() {
        let mut registry = SolutionRegistry::new();
        registry.add(vec![1, 3, 0, 2]);
        assert!(registry.overlaps(&[vec![0, 0, 0, 0], vec![1, 3, 0, 2]]));
        assert!(!registry.overlaps(&[vec![2, 0, 3, 1]]));
        assert!(!registry.overlaps(&Vec::<Vec<Row>>::new()));
    }

    #[test]
    fn test_admit_single_adds_raw_only() {
        let mut registry = SolutionRegistry::new();
        assert_eq!(registry.admit(EIGHT.to_vec(), SolutionMode::Single), 1);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&EIGHT));
    }

    #[test]
    fn test_admit_all_adds_orbit() {
        let mut registry = SolutionRegistry::new();
        assert_eq!(registry.admit(EIGHT.to_vec(), SolutionMode::All), 8);
        for image in symmetric_images(&EIGHT) {
            assert!(registry.contains(&image));
        }
        // Re-admitting a member of the same orbit adds nothing.
        let image = symmetric_images(&EIGHT).remove(3);
        assert_eq!(registry.admit(image, SolutionMode::All), 0);
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_admit_all_with_self_symmetric_board() {
        let mut registry = SolutionRegistry::new();
        assert_eq!(registry.admit(vec![1, 3, 0, 2], SolutionMode::All), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_admit_unique_rejects_images() {
        let mut registry = SolutionRegistry::new();
        assert_eq!(registry.admit(EIGHT.to_vec(), SolutionMode::Unique), 1);
        for image in symmetric_images(&EIGHT) {
            assert_eq!(registry.admit(image, SolutionMode::Unique), 0);
        }
        assert_eq!(registry.len(), 1);

        let other = vec![0, 5, 7, 2, 6, 3, 1, 4];
        assert!(!are_equivalent(&EIGHT, &other));
        assert_eq!(registry.admit(other, SolutionMode::Unique), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let mut registry = SolutionRegistry::new();
        registry.add(vec![2, 0, 3, 1]);
        registry.add(vec![1, 3, 0, 2]);
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, "[[2,0,3,1],[1,3,0,2]]");
        let back: SolutionRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_vec(), registry.into_vec());
    }
}
