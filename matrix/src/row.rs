use std::collections::BTreeMap;
use std::marker::PhantomData;

use tracing::trace;

use crate::fill::{CellDefault, TypeDefault};
use crate::iter::{Cells, CellsMut};

/// One sparse row of a matrix, keyed by column.
///
/// Only columns handed out by [`SparseRow::access`] are stored. A stored
/// column may still hold the default value, which is why occupancy is
/// derived from the values and not from the number of stored entries.
#[derive(Debug, Clone)]
pub struct SparseRow<T, D = TypeDefault> {
    default_value: T,
    cells: BTreeMap<usize, T>,
    fill: PhantomData<fn() -> D>,
}

impl<T, D: CellDefault<T>> SparseRow<T, D> {
    pub fn new() -> Self {
        Self::with_default(D::value())
    }
}

impl<T, D> SparseRow<T, D> {
    /// Creates an empty row whose unset columns read as `default_value`
    /// instead of the value named by `D`.
    pub fn with_default(default_value: T) -> Self {
        Self {
            default_value,
            cells: BTreeMap::new(),
            fill: PhantomData,
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Number of materialized columns, default-valued ones included.
    pub fn stored_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored columns in ascending order.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells::new(self.cells.iter())
    }

    pub fn iter_mut(&mut self) -> CellsMut<'_, T> {
        CellsMut::new(self.cells.iter_mut())
    }
}

impl<T: Clone, D> SparseRow<T, D> {
    /// Returns the cell at `col`, storing a copy of the default value first
    /// if the column was never accessed.
    ///
    /// This is the only way to read or write a cell, so reading an unset
    /// column materializes it. The occupied count is unaffected until a
    /// different value is written through the returned reference.
    pub fn access(&mut self, col: usize) -> &mut T {
        let default_value = &self.default_value;
        self.cells.entry(col).or_insert_with(|| {
            trace!(col, "materialized cell");
            default_value.clone()
        })
    }
}

impl<T: PartialEq, D> SparseRow<T, D> {
    /// Counts stored cells whose value differs from the default.
    ///
    /// Recomputed on every call: values may have changed through references
    /// returned by earlier calls to [`SparseRow::access`].
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Stored cells holding a non-default value, in ascending column order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.iter().filter(move |(_, value)| **value != self.default_value)
    }
}

impl<T, D: CellDefault<T>> Default for SparseRow<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

// Rows are equal when they read the same everywhere: materialized cells that
// still hold the default do not count.
impl<T: PartialEq, D> PartialEq for SparseRow<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.default_value == other.default_value && self.occupied().eq(other.occupied())
    }
}

impl<T: Eq, D> Eq for SparseRow<T, D> {}

impl<'a, T, D> IntoIterator for &'a SparseRow<T, D> {
    type Item = (usize, &'a T);
    type IntoIter = Cells<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, D> IntoIterator for &'a mut SparseRow<T, D> {
    type Item = (usize, &'a mut T);
    type IntoIter = CellsMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::cell_default!(MinusOne: i32 = -1);

    #[test]
    fn test_new_row_is_empty() {
        let row = SparseRow::<i32, MinusOne>::new();
        assert_eq!(row.occupied_count(), 0);
        assert_eq!(row.stored_count(), 0);
        assert_eq!(*row.default_value(), -1);
        assert!(row.iter().next().is_none());
    }

    #[test]
    fn test_read_materializes_without_occupying() {
        let mut row = SparseRow::<i32, MinusOne>::new();
        assert_eq!(*row.access(7), -1);
        assert_eq!(row.stored_count(), 1);
        assert_eq!(row.occupied_count(), 0);
    }

    #[test]
    fn test_write_and_reset() {
        let mut row = SparseRow::<i32>::new();
        *row.access(3) = 42;
        assert_eq!(row.occupied_count(), 1);
        assert_eq!(*row.access(3), 42);

        *row.access(3) = 0;
        assert_eq!(row.occupied_count(), 0);
        assert_eq!(row.stored_count(), 1);
    }

    #[test]
    fn test_count_follows_held_reference() {
        let mut row = SparseRow::<i32>::new();
        let cell = row.access(10);
        *cell = 5;
        *cell += 1;
        assert_eq!(row.occupied_count(), 1);
        assert_eq!(*row.access(10), 6);
    }

    #[test]
    fn test_explicit_default() {
        let mut row = SparseRow::<String>::with_default("x".to_string());
        assert_eq!(row.access(usize::MAX), "x");
        row.access(1).push('y');
        assert_eq!(row.occupied_count(), 1);
        assert_eq!(row.occupied().collect::<Vec<_>>(), vec![(1, &"xy".to_string())]);
    }

    #[test]
    fn test_iteration_is_ascending_and_restartable() {
        let mut row = SparseRow::<i32>::new();
        for col in [9, 2, 5, 0] {
            *row.access(col) = col as i32 + 1;
        }
        row.access(4);

        let first: Vec<_> = row.iter().collect();
        let second: Vec<_> = (&row).into_iter().collect();
        assert_eq!(first, vec![(0, &1), (2, &3), (4, &0), (5, &6), (9, &10)]);
        assert_eq!(first, second);
        assert_eq!(row.stored_count(), 5);
    }

    #[test]
    fn test_iter_mut_edits_stored_cells() {
        let mut row = SparseRow::<i32>::new();
        *row.access(1) = 1;
        row.access(2);
        for (_, value) in &mut row {
            *value *= 10;
        }
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![(1, &10), (2, &0)]);
        assert_eq!(row.occupied_count(), 1);
    }

    #[test]
    fn test_equality_ignores_default_cells() {
        let mut left = SparseRow::<i32>::new();
        let mut right = SparseRow::<i32>::new();
        *left.access(4) = 8;
        *right.access(4) = 8;
        right.access(100);
        assert_eq!(left, right);

        *right.access(100) = 1;
        assert_ne!(left, right);
        assert_ne!(SparseRow::<i32>::new(), SparseRow::<i32>::with_default(1));
    }
}
