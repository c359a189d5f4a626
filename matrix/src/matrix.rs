use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::entry::Entry;
use crate::fill::{CellDefault, TypeDefault};
use crate::iter::{Rows, RowsMut};
use crate::row::SparseRow;

/// A matrix unbounded in both directions that stores only the rows and
/// cells it has handed out.
///
/// Every row is created with the default value named by `D`.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T, D = TypeDefault> {
    rows: BTreeMap<usize, SparseRow<T, D>>,
}

impl<T, D> SparseMatrix<T, D> {
    pub fn new() -> Self {
        Self { rows: BTreeMap::new() }
    }

    /// Number of materialized rows, empty ones included.
    pub fn stored_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of materialized cells across all rows.
    pub fn stored_count(&self) -> usize {
        self.rows.values().map(SparseRow::stored_count).sum()
    }

    /// No rows materialized, empty ones included. A matrix whose rows were
    /// only accessed is not empty even though nothing in it is occupied.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> Rows<'_, T, D> {
        Rows::new(self.rows.iter())
    }

    pub fn iter_mut(&mut self) -> RowsMut<'_, T, D> {
        RowsMut::new(self.rows.iter_mut())
    }
}

impl<T, D: CellDefault<T>> SparseMatrix<T, D> {
    /// Returns the row at `row`, storing an empty one first if it was never
    /// accessed. The new row shows up in iteration even if none of its
    /// columns is ever touched.
    pub fn access(&mut self, row: usize) -> &mut SparseRow<T, D> {
        self.rows.entry(row).or_insert_with(|| {
            trace!(row, "materialized row");
            SparseRow::new()
        })
    }
}

impl<T: Clone, D: CellDefault<T>> SparseMatrix<T, D> {
    /// Shorthand for `self.access(row).access(col)`.
    pub fn cell(&mut self, row: usize, col: usize) -> &mut T {
        self.access(row).access(col)
    }
}

impl<T: PartialEq, D> SparseMatrix<T, D> {
    /// Sum of the occupied counts of all stored rows, recomputed per call.
    pub fn occupied_count(&self) -> usize {
        let count: usize = self.rows.values().map(SparseRow::occupied_count).sum();
        debug!(count, rows = self.rows.len(), "counted occupied cells");
        count
    }

    fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, cells)| cells.occupied().map(move |(col, value)| (row, col, value)))
    }
}

impl<T: Clone + PartialEq, D> SparseMatrix<T, D> {
    /// Occupied cells in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.occupied_cells().map(|(row, col, value)| Entry {
            row,
            col,
            value: value.clone(),
        })
    }
}

impl<T, D> Default for SparseMatrix<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, D: CellDefault<T>> SparseMatrix<T, D> {
    // Every stored row of `self` equals the row of `other` at the same index,
    // with a missing row standing in as `blank`.
    fn rows_match(&self, other: &Self, blank: &SparseRow<T, D>) -> bool {
        self.rows
            .iter()
            .all(|(row, cells)| cells == other.rows.get(row).unwrap_or(blank))
    }
}

// Row by row, so rows installed with their own default compare by it too.
impl<T: PartialEq, D: CellDefault<T>> PartialEq for SparseMatrix<T, D> {
    fn eq(&self, other: &Self) -> bool {
        let blank = SparseRow::new();
        self.rows_match(other, &blank) && other.rows_match(self, &blank)
    }
}

impl<T: Eq, D: CellDefault<T>> Eq for SparseMatrix<T, D> {}

impl<T: Clone, D: CellDefault<T>> Extend<(usize, usize, T)> for SparseMatrix<T, D> {
    fn extend<I: IntoIterator<Item = (usize, usize, T)>>(&mut self, iter: I) {
        for (row, col, value) in iter {
            *self.cell(row, col) = value;
        }
    }
}

impl<T: Clone, D: CellDefault<T>> FromIterator<(usize, usize, T)> for SparseMatrix<T, D> {
    fn from_iter<I: IntoIterator<Item = (usize, usize, T)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        matrix.extend(iter);
        matrix
    }
}

impl<'a, T, D> IntoIterator for &'a SparseMatrix<T, D> {
    type Item = (usize, &'a SparseRow<T, D>);
    type IntoIter = Rows<'a, T, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, D> IntoIterator for &'a mut SparseMatrix<T, D> {
    type Item = (usize, &'a mut SparseRow<T, D>);
    type IntoIter = RowsMut<'a, T, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
