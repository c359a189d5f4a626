use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::row::SparseRow;

/// Stored cells of a row as `(column, value)`.
#[derive(Debug, Clone)]
pub struct Cells<'a, T> {
    inner: btree_map::Iter<'a, usize, T>,
}

impl<'a, T> Cells<'a, T> {
    pub(crate) fn new(inner: btree_map::Iter<'a, usize, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&col, value)| (col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Cells<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&col, value)| (col, value))
    }
}

impl<T> ExactSizeIterator for Cells<'_, T> {}
impl<T> FusedIterator for Cells<'_, T> {}

#[derive(Debug)]
pub struct CellsMut<'a, T> {
    inner: btree_map::IterMut<'a, usize, T>,
}

impl<'a, T> CellsMut<'a, T> {
    pub(crate) fn new(inner: btree_map::IterMut<'a, usize, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for CellsMut<'a, T> {
    type Item = (usize, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&col, value)| (col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for CellsMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&col, value)| (col, value))
    }
}

impl<T> ExactSizeIterator for CellsMut<'_, T> {}
impl<T> FusedIterator for CellsMut<'_, T> {}

/// Stored rows of a matrix as `(row, row contents)`.
#[derive(Debug, Clone)]
pub struct Rows<'a, T, D> {
    inner: btree_map::Iter<'a, usize, SparseRow<T, D>>,
}

impl<'a, T, D> Rows<'a, T, D> {
    pub(crate) fn new(inner: btree_map::Iter<'a, usize, SparseRow<T, D>>) -> Self {
        Self { inner }
    }
}

impl<'a, T, D> Iterator for Rows<'a, T, D> {
    type Item = (usize, &'a SparseRow<T, D>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&row, cells)| (row, cells))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, D> DoubleEndedIterator for Rows<'_, T, D> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&row, cells)| (row, cells))
    }
}

impl<T, D> ExactSizeIterator for Rows<'_, T, D> {}
impl<T, D> FusedIterator for Rows<'_, T, D> {}

#[derive(Debug)]
pub struct RowsMut<'a, T, D> {
    inner: btree_map::IterMut<'a, usize, SparseRow<T, D>>,
}

impl<'a, T, D> RowsMut<'a, T, D> {
    pub(crate) fn new(inner: btree_map::IterMut<'a, usize, SparseRow<T, D>>) -> Self {
        Self { inner }
    }
}

impl<'a, T, D> Iterator for RowsMut<'a, T, D> {
    type Item = (usize, &'a mut SparseRow<T, D>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&row, cells)| (row, cells))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, D> DoubleEndedIterator for RowsMut<'_, T, D> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&row, cells)| (row, cells))
    }
}

impl<T, D> ExactSizeIterator for RowsMut<'_, T, D> {}
impl<T, D> FusedIterator for RowsMut<'_, T, D> {}
