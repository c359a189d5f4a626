//! Sparse, unbounded two-dimensional matrices.
//!
//! A [`SparseMatrix`] is indexed by arbitrary `(row, column)` pairs. Cells that
//! were never written read as the default value named by the fill marker `D`
//! and take no storage until they are first accessed.
//!
//! ```
//! use infimat::SparseMatrix;
//!
//! infimat::cell_default!(MinusOne: i32 = -1);
//!
//! let mut matrix = SparseMatrix::<i32, MinusOne>::new();
//! assert_eq!(*matrix.access(0).access(0), -1);
//! assert_eq!(matrix.occupied_count(), 0);
//!
//! *matrix.access(100).access(100) = 314;
//! assert_eq!(matrix.occupied_count(), 1);
//! ```

pub mod entry;
pub mod fill;
pub mod iter;
pub mod matrix;
pub mod row;

pub use entry::Entry;
pub use fill::{CellDefault, TypeDefault};
pub use matrix::SparseMatrix;
pub use row::SparseRow;
