use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An occupied cell detached from its matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

// Row, column and value written back to back, e.g. `100100314`.
impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.row, self.col, self.value)
    }
}
