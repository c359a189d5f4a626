/// Names the value every never-written cell of a row or matrix reads as.
///
/// Implementors are zero-sized markers carried as a type parameter, so the
/// default is part of the container's type the same way a constant template
/// argument would be.
pub trait CellDefault<T> {
    fn value() -> T;
}

/// Marker for the canonical default of any `T: Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeDefault;

impl<T: Default> CellDefault<T> for TypeDefault {
    fn value() -> T {
        T::default()
    }
}

/// Declares a marker type whose default value is a constant expression.
///
/// ```
/// infimat::cell_default!(pub MinusOne: i32 = -1);
///
/// let mut matrix = infimat::SparseMatrix::<i32, MinusOne>::new();
/// assert_eq!(*matrix.cell(0, 0), -1);
/// ```
#[macro_export]
macro_rules! cell_default {
    ($vis:vis $name:ident: $ty:ty = $value:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $name;

        impl $crate::CellDefault<$ty> for $name {
            fn value() -> $ty {
                $value
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::cell_default!(Half: f64 = 0.5);
    crate::cell_default!(Blank: String = String::from("-"));

    #[test]
    fn test_type_default() {
        assert_eq!(<TypeDefault as CellDefault<i32>>::value(), 0);
        assert_eq!(<TypeDefault as CellDefault<String>>::value(), "");
        assert_eq!(<TypeDefault as CellDefault<Option<u8>>>::value(), None);
    }

    #[test]
    fn test_declared_default() {
        assert_eq!(<Half as CellDefault<f64>>::value(), 0.5);
        assert_eq!(<Blank as CellDefault<String>>::value(), "-");
    }
}
