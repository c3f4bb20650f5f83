//! Cell value bound for sparse matrices

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{PrimInt, Signed};

/// Values that can be stored in a [`SparseMatrix`](crate::SparseMatrix)
///
/// Any signed primitive integer qualifies. Entries and the accumulation of
/// products share the same width, so overflow is reported against `T` itself.
pub trait Element:
    PrimInt + Signed + FromStr + Display + Debug + Default + Send + Sync + 'static
{
}

impl<T> Element for T where
    T: PrimInt + Signed + FromStr + Display + Debug + Default + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_element<T: Element>() {}

    #[test]
    fn test_signed_integers_are_elements() {
        assert_element::<i8>();
        assert_element::<i32>();
        assert_element::<i64>();
        assert_element::<i128>();
        assert_element::<isize>();
    }
}
