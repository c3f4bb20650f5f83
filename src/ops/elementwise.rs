//! Entry-wise addition and subtraction
//!
//! Both walk the union of the operands' stored coordinates, so the cost is
//! proportional to `nnz(a) + nnz(b)` and independent of the matrix shape.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};

/// Computes `a + b`
pub fn add<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    combine(a, b, "addition", |x, y| x.checked_add(&y))
}

/// Computes `a - b`
pub fn subtract<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    combine(a, b, "subtraction", |x, y| x.checked_sub(&y))
}

fn combine<T, F>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    op: &'static str,
    f: F,
) -> Result<SparseMatrix<T>>
where
    T: Element,
    F: Fn(T, T) -> Option<T>,
{
    if a.shape() != b.shape() {
        return Err(Error::DimensionMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    debug!(op, shape = ?a.shape(), lhs_nnz = a.nnz(), rhs_nnz = b.nnz(), "combining matrices");

    let mut entries: BTreeMap<(usize, usize), T> = BTreeMap::new();
    let keys = a.entries().keys().chain(b.entries().keys());

    for &(row, col) in keys {
        if entries.contains_key(&(row, col)) {
            continue;
        }
        let value = f(a.get_element(row, col), b.get_element(row, col))
            .ok_or(Error::Overflow { op })?;
        entries.insert((row, col), value);
    }

    Ok(SparseMatrix::from_entries(a.num_rows(), a.num_cols(), entries))
}
