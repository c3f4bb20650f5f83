//! Sequential sparse matrix multiplication

use std::collections::BTreeMap;

use num_traits::NumCast;
use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};

pub(crate) const OP: &str = "multiplication";

/// Checks that `a × b` is defined
pub(crate) fn check_inner_dims<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<()> {
    if a.num_cols() != b.num_rows() {
        return Err(Error::DimensionMismatch {
            op: OP,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Adds `v1 * v2` into the accumulator slot for `key`
///
/// Sums are kept in `i128` so a running total may leave the range of `T` as
/// long as the finished cell fits again.
#[inline]
pub(crate) fn accumulate<K: Ord, T: Element>(
    accum: &mut BTreeMap<K, i128>,
    key: K,
    v1: T,
    v2: T,
) -> Result<()> {
    let overflow = || Error::Overflow { op: OP };
    let product = v1
        .to_i128()
        .zip(v2.to_i128())
        .and_then(|(x, y)| x.checked_mul(y))
        .ok_or_else(overflow)?;
    let slot = accum.entry(key).or_insert(0);
    *slot = slot.checked_add(product).ok_or_else(overflow)?;
    Ok(())
}

/// Narrows finished sums back to `T`, dropping cells that cancelled to zero
pub(crate) fn finish<K: Ord, T: Element>(accum: BTreeMap<K, i128>) -> Result<BTreeMap<K, T>> {
    accum
        .into_iter()
        .filter(|&(_, sum)| sum != 0)
        .map(|(key, sum)| {
            <T as NumCast>::from(sum)
                .map(|value| (key, value))
                .ok_or(Error::Overflow { op: OP })
        })
        .collect()
}

/// Computes `a × b` on the calling thread
///
/// For every nonzero `a[i][k]` only the stored entries of row `k` of `b` are
/// visited, so the cost follows the number of nonzero products instead of
/// `nnz(a) × b.num_cols()`.
pub fn multiply<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    check_inner_dims(a, b)?;

    debug!(
        lhs = ?a.shape(),
        rhs = ?b.shape(),
        lhs_nnz = a.nnz(),
        rhs_nnz = b.nnz(),
        "multiplying matrices"
    );

    let mut accum = BTreeMap::new();

    for ((i, k), v1) in a.iter() {
        for (j, v2) in b.row_iter(k) {
            accumulate(&mut accum, (i, j), v1, v2)?;
        }
    }

    Ok(SparseMatrix::from_entries(a.num_rows(), b.num_cols(), finish(accum)?))
}
