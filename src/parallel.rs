//! # Parallel sparse matrix multiplication
//!
//! Rows of the left operand are independent, so they are processed with
//! Rayon and stitched back together in row order.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::Result;
use crate::matrix::{Element, OpsConfig, SparseMatrix};
use crate::ops::multiply::{accumulate, check_inner_dims, finish, multiply};

/// Computes `a × b`, processing rows of `a` in parallel
///
/// Each output row is accumulated by exactly one task and rows are merged in
/// ascending order, so the result is identical to [`multiply`].
///
/// # Examples
///
/// ```
/// use spmatrix::{SparseMatrix, multiply_parallel};
///
/// let mut a = SparseMatrix::<i64>::new(2, 2);
/// a.set_element(0, 0, 1).unwrap();
/// a.set_element(1, 1, 1).unwrap();
///
/// let mut b = SparseMatrix::<i64>::new(2, 2);
/// b.set_element(0, 0, 2).unwrap();
/// b.set_element(1, 1, 2).unwrap();
///
/// let c = multiply_parallel(&a, &b).unwrap();
/// assert_eq!(c.get_element(0, 0), 2);
/// assert_eq!(c.get_element(1, 1), 2);
/// ```
pub fn multiply_parallel<T: Element>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    check_inner_dims(a, b)?;

    // 1. Group the nonzeros of A by row (iteration is already row-major)
    let mut rows: Vec<(usize, Vec<(usize, T)>)> = Vec::new();
    for ((i, k), v) in a.iter() {
        match rows.last_mut() {
            Some((row, items)) if *row == i => items.push((k, v)),
            _ => rows.push((i, vec![(k, v)])),
        }
    }

    debug!(
        lhs = ?a.shape(),
        rhs = ?b.shape(),
        active_rows = rows.len(),
        threads = rayon::current_num_threads(),
        "multiplying matrices in parallel"
    );

    // 2. Multiply each row independently
    let row_results: Vec<(usize, BTreeMap<usize, T>)> = rows
        .into_par_iter()
        .map(|(i, items)| -> Result<(usize, BTreeMap<usize, T>)> {
            let mut accum = BTreeMap::new();
            for (k, v1) in items {
                for (j, v2) in b.row_iter(k) {
                    accumulate(&mut accum, j, v1, v2)?;
                }
            }
            Ok((i, finish(accum)?))
        })
        .collect::<Result<_>>()?;

    // 3. Assemble the result in row order
    let entries = row_results
        .into_iter()
        .flat_map(|(i, accum)| accum.into_iter().map(move |(j, v)| ((i, j), v)))
        .collect();

    Ok(SparseMatrix::from_entries(a.num_rows(), b.num_cols(), entries))
}

/// Computes `a × b` using the strategy selected by `config`
///
/// Parallel runs use a dedicated pool sized by `config.n_threads`.
pub fn multiply_with<T: Element>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &OpsConfig,
) -> Result<SparseMatrix<T>> {
    if !config.use_parallel(a.nnz()) {
        trace!(strategy = ?config.strategy, nnz = a.nnz(), "sequential multiply");
        return multiply(a, b);
    }

    trace!(strategy = ?config.strategy, threads = config.n_threads, "parallel multiply");
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.n_threads)
        .build()?;

    pool.install(|| multiply_parallel(a, b))
}
