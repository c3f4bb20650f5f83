//! Utilities for converting between our matrix format and external libraries

use std::collections::BTreeMap;

use ndarray::{Array2, ArrayView2};
use sprs::CsMat;

use crate::matrix::{Element, SparseMatrix};

/// Converts our matrix to sprs CsMat in CSR format
pub fn to_sprs<T: Element>(matrix: &SparseMatrix<T>) -> CsMat<T> {
    let mut indptr = Vec::with_capacity(matrix.num_rows() + 1);
    let mut indices = Vec::with_capacity(matrix.nnz());
    let mut data = Vec::with_capacity(matrix.nnz());

    indptr.push(0);
    for row in 0..matrix.num_rows() {
        for (col, val) in matrix.row_iter(row) {
            indices.push(col);
            data.push(val);
        }
        indptr.push(indices.len());
    }

    CsMat::new(matrix.shape(), indptr, indices, data)
}

/// Converts sprs CsMat (CSR or CSC) to our format
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T: Element>(matrix: CsMat<T>) -> SparseMatrix<T> {
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let mut entries = BTreeMap::new();

    for (row, vec) in matrix.outer_iterator().enumerate() {
        for (col, &val) in vec.iter() {
            entries.insert((row, col), val);
        }
    }

    SparseMatrix::from_entries(n_rows, n_cols, entries)
}

/// Expands our matrix into a dense ndarray
pub fn to_dense<T: Element>(matrix: &SparseMatrix<T>) -> Array2<T> {
    let mut dense = Array2::zeros(matrix.shape());
    for ((row, col), val) in matrix.iter() {
        dense[[row, col]] = val;
    }
    dense
}

/// Builds our matrix from the nonzero cells of a dense ndarray
pub fn from_dense<T: Element>(dense: ArrayView2<'_, T>) -> SparseMatrix<T> {
    let entries = dense
        .indexed_iter()
        .filter(|(_, val)| !val.is_zero())
        .map(|(key, &val)| (key, val))
        .collect();

    SparseMatrix::from_entries(dense.nrows(), dense.ncols(), entries)
}
