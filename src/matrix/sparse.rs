//! Coordinate-keyed sparse matrix implementation

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::matrix::Element;

/// A sparse integer matrix keyed by `(row, col)` coordinates
///
/// Only nonzero cells are stored: writing `0` to a cell removes its entry, so
/// the memory footprint follows the number of nonzeros rather than
/// `num_rows × num_cols`. Keys are kept in ascending `(row, col)` order, which
/// gives row-major iteration and cheap access to a single row.
///
/// The shape is fixed at construction. Operations that produce a different
/// shape return a new matrix.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    num_rows: usize,
    num_cols: usize,
    entries: BTreeMap<(usize, usize), T>,
}

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: BTreeMap::new(),
        }
    }

    /// Creates an all-zero matrix with the given dimensions
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self::new(num_rows, num_cols)
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let entries = (0..n).map(|i| ((i, i), T::one())).collect();

        Self {
            num_rows: n,
            num_cols: n,
            entries,
        }
    }

    /// Builds a matrix from already validated entries, dropping zeros
    pub(crate) fn from_entries(
        num_rows: usize,
        num_cols: usize,
        mut entries: BTreeMap<(usize, usize), T>,
    ) -> Self {
        entries.retain(|_, v| !v.is_zero());
        debug_assert!(entries
            .keys()
            .all(|&(r, c)| r < num_rows && c < num_cols));

        Self {
            num_rows,
            num_cols,
            entries,
        }
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(num_rows, num_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns the number of stored (nonzero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Writes a cell
    ///
    /// A zero value removes the entry if present. Coordinates outside the
    /// matrix shape are rejected with [`Error::IndexOutOfBounds`] and leave the
    /// matrix untouched.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }

        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }

        Ok(())
    }

    /// Reads a cell, returning zero for cells without an entry
    ///
    /// Out-of-range coordinates can never hold an entry, so they read as zero
    /// as well.
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    /// Iterates over nonzero entries in ascending `(row, col)` order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        self.entries.iter().map(|(&key, &val)| (key, val))
    }

    /// Iterates over the nonzero entries of one row as `(col, value)` pairs
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries
            .range((row, 0)..=(row, usize::MAX))
            .map(|(&(_, col), &val)| (col, val))
    }

    pub(crate) fn entries(&self) -> &BTreeMap<(usize, usize), T> {
        &self.entries
    }
}

impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.num_rows, self.num_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_entries_to_print = 10.min(self.nnz());

        if max_entries_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for ((row, col), val) in self.iter().take(max_entries_to_print) {
                writeln!(f, "    ({}, {}) = {:?}", row, col, val)?;
            }

            if self.nnz() > max_entries_to_print {
                writeln!(f, "    ... ({} more)", self.nnz() - max_entries_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
