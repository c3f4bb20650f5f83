//! # spmatrix: sparse integer matrices
//!
//! A small algebra over sparse integer matrices stored as coordinate maps,
//! together with a line-oriented text format for reading and writing them.
//!
//! ## Overview
//!
//! - [`SparseMatrix`] stores only nonzero cells, keyed by `(row, col)`.
//!   Writing zero removes a cell, so memory follows the number of nonzeros.
//! - [`add`] and [`subtract`] walk the union of both operands' nonzeros.
//! - [`multiply()`] visits, for each nonzero `a[i][k]`, only the stored
//!   entries of row `k` of the right operand. [`multiply_parallel`] does the
//!   same with rows spread over a Rayon pool.
//! - [`from_text`]/[`from_file`] parse and [`to_text`] renders the format:
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 0, 1)
//! (1, 1, 2)
//! ```
//!
//! Every operation returns a [`Result`] carrying one of the [`Error`] kinds
//! instead of panicking on bad input.
//!
//! ## Usage
//!
//! ```
//! use spmatrix::SparseMatrix;
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0,0,1)\n(1,1,2)".parse().unwrap();
//! let b: SparseMatrix = "rows=2\ncols=2\n(0,0,3)\n(0,1,4)".parse().unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.to_text(), "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)");
//! ```

pub mod error;
pub mod io;
pub mod matrix;
pub mod ops;
pub mod parallel;
pub mod utils;

// Re-export primary components
pub use error::{Error, Result};
pub use io::{from_file, from_text, to_file, to_text, write_to};
pub use matrix::{Element, MultiplyStrategy, OpsConfig, SparseMatrix};
pub use ops::{add, multiply, subtract};
pub use parallel::{multiply_parallel, multiply_with};
pub use utils::{from_dense, from_sprs, to_dense, to_sprs};

/// Version information for the spmatrix library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
