//! Matrix arithmetic
//!
//! All operations read their operands without modifying them and return a
//! freshly built matrix. Shape incompatibilities surface as
//! [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) and
//! arithmetic leaving the element range as
//! [`Error::Overflow`](crate::Error::Overflow).

pub mod elementwise;
pub mod multiply;

pub use elementwise::{add, subtract};
pub use multiply::multiply;

use crate::error::Result;
use crate::matrix::{Element, OpsConfig, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Returns `self + other`
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    /// Returns `self - other`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        subtract(self, other)
    }

    /// Returns `self × other`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }

    /// Returns `self × other`, distributing work according to `config`
    pub fn multiply_with(&self, other: &Self, config: &OpsConfig) -> Result<Self> {
        crate::parallel::multiply_with(self, other, config)
    }
}
