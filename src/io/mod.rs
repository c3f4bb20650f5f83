//! Text format input and output

pub mod parser;
pub mod writer;

pub use parser::{from_file, from_text};
pub use writer::{to_file, to_text, write_to};

use std::path::Path;

use crate::error::Result;
use crate::matrix::{Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Parses a matrix from its text form
    pub fn from_text(text: &str) -> Result<Self> {
        from_text(text)
    }

    /// Reads and parses a matrix file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        from_file(path)
    }

    /// Renders the matrix in the text format
    pub fn to_text(&self) -> String {
        to_text(self)
    }

    /// Writes the text form to a file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        to_file(self, path)
    }
}
