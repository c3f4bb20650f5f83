//! Serialization to the matrix text format

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};

/// Renders a matrix as text
///
/// The header lines come first, followed by one `(row, col, value)` line per
/// nonzero in ascending `(row, col)` order. Lines are joined with `\n` and
/// there is no trailing newline.
pub fn to_text<T: Element>(matrix: &SparseMatrix<T>) -> String {
    matrix.to_string()
}

/// Writes the text form of `matrix` to `writer`
pub fn write_to<T: Element, W: Write>(matrix: &SparseMatrix<T>, mut writer: W) -> io::Result<()> {
    write!(writer, "{}", matrix)?;
    writer.flush()
}

/// Writes the text form of `matrix` to a file, replacing any existing content
pub fn to_file<T: Element>(matrix: &SparseMatrix<T>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    write_to(matrix, BufWriter::new(file)).map_err(write_error)?;

    debug!(path = %path.display(), nnz = matrix.nnz(), "wrote matrix file");
    Ok(())
}

impl<T: Element> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows={}\ncols={}", self.num_rows(), self.num_cols())?;
        for ((row, col), value) in self.iter() {
            write!(f, "\n({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }
}
