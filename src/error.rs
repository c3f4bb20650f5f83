//! Error types for spmatrix

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using spmatrix's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, combining or writing matrices
#[derive(Error, Debug)]
pub enum Error {
    /// The source file could not be opened or read
    #[error("File '{}' not found.", .path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The text does not follow the matrix file grammar
    #[error("Input file has wrong format (line {line}): {message}")]
    Format {
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("Matrix dimensions not compatible for {op}: {}x{} vs {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Shape of the left operand
        lhs: (usize, usize),
        /// Shape of the right operand
        rhs: (usize, usize),
    },

    /// A coordinate lies outside the matrix shape
    #[error("Index ({row}, {col}) out of bounds for {}x{} matrix", .shape.0, .shape.1)]
    IndexOutOfBounds {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
        /// Shape of the matrix
        shape: (usize, usize),
    },

    /// An intermediate or final value does not fit in the element type
    #[error("Integer overflow during {op}")]
    Overflow {
        /// The operation name
        op: &'static str,
    },

    /// A sized rayon thread pool could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Writing serialized output failed
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Error::Format {
            line,
            message: message.into(),
        }
    }
}
