// Matrix data structures and configuration

pub mod config;
pub mod element;
pub mod sparse;

pub use config::{MultiplyStrategy, OpsConfig};
pub use element::Element;
pub use sparse::SparseMatrix;
