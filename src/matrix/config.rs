//! Configuration for matrix operations

use std::str::FromStr;

/// How multiplication distributes work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplyStrategy {
    /// Always run on the calling thread
    Sequential,
    /// Always process rows of the left operand on a rayon pool
    Parallel,
    /// Go parallel once the left operand reaches `parallel_threshold` nonzeros
    Auto,
}

impl FromStr for MultiplyStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(MultiplyStrategy::Sequential),
            "parallel" | "par" => Ok(MultiplyStrategy::Parallel),
            "auto" => Ok(MultiplyStrategy::Auto),
            other => Err(format!("unknown multiply strategy '{}'", other)),
        }
    }
}

/// Configuration for matrix operations
#[derive(Debug, Clone)]
pub struct OpsConfig {
    /// Work distribution for multiplication
    pub strategy: MultiplyStrategy,

    /// Minimum nonzeros in the left operand before `Auto` goes parallel
    pub parallel_threshold: usize,

    /// Number of threads to use for parallel multiplication
    pub n_threads: usize,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            strategy: MultiplyStrategy::Auto,
            parallel_threshold: 4096,
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

impl OpsConfig {
    /// Create a config that never leaves the calling thread
    pub fn sequential() -> Self {
        Self {
            strategy: MultiplyStrategy::Sequential,
            ..Self::default()
        }
    }

    /// Create a config that always multiplies in parallel on `n_threads` threads
    pub fn parallel(n_threads: usize) -> Self {
        Self {
            strategy: MultiplyStrategy::Parallel,
            n_threads: n_threads.max(1),
            ..Self::default()
        }
    }

    /// Whether a multiplication with `nnz` nonzeros on the left should go parallel
    pub fn use_parallel(&self, nnz: usize) -> bool {
        match self.strategy {
            MultiplyStrategy::Sequential => false,
            MultiplyStrategy::Parallel => true,
            MultiplyStrategy::Auto => self.n_threads > 1 && nnz >= self.parallel_threshold,
        }
    }
}
