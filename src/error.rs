//! Crate-wide error and result types.

use thiserror::Error;

/// Errors produced by table construction, resizing, and the word counter.
#[derive(Debug, Error)]
pub enum Error {
    /// A table needs at least one bucket; zero was requested.
    #[error("invalid capacity {0}: a table needs at least one bucket")]
    InvalidCapacity(usize),

    /// Reading from the text source failed.
    #[error("failed to read text source: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table and word-counting operations.
pub type Result<T> = std::result::Result<T, Error>;
