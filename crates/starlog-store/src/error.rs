//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Append with a height that does not extend the tail.
    #[error("out-of-order append: expected height {expected}, got {got}")]
    OutOfOrder { expected: u64, got: u64 },

    /// Invalid data in storage.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// I/O error from a durable backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
