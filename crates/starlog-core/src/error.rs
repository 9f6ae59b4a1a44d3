//! Error types for the core primitives.

use thiserror::Error;

/// Errors from payload encoding and decoding.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),
}
