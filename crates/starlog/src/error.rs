//! Error types for the ledger API.

use starlog_core::{Address, CoreError, Violation};
use starlog_store::StoreError;
use thiserror::Error;

/// Errors that can occur during chain and registry operations.
///
/// Query misses are not errors; lookups return `None`.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An integrity audit found violations; nothing was committed.
    #[error("chain corrupted: {} violation(s) found", .0.len())]
    ChainCorrupted(Vec<Violation>),

    /// Storage error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Payload encoding or decoding failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Challenge message does not parse as
    /// `<address>:<seconds>:starRegistry`.
    #[error("malformed challenge message: {0:?}")]
    InvalidMessageFormat(String),

    /// The challenge window has closed.
    #[error("challenge expired: {elapsed}s elapsed, window is {window}s")]
    ChallengeExpired { elapsed: i64, window: i64 },

    /// The signature did not verify against the message and address.
    #[error("signature verification failed for {address}")]
    InvalidSignature { address: Address },

    /// A claim submission was rejected by the chain.
    #[error("submission rejected: {0}")]
    SubmissionRejected(#[source] Box<LedgerError>),
}

impl LedgerError {
    /// The integrity violations behind this error, when it carries any.
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            LedgerError::ChainCorrupted(violations) => Some(violations),
            LedgerError::SubmissionRejected(inner) => inner.violations(),
            _ => None,
        }
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
