//! Index error types

use thiserror::Error;

use crate::ledger::LedgerError;

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors raised by the document counter
#[derive(Debug, Error)]
pub enum IndexError {
    /// The counter key has never been seeded; the ledger is uninitialized
    #[error("document counter DOCUMENT_INDEX is not seeded")]
    CounterMissing,

    /// The stored counter is not a non-negative decimal integer.
    /// Fatal for the operation; never auto-repaired.
    #[error("document counter holds invalid value {raw:?}")]
    CorruptCounter { raw: String },

    /// The underlying ledger failed
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl IndexError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::CounterMissing => "INDEX_COUNTER_MISSING",
            IndexError::CorruptCounter { .. } => "INDEX_CORRUPT_COUNTER",
            IndexError::Ledger(e) => e.code_str(),
        }
    }

    /// Whether the error means the store must not be served from
    pub fn is_fatal(&self) -> bool {
        match self {
            IndexError::CounterMissing => false,
            IndexError::CorruptCounter { .. } => true,
            IndexError::Ledger(e) => e.is_fatal(),
        }
    }
}
