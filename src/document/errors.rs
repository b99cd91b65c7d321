//! Document store error types

use thiserror::Error;

use crate::index::IndexError;
use crate::ledger::LedgerError;

/// Result type for document store operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised by document store operations
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A gap in the DOCUMENT-* sequence was found during a range read.
    /// Signals prior corruption, not an empty result.
    #[error("missing document entry DOCUMENT-{index}")]
    MissingEntry { index: u64 },

    /// The index counter failed
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The underlying ledger failed
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl DocumentError {
    /// Returns the string code, preserving lower-layer codes unchanged
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::MissingEntry { .. } => "DOC_MISSING_ENTRY",
            DocumentError::Index(e) => e.code(),
            DocumentError::Ledger(e) => e.code_str(),
        }
    }

    /// Whether the error means the store must not be served from
    pub fn is_fatal(&self) -> bool {
        match self {
            // A gap is upstream corruption of the indexed namespace
            DocumentError::MissingEntry { .. } => true,
            DocumentError::Index(e) => e.is_fatal(),
            DocumentError::Ledger(e) => e.is_fatal(),
        }
    }
}
