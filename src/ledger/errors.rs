//! Ledger error types
//!
//! Error codes:
//! - LEDGER_UNAVAILABLE (ERROR severity) - an underlying read failed
//! - LEDGER_WRITE_FAILED (ERROR severity) - a put was rejected
//! - LEDGER_CORRUPTION (FATAL severity) - the record log failed validation

use std::fmt;
use std::io;

/// Severity levels for ledger errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, process continues
    Error,
    /// The ledger must not be served from
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Ledger-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerErrorCode {
    /// An underlying get failed
    Unavailable,
    /// A put was not applied
    WriteFailed,
    /// The on-disk record log failed checksum or framing validation
    Corruption,
}

impl LedgerErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            LedgerErrorCode::Unavailable => "LEDGER_UNAVAILABLE",
            LedgerErrorCode::WriteFailed => "LEDGER_WRITE_FAILED",
            LedgerErrorCode::Corruption => "LEDGER_CORRUPTION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            LedgerErrorCode::Unavailable => Severity::Error,
            LedgerErrorCode::WriteFailed => Severity::Error,
            LedgerErrorCode::Corruption => Severity::Fatal,
        }
    }
}

impl fmt::Display for LedgerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Ledger error carrying the key or offset needed to diagnose the failure
#[derive(Debug)]
pub struct LedgerError {
    code: LedgerErrorCode,
    message: String,
    details: Option<String>,
    source: Option<io::Error>,
}

impl LedgerError {
    /// An underlying read failed
    pub fn unavailable(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: LedgerErrorCode::Unavailable,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// A put was rejected; carries the offending key
    pub fn write_failed(key: &str, source: io::Error) -> Self {
        Self {
            code: LedgerErrorCode::WriteFailed,
            message: format!("failed to write key '{}'", key),
            details: Some(format!("key: {}", key)),
            source: Some(source),
        }
    }

    /// Record log corruption detected during replay or decode
    pub fn corruption(reason: impl Into<String>) -> Self {
        Self {
            code: LedgerErrorCode::Corruption,
            message: reason.into(),
            details: None,
            source: None,
        }
    }

    /// Corruption with the byte offset where validation failed
    pub fn corruption_at_offset(offset: u64, reason: impl Into<String>) -> Self {
        Self {
            code: LedgerErrorCode::Corruption,
            message: reason.into(),
            details: Some(format!("byte_offset: {}", offset)),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> LedgerErrorCode {
        self.code
    }

    /// Returns the string code
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns whether this error means the ledger must not be served from
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
