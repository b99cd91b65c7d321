//! API error types
//!
//! API errors are pass-through: they preserve the original error codes
//! from lower subsystems (ledger, index, document store). Only boundary
//! validation produces codes of its own.

use std::fmt;

use crate::document::DocumentError;

/// API error severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Recoverable error
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

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Malformed request or invalid argument
    InvalidRequest,
    /// Unknown operation name
    UnknownOperation,
    /// Pass-through from a lower subsystem
    PassThrough,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "API_INVALID_REQUEST",
            ApiErrorCode::UnknownOperation => "API_UNKNOWN_OPERATION",
            ApiErrorCode::PassThrough => "PASS_THROUGH",
        }
    }
}

/// API error with preserved subsystem error information
#[derive(Debug)]
pub struct ApiError {
    /// Original code string (from a subsystem, or an API boundary code)
    code: String,
    message: String,
    severity: Severity,
}

impl ApiError {
    /// Malformed request or invalid argument at the boundary
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::InvalidRequest.code().to_string(),
            message: reason.into(),
            severity: Severity::Error,
        }
    }

    /// Unknown operation name
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::UnknownOperation.code().to_string(),
            message: format!("unknown operation: {}", op.into()),
            severity: Severity::Error,
        }
    }

    /// Pass a document store error through with its code intact
    pub fn from_document_error(err: DocumentError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            severity: if err.is_fatal() {
                Severity::Fatal
            } else {
                Severity::Error
            },
        }
    }

    /// Returns the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        matches!(self.severity, Severity::Fatal)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentError;

    #[test]
    fn test_invalid_request_error() {
        let err = ApiError::invalid_request("missing key");
        assert_eq!(err.code(), "API_INVALID_REQUEST");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_unknown_operation_error() {
        let err = ApiError::unknown_operation("dropLedger");
        assert_eq!(err.code(), "API_UNKNOWN_OPERATION");
        assert!(err.message().contains("dropLedger"));
    }

    #[test]
    fn test_passthrough_preserves_code_and_severity() {
        let err = ApiError::from_document_error(DocumentError::MissingEntry { index: 2 });
        assert_eq!(err.code(), "DOC_MISSING_ENTRY");
        assert!(err.is_fatal());
    }
}
