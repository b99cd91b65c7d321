//! API response types
//!
//! Three response shapes: success (`status: "ok"`), not-found
//! (`status: "not_found"`, a normal outcome for single-key reads), and
//! error (`status: "error"` with the originating code). Keeping not-found
//! out of the error shape is deliberate: absent data and a failing store
//! must never look alike to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

/// Success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub data: Value,
}

impl SuccessResponse {
    pub fn new(data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("SuccessResponse serialization cannot fail")
    }
}

/// Not-found response for single-key reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub status: String,
    pub key: String,
}

impl NotFoundResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            status: "not_found".to_string(),
            key: key.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("NotFoundResponse serialization cannot fail")
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: "error".to_string(),
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("ErrorResponse serialization cannot fail")
    }
}

/// Unified response type
#[derive(Debug, Clone)]
pub enum Response {
    Success(SuccessResponse),
    NotFound(NotFoundResponse),
    Error(ErrorResponse),
}

impl Response {
    /// Create a success response
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse::new(data))
    }

    /// Create a not-found response
    pub fn not_found(key: impl Into<String>) -> Self {
        Response::NotFound(NotFoundResponse::new(key))
    }

    /// Create an error response
    pub fn error(err: &ApiError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        match self {
            Response::Success(r) => r.to_json(),
            Response::NotFound(r) => r.to_json(),
            Response::Error(r) => r.to_json(),
        }
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Check if this is a not-found response
    pub fn is_not_found(&self) -> bool {
        matches!(self, Response::NotFound(_))
    }

    /// Success payload, if any
    pub fn data(&self) -> Option<&Value> {
        match self {
            Response::Success(r) => Some(&r.data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let resp = Response::success(json!({"index": 3}));
        let json = resp.to_json();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"index\":3"));
    }

    #[test]
    fn test_not_found_is_not_error() {
        let resp = Response::not_found("absent-key");
        assert!(resp.is_not_found());
        assert!(!resp.is_success());

        let json = resp.to_json();
        assert!(json.contains("\"status\":\"not_found\""));
        assert!(json.contains("absent-key"));
        assert!(!json.contains("\"status\":\"error\""));
    }

    #[test]
    fn test_error_response() {
        let err = ApiError::invalid_request("bad page number");
        let resp = Response::error(&err);
        let json = resp.to_json();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("API_INVALID_REQUEST"));
    }
}
