//! API request types
//!
//! JSON request parsing for all supported operations. The optional
//! `log_info` field is a base64 payload supplied by the caller for audit
//! logging; it is decoded here at the boundary and never stored.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};

/// Indexed document write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendRequest {
    pub key: String,
    pub value: String,
    pub metadata: String,
    #[serde(default)]
    pub log_info: Option<String>,
}

/// Plain record write, bypasses indexing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutRequest {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub log_info: Option<String>,
}

/// Single-key read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOneRequest {
    pub key: String,
    #[serde(default)]
    pub log_info: Option<String>,
}

/// Paginated read of the document sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchPageRequest {
    /// 1-based page number; zero or negative selects everything
    pub page_number: i64,
    /// Entries per page; zero or negative falls back to the default
    #[serde(default)]
    pub page_size: i64,
    #[serde(default)]
    pub log_info: Option<String>,
}

/// Unified request envelope
#[derive(Debug, Clone)]
pub enum Request {
    Append(AppendRequest),
    Put(PutRequest),
    FetchOne(FetchOneRequest),
    FetchPage(FetchPageRequest),
}

/// Raw request for parsing
#[derive(Debug, Clone, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    metadata: Option<String>,
    #[serde(default)]
    page_number: Option<i64>,
    #[serde(default)]
    page_size: Option<i64>,
    #[serde(default)]
    log_info: Option<String>,
}

impl Request {
    /// Parse a request from a JSON string.
    ///
    /// All argument validation happens here: missing fields, non-integer
    /// page arguments (rejected by JSON deserialization), and undecodable
    /// log_info all fail with `API_INVALID_REQUEST` before any store access.
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("invalid JSON: {}", e)))?;

        let log_info = decode_log_info(raw.log_info.as_deref())?;

        match raw.op.as_str() {
            "append" => Ok(Request::Append(AppendRequest {
                key: require(raw.key, "key")?,
                value: require(raw.value, "value")?,
                metadata: require(raw.metadata, "metadata")?,
                log_info,
            })),
            "put" => Ok(Request::Put(PutRequest {
                key: require(raw.key, "key")?,
                value: require(raw.value, "value")?,
                log_info,
            })),
            "fetch_one" => Ok(Request::FetchOne(FetchOneRequest {
                key: require(raw.key, "key")?,
                log_info,
            })),
            "fetch_page" => Ok(Request::FetchPage(FetchPageRequest {
                page_number: require(raw.page_number, "page_number")?,
                page_size: raw.page_size.unwrap_or(0),
                log_info,
            })),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}

fn require<T>(field: Option<T>, name: &str) -> ApiResult<T> {
    field.ok_or_else(|| ApiError::invalid_request(format!("missing {}", name)))
}

/// Decode the base64 audit payload into text, if present.
fn decode_log_info(raw: Option<&str>) -> ApiResult<Option<String>> {
    match raw {
        None => Ok(None),
        Some(encoded) => {
            let bytes = STANDARD
                .decode(encoded)
                .map_err(|e| ApiError::invalid_request(format!("log_info is not valid base64: {}", e)))?;
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        }
    }
}

#[cfg(test)]
impl Request {
    fn op_name(&self) -> &'static str {
        match self {
            Request::Append(_) => "append",
            Request::Put(_) => "put",
            Request::FetchOne(_) => "fetch_one",
            Request::FetchPage(_) => "fetch_page",
        }
    }
}
