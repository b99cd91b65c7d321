//! API Layer for docledger
//!
//! Orchestrates the document store behind a single mutex and a JSON
//! request/response envelope.
//!
//! # Design Principles
//!
//! - One mutex serializes all operations against one ledger
//! - Lower-layer error codes pass through unchanged
//! - "Not found" is a structured outcome, never an error
//!
//! # Supported Operations
//!
//! - append (indexed document write)
//! - put (plain record write, bypasses indexing)
//! - fetch_one (single-key read)
//! - fetch_page (paginated read of the document sequence)

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::ApiHandler;
pub use request::{AppendRequest, FetchOneRequest, FetchPageRequest, PutRequest, Request};
pub use response::{ErrorResponse, NotFoundResponse, Response, SuccessResponse};
