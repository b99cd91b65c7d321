//! API handler
//!
//! Dispatches parsed requests to the document store behind a single mutex.
//! The mutex realizes the serialized-invocation guarantee the index counter
//! depends on: no two operations ever interleave against one ledger handled
//! by the same handler.

use std::sync::Mutex;

use serde_json::json;

use crate::document::DocumentStore;
use crate::index::document_key;
use crate::ledger::KeyValueStore;
use crate::observability::{Logger, Severity};
use crate::page::select;

use super::errors::{ApiError, ApiResult};
use super::request::{AppendRequest, FetchOneRequest, FetchPageRequest, PutRequest, Request};
use super::response::Response;

/// Request dispatcher with a global execution lock.
///
/// The ledger handle is passed into each call rather than owned, so one
/// handler can serve any store the caller manages.
#[derive(Default)]
pub struct ApiHandler {
    lock: Mutex<()>,
}

impl ApiHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a raw JSON request string against `ledger`.
    pub fn handle<S: KeyValueStore>(&self, json_request: &str, ledger: &mut S) -> Response {
        // Serialize all operations for the duration of the request
        let _guard = self.lock.lock().expect("api lock poisoned");

        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => {
                Logger::log(
                    Severity::Warn,
                    "request_rejected",
                    &[("code", e.code()), ("message", e.message())],
                );
                return Response::error(&e);
            }
        };

        let result = match request {
            Request::Append(r) => self.handle_append(r, ledger),
            Request::Put(r) => self.handle_put(r, ledger),
            Request::FetchOne(r) => self.handle_fetch_one(r, ledger),
            Request::FetchPage(r) => self.handle_fetch_page(r, ledger),
        };

        match result {
            Ok(response) => response,
            Err(e) => {
                Logger::log(
                    Severity::Error,
                    "operation_failed",
                    &[("code", e.code()), ("message", e.message())],
                );
                Response::error(&e)
            }
        }
    }

    /// Indexed document write: raw value, counter advance, metadata entry.
    fn handle_append<S: KeyValueStore>(
        &self,
        req: AppendRequest,
        ledger: &mut S,
    ) -> ApiResult<Response> {
        log_op("append", &[("key", &req.key)], req.log_info.as_deref());

        let mut store = DocumentStore::new(ledger);
        let index = store
            .append(&req.key, req.value.as_bytes(), &req.metadata)
            .map_err(ApiError::from_document_error)?;

        Ok(Response::success(json!({
            "key": req.key,
            "index": index,
            "document_key": document_key(index),
        })))
    }

    /// Plain record write; the document index is not touched.
    fn handle_put<S: KeyValueStore>(&self, req: PutRequest, ledger: &mut S) -> ApiResult<Response> {
        log_op("put", &[("key", &req.key)], req.log_info.as_deref());

        let mut store = DocumentStore::new(ledger);
        store
            .put_record(&req.key, req.value.as_bytes())
            .map_err(ApiError::from_document_error)?;

        Ok(Response::success(json!({ "key": req.key })))
    }

    /// Single-key read. Absence is a structured not-found, never an error.
    fn handle_fetch_one<S: KeyValueStore>(
        &self,
        req: FetchOneRequest,
        ledger: &mut S,
    ) -> ApiResult<Response> {
        log_op("fetch_one", &[("key", &req.key)], req.log_info.as_deref());

        let store = DocumentStore::new(ledger);
        match store.fetch(&req.key).map_err(ApiError::from_document_error)? {
            Some(value) => Ok(Response::success(json!({
                "key": req.key,
                "value": String::from_utf8_lossy(&value),
            }))),
            None => Ok(Response::not_found(req.key)),
        }
    }

    /// Paginated read of the document metadata sequence.
    fn handle_fetch_page<S: KeyValueStore>(
        &self,
        req: FetchPageRequest,
        ledger: &mut S,
    ) -> ApiResult<Response> {
        let page = req.page_number.to_string();
        log_op("fetch_page", &[("page_number", &page)], req.log_info.as_deref());

        let store = DocumentStore::new(ledger);
        let total = store.count().map_err(ApiError::from_document_error)?;

        let range = select(req.page_number, req.page_size, total);
        let documents = store
            .range(range.start, range.end)
            .map_err(ApiError::from_document_error)?;

        Ok(Response::success(json!({
            "documents": documents,
            "total": total,
        })))
    }
}

/// Log one operation, attaching the caller's decoded audit payload if given.
fn log_op(event: &str, fields: &[(&str, &str)], log_info: Option<&str>) {
    match log_info {
        Some(info) => {
            let mut all = fields.to_vec();
            all.push(("log_info", info));
            Logger::log(Severity::Info, event, &all);
        }
        None => Logger::log(Severity::Info, event, fields),
    }
}
