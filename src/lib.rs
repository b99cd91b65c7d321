//! docledger - a document-indexing and pagination layer over a key-value ledger
//!
//! Records are written to a plain key/value namespace. Documents additionally
//! advance a global counter and store per-document metadata under
//! counter-derived keys, so the document sequence can later be read back in
//! insertion order, one page at a time.

pub mod api;
pub mod cli;
pub mod document;
pub mod index;
pub mod ledger;
pub mod observability;
pub mod page;
