//! Document store subsystem
//!
//! Composes the ledger and the index counter: plain record writes, indexed
//! document appends, single-key fetches, and ordered range reads of the
//! document metadata sequence.

mod errors;
mod store;

pub use errors::{DocumentError, DocumentResult};
pub use store::DocumentStore;
