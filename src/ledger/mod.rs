//! Key-value ledger substrate for docledger
//!
//! The ledger is the persistence layer everything else builds on: an atomic
//! mapping from string keys to byte values with read-your-writes visibility
//! within one invocation.
//!
//! # Design Principles
//!
//! - The trait surface is get/put only; callers never delete or scan
//! - Implementations serialize each call (no internal concurrency)
//! - Failed calls abort the surrounding operation; nothing is retried here
//!
//! Two implementations ship with the crate: `MemoryLedger` for tests and
//! embedders, and `FileLedger`, an append-only checksummed record log that
//! backs the CLI.

mod errors;
mod file;
mod kv;
mod memory;
mod record;

pub use errors::{LedgerError, LedgerErrorCode, LedgerResult, Severity};
pub use file::FileLedger;
pub use kv::KeyValueStore;
pub use memory::MemoryLedger;
pub use record::LedgerRecord;
