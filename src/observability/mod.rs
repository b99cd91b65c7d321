//! Observability for docledger
//!
//! Structured, synchronous JSON logging. One line per event, deterministic
//! field ordering, no buffering.

mod logger;

pub use logger::{Logger, Severity};
