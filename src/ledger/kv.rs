//! The key-value store seam
//!
//! Everything above the ledger (index counter, document store, api) is
//! written against this trait, so the substrate can be swapped between the
//! in-memory and file-backed implementations without touching the core.

use super::errors::LedgerResult;

/// Atomic string-keyed byte storage with read-your-writes visibility.
///
/// # Caller obligations
///
/// Implementations do not lock. The caller must serialize all operations
/// against one store instance; interleaving two counter-affecting writes
/// breaks the document index invariants.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`.
    ///
    /// Absence is a normal outcome (`Ok(None)`), not an error. `Err` means
    /// the store itself could not answer.
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// The write must be visible to every subsequent `get` on the same
    /// instance before this returns.
    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()>;
}
