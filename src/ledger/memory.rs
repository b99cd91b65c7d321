//! In-memory ledger
//!
//! Deterministic (BTreeMap-backed) implementation used by tests and by
//! embedders that manage persistence themselves. Never fails.

use std::collections::BTreeMap;

use super::errors::LedgerResult;
use super::kv::KeyValueStore;

/// A ledger held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove a key, returning its value if present.
    ///
    /// Not part of the `KeyValueStore` trait: the core never deletes.
    /// This exists so tests can inject gaps into the document sequence.
    pub fn remove(&mut self, key: &str) -> Option<Vec<u8>> {
        self.entries.remove(key)
    }
}

impl KeyValueStore for MemoryLedger {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
