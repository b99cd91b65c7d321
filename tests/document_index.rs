//! Integration tests for document indexing
//!
//! Exercises the counter and the indexed metadata sequence end to end:
//! indices are assigned monotonically starting at 1, the sequence has no
//! gaps, and a gap introduced from outside is detected rather than papered
//! over.

use docledger::document::{DocumentError, DocumentStore};
use docledger::index::{document_key, IndexCounter, COUNTER_KEY};
use docledger::ledger::{KeyValueStore, MemoryLedger};

fn seeded_ledger() -> MemoryLedger {
    let mut ledger = MemoryLedger::new();
    IndexCounter::seed(&mut ledger, 0).unwrap();
    ledger
}

#[test]
fn test_indices_are_monotonic_from_one() {
    let mut ledger = seeded_ledger();
    let mut store = DocumentStore::new(&mut ledger);

    let mut assigned = Vec::new();
    for i in 0..20u64 {
        let idx = store
            .append(&format!("doc-{}", i), b"payload", &format!("meta-{}", i))
            .unwrap();
        assigned.push(idx);
    }

    let expected: Vec<u64> = (1..=20).collect();
    assert_eq!(assigned, expected);
}

#[test]
fn test_sequence_has_no_gaps() {
    let mut ledger = seeded_ledger();
    let mut store = DocumentStore::new(&mut ledger);

    for i in 1..=10u64 {
        store
            .append(&format!("doc-{}", i), b"payload", &format!("meta-{}", i))
            .unwrap();
    }

    let count = store.count().unwrap();
    assert_eq!(count, 10);

    let entries = store.range(1, count).unwrap();
    assert_eq!(entries.len(), 10);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry, &format!("meta-{}", i + 1));
    }
}

#[test]
fn test_counter_persists_as_decimal_string() {
    let mut ledger = seeded_ledger();
    let mut store = DocumentStore::new(&mut ledger);

    store.append("a", b"1", "first").unwrap();
    store.append("b", b"2", "second").unwrap();

    assert_eq!(ledger.get(COUNTER_KEY).unwrap(), Some(b"2".to_vec()));
}

#[test]
fn test_externally_removed_entry_is_detected() {
    let mut ledger = seeded_ledger();
    {
        let mut store = DocumentStore::new(&mut ledger);
        for i in 1..=5u64 {
            store
                .append(&format!("doc-{}", i), b"payload", &format!("meta-{}", i))
                .unwrap();
        }
    }

    // Simulate corruption of the indexed namespace
    ledger.remove(&document_key(3));

    let store = DocumentStore::new(&mut ledger);
    let err = store.range(1, 5).unwrap_err();
    assert!(matches!(err, DocumentError::MissingEntry { index: 3 }));
    assert!(err.is_fatal());
}

#[test]
fn test_corrupt_counter_blocks_further_appends() {
    let mut ledger = seeded_ledger();
    {
        let mut store = DocumentStore::new(&mut ledger);
        store.append("a", b"1", "first").unwrap();
    }

    ledger.put(COUNTER_KEY, b"not a number").unwrap();

    let mut store = DocumentStore::new(&mut ledger);
    let err = store.append("b", b"2", "second").unwrap_err();
    assert_eq!(err.code(), "INDEX_CORRUPT_COUNTER");

    // The counter itself must not have been advanced past the bad value.
    assert_eq!(
        ledger.get(COUNTER_KEY).unwrap(),
        Some(b"not a number".to_vec())
    );
}

#[test]
fn test_seed_respects_initial_value() {
    let mut ledger = MemoryLedger::new();
    IndexCounter::seed(&mut ledger, 100).unwrap();

    let mut store = DocumentStore::new(&mut ledger);
    let idx = store.append("k", b"v", "m").unwrap();
    assert_eq!(idx, 101);
}
