//! The global document counter
//!
//! `next` must appear atomic with respect to the surrounding append: no
//! other counter-affecting write may interleave between its read and its
//! persist. The counter does not lock; that guarantee is the caller's
//! serialization obligation (see `KeyValueStore`).

use crate::ledger::KeyValueStore;

use super::errors::{IndexError, IndexResult};
use super::keys::{decode_counter, encode_counter, COUNTER_KEY};

/// Stateless accessor for the counter key.
///
/// All state lives in the store handle passed to each operation.
pub struct IndexCounter;

impl IndexCounter {
    /// Seed the counter with an initial value.
    ///
    /// Must run once before the first `next`; an unseeded counter fails
    /// every subsequent operation with `INDEX_COUNTER_MISSING`.
    pub fn seed<S: KeyValueStore>(store: &mut S, initial: u64) -> IndexResult<()> {
        store.put(COUNTER_KEY, &encode_counter(initial))?;
        Ok(())
    }

    /// Read the current counter value without advancing it.
    pub fn current<S: KeyValueStore>(store: &S) -> IndexResult<u64> {
        let raw = store.get(COUNTER_KEY)?.ok_or(IndexError::CounterMissing)?;
        decode_counter(&raw)
    }

    /// Advance the counter by exactly 1 and return the new value.
    ///
    /// The stored value is validated before anything is written: a counter
    /// that fails to parse aborts the operation with no state change.
    pub fn next<S: KeyValueStore>(store: &mut S) -> IndexResult<u64> {
        let next = Self::current(store)? + 1;
        store.put(COUNTER_KEY, &encode_counter(next))?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;

    #[test]
    fn test_next_requires_seed() {
        let mut ledger = MemoryLedger::new();
        let err = IndexCounter::next(&mut ledger).unwrap_err();
        assert!(matches!(err, IndexError::CounterMissing));
    }

    #[test]
    fn test_next_increments_by_one() {
        let mut ledger = MemoryLedger::new();
        IndexCounter::seed(&mut ledger, 0).unwrap();

        assert_eq!(IndexCounter::next(&mut ledger).unwrap(), 1);
        assert_eq!(IndexCounter::next(&mut ledger).unwrap(), 2);
        assert_eq!(IndexCounter::next(&mut ledger).unwrap(), 3);
        assert_eq!(IndexCounter::current(&ledger).unwrap(), 3);
    }

    #[test]
    fn test_seed_accepts_nonzero_start() {
        let mut ledger = MemoryLedger::new();
        IndexCounter::seed(&mut ledger, 100).unwrap();
        assert_eq!(IndexCounter::next(&mut ledger).unwrap(), 101);
    }

    #[test]
    fn test_corrupt_counter_aborts_before_write() {
        let mut ledger = MemoryLedger::new();
        ledger.put(COUNTER_KEY, b"garbage").unwrap();

        let err = IndexCounter::next(&mut ledger).unwrap_err();
        assert!(matches!(err, IndexError::CorruptCounter { .. }));

        // The bad value is untouched: no increment happened past the failed parse
        assert_eq!(
            ledger.get(COUNTER_KEY).unwrap(),
            Some(b"garbage".to_vec())
        );
    }

    #[test]
    fn test_current_does_not_advance() {
        let mut ledger = MemoryLedger::new();
        IndexCounter::seed(&mut ledger, 5).unwrap();
        assert_eq!(IndexCounter::current(&ledger).unwrap(), 5);
        assert_eq!(IndexCounter::current(&ledger).unwrap(), 5);
    }
}
