//! Document index subsystem
//!
//! Owns the global document counter and the key convention that maps a
//! counter value to a per-document metadata key.
//!
//! # Invariants
//!
//! - The counter is non-negative and monotonically non-decreasing
//! - `next` advances it by exactly 1 per successful call
//! - For every i in 1..=counter, a `DOCUMENT-<i>` entry exists (no gaps)
//! - Only this crate writes the counter key or the `DOCUMENT-*` namespace

mod counter;
mod errors;
mod keys;

pub use counter::IndexCounter;
pub use errors::{IndexError, IndexResult};
pub use keys::{decode_counter, document_key, encode_counter, COUNTER_KEY, DOCUMENT_KEY_PREFIX};
