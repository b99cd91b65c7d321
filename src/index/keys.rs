//! Reserved keys and the counter wire format
//!
//! The counter lives under a single well-known key and is stored as its
//! decimal string representation; document metadata lives under keys derived
//! from the counter value assigned at creation time. The textual counter
//! encoding is a compatibility surface and must not change.

use super::errors::{IndexError, IndexResult};

/// Well-known key holding the document counter
pub const COUNTER_KEY: &str = "DOCUMENT_INDEX";

/// Prefix of every per-document metadata key
pub const DOCUMENT_KEY_PREFIX: &str = "DOCUMENT-";

/// Derive the metadata key for the document assigned `index`
pub fn document_key(index: u64) -> String {
    format!("{}{}", DOCUMENT_KEY_PREFIX, index)
}

/// Encode a counter value for storage
pub fn encode_counter(value: u64) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Decode a stored counter value.
///
/// Anything that is not a non-negative decimal integer fails with
/// `CorruptCounter`; the raw bytes are preserved (lossily) for diagnosis.
pub fn decode_counter(raw: &[u8]) -> IndexResult<u64> {
    let text = std::str::from_utf8(raw).map_err(|_| IndexError::CorruptCounter {
        raw: String::from_utf8_lossy(raw).into_owned(),
    })?;

    text.trim().parse::<u64>().map_err(|_| IndexError::CorruptCounter {
        raw: text.to_string(),
    })
}
