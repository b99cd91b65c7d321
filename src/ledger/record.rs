//! On-disk record framing for the file ledger
//!
//! Each `put` appends one frame:
//!
//! ```text
//! +--------------+
//! | Frame Length | (u32 LE, includes this field and the checksum)
//! +--------------+
//! | Key          | (length-prefixed UTF-8)
//! +--------------+
//! | Value        | (length-prefixed bytes)
//! +--------------+
//! | Checksum     | (u32 LE, CRC32 over everything before it)
//! +--------------+
//! ```
//!
//! The log is replayed front to back on open; the last frame for a key wins.
//! Decoding reports failures as plain reasons so the caller can attach the
//! byte offset it is replaying at.

use crc32fast::Hasher;

/// Smallest possible frame: length + two zero-length prefixes + checksum.
const MIN_FRAME_SIZE: usize = 4 + 4 + 4 + 4;

/// One key/value frame of the file ledger log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRecord {
    pub key: String,
    pub value: Vec<u8>,
}

impl LedgerRecord {
    /// Build a frame for one put
    pub fn new(key: impl Into<String>, value: &[u8]) -> Self {
        Self {
            key: key.into(),
            value: value.to_vec(),
        }
    }

    /// Serialize the frame, checksum included.
    pub fn encode(&self) -> Vec<u8> {
        let frame_len = (MIN_FRAME_SIZE + self.key.len() + self.value.len()) as u32;

        let mut frame = Vec::with_capacity(frame_len as usize);
        frame.extend_from_slice(&frame_len.to_le_bytes());
        frame.extend_from_slice(&(self.key.len() as u32).to_le_bytes());
        frame.extend_from_slice(self.key.as_bytes());
        frame.extend_from_slice(&(self.value.len() as u32).to_le_bytes());
        frame.extend_from_slice(&self.value);

        let checksum = crc32(&frame);
        frame.extend_from_slice(&checksum.to_le_bytes());
        frame
    }

    /// Decode one frame from the front of `data`, verifying its checksum.
    ///
    /// Returns the record and the number of bytes consumed. Errors are
    /// returned as a reason string; the replay loop adds the file offset.
    pub fn decode(data: &[u8]) -> Result<(Self, usize), String> {
        if data.len() < MIN_FRAME_SIZE {
            return Err(format!(
                "truncated frame: {} bytes remaining, minimum is {}",
                data.len(),
                MIN_FRAME_SIZE
            ));
        }

        let frame_len = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
        if frame_len < MIN_FRAME_SIZE {
            return Err(format!("invalid frame length {}", frame_len));
        }
        if frame_len > data.len() {
            return Err(format!(
                "truncated frame: header says {} bytes, {} remain",
                frame_len,
                data.len()
            ));
        }

        let checksum_offset = frame_len - 4;
        let stored = u32::from_le_bytes([
            data[checksum_offset],
            data[checksum_offset + 1],
            data[checksum_offset + 2],
            data[checksum_offset + 3],
        ]);
        let computed = crc32(&data[..checksum_offset]);
        if computed != stored {
            return Err(format!(
                "checksum mismatch: computed {:08x}, stored {:08x}",
                computed, stored
            ));
        }

        let body = &data[4..checksum_offset];
        let (key_bytes, rest) = read_prefixed(body).ok_or("frame body shorter than key prefix")?;
        let (value, rest) = read_prefixed(rest).ok_or("frame body shorter than value prefix")?;
        if !rest.is_empty() {
            return Err(format!("{} trailing bytes inside frame", rest.len()));
        }

        let key = String::from_utf8(key_bytes.to_vec())
            .map_err(|e| format!("key is not valid UTF-8: {}", e))?;

        Ok((
            Self {
                key,
                value: value.to_vec(),
            },
            frame_len,
        ))
    }
}

/// Split one length-prefixed field off the front of `data`.
fn read_prefixed(data: &[u8]) -> Option<(&[u8], &[u8])> {
    if data.len() < 4 {
        return None;
    }
    let len = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
    let rest = &data[4..];
    if rest.len() < len {
        return None;
    }
    Some((&rest[..len], &rest[len..]))
}

fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
