//! Append-only file ledger
//!
//! The durable `KeyValueStore` used by the CLI. Every put appends one
//! checksummed frame and fsyncs before returning; the full log is replayed
//! into an in-memory map on open, latest frame per key winning. Any framing
//! or checksum failure during replay is fatal: a damaged log is never
//! served from.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::{LedgerError, LedgerResult};
use super::kv::KeyValueStore;
use super::record::LedgerRecord;

/// File-backed ledger over an append-only record log.
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    file: File,
    entries: BTreeMap<String, Vec<u8>>,
}

impl FileLedger {
    /// Open (or create) the ledger log at `path`, replaying existing frames.
    ///
    /// Fails with `LEDGER_CORRUPTION` if any frame fails validation; the
    /// log is not truncated or repaired.
    pub fn open(path: &Path) -> LedgerResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::unavailable(
                        format!("failed to create ledger directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let entries = Self::replay(path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LedgerError::unavailable(
                    format!("failed to open ledger log {}", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            entries,
        })
    }

    /// Scan the whole log, building the key -> latest value map.
    fn replay(path: &Path) -> LedgerResult<BTreeMap<String, Vec<u8>>> {
        let mut entries = BTreeMap::new();

        let data = match fs::read(path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
            Err(e) => {
                return Err(LedgerError::unavailable(
                    format!("failed to read ledger log {}", path.display()),
                    e,
                ))
            }
        };

        let mut offset = 0usize;
        while offset < data.len() {
            let (record, consumed) = LedgerRecord::decode(&data[offset..])
                .map_err(|reason| LedgerError::corruption_at_offset(offset as u64, reason))?;
            entries.insert(record.key, record.value);
            offset += consumed;
        }

        Ok(entries)
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for FileLedger {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        let frame = LedgerRecord::new(key, value).encode();

        self.file
            .write_all(&frame)
            .map_err(|e| LedgerError::write_failed(key, e))?;

        // fsync before acknowledging; a put that returns Ok is durable
        self.file
            .sync_all()
            .map_err(|e| LedgerError::write_failed(key, e))?;

        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_log_and_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data").join("ledger.dat");

        let _ledger = FileLedger::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_put_get_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.dat");

        let mut ledger = FileLedger::open(&path).unwrap();
        ledger.put("k", b"v").unwrap();
        assert_eq!(ledger.get("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_reopen_replays_latest_value() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.dat");

        {
            let mut ledger = FileLedger::open(&path).unwrap();
            ledger.put("k", b"first").unwrap();
            ledger.put("k", b"second").unwrap();
            ledger.put("other", b"x").unwrap();
        }

        let ledger = FileLedger::open(&path).unwrap();
        assert_eq!(ledger.get("k").unwrap(), Some(b"second".to_vec()));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_corrupted_log_refuses_to_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ledger.dat");

        {
            let mut ledger = FileLedger::open(&path).unwrap();
            ledger.put("k", b"value").unwrap();
        }

        let mut contents = fs::read(&path).unwrap();
        let mid = contents.len() / 2;
        contents[mid] ^= 0xFF;
        fs::write(&path, contents).unwrap();

        let err = FileLedger::open(&path).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.code_str(), "LEDGER_CORRUPTION");
    }
}
