use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;

/// Storage key for the serialized transaction log.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Storage key for the serialized inventory map.
pub const INVENTORY_KEY: &str = "inventory";

/// Keyed text-blob storage.
///
/// The ledger keeps exactly two blobs ([`TRANSACTIONS_KEY`] and
/// [`INVENTORY_KEY`]) and rewrites each one wholesale on every commit; there
/// is no partial write and no diffing. The two writes are independent, so a
/// crash between them can leave the blobs mutually stale — accepted for a
/// single-actor ledger of this size.
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and throwaway sessions. Contents vanish with
/// the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key.
///
/// A missing file reads as `None`; every write replaces the file in full.
/// I/O failures (permissions, disk full) surface as
/// [`LedgerError::Storage`](crate::error::LedgerError::Storage).
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.blob_path(key), value)?;
        Ok(())
    }
}
