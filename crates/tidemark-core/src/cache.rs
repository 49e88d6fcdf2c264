// File: crates/tidemark-core/src/cache.rs
// Summary: Built-in PersistentCache backends (in-memory map, JSON files on disk).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::CacheError;
use crate::loader::PersistentCache;
use crate::series::Dataset;

/// Process-local cache; single-threaded like the chart engine.
#[derive(Default)]
pub struct MemoryCache {
    entries: RefCell<HashMap<String, Dataset>>,
}

impl MemoryCache {
    pub fn new() -> Self { Self::default() }

    pub fn with_entry(key: impl Into<String>, value: Dataset) -> Self {
        let cache = Self::new();
        cache.entries.borrow_mut().insert(key.into(), value);
        cache
    }

    pub fn contains(&self, key: &str) -> bool { self.entries.borrow().contains_key(key) }
    pub fn len(&self) -> usize { self.entries.borrow().len() }
    pub fn is_empty(&self) -> bool { self.entries.borrow().is_empty() }

    /// Snapshot of a stored entry.
    pub fn peek(&self, key: &str) -> Option<Dataset> { self.entries.borrow().get(key).cloned() }
}

impl PersistentCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Dataset>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &Dataset) -> Result<(), CacheError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.clone());
        Ok(())
    }
}

/// One JSON document per key under `dir`. Entries never expire.
pub struct JsonFileCache {
    dir: PathBuf,
}

impl JsonFileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    /// File backing `key`. Bytes outside `[A-Za-z0-9_-]` are written as `%XX`,
    /// so distinct keys never share a file.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for b in key.bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
                name.push(char::from(b));
            } else {
                let _ = write!(name, "%{b:02X}");
            }
        }
        self.dir.join(format!("{name}.json"))
    }
}

impl PersistentCache for JsonFileCache {
    async fn get(&self, key: &str) -> Result<Option<Dataset>, CacheError> {
        let bytes = match std::fs::read(self.entry_path(key)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn set(&self, key: &str, value: &Dataset) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.entry_path(key);
        // Entries are replaced by rename; readers never see a partial file.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec(value)?)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}
