//! Freeze cache
//!
//! Client-side "freeze mode" for dashboards: once a payload for a data
//! kind is pinned, lookups return that snapshot instead of refetching,
//! until the cache is cleared or disabled. Nothing here touches the
//! server; it is purely a presentation-layer stabilizer.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CacheError>;

/// Persistence boundary for pinned payloads.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// In-memory store, the default for ephemeral dashboards.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

/// Store backed by a single JSON object file. The whole map is rewritten
/// on every set; payloads here are small dashboard snapshots.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, Value>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }
}

/// Freeze-mode cache over a [`KvStore`]. Disabled mode is pass-through:
/// lookups miss and pins are dropped.
pub struct FreezeCache<S: KvStore> {
    store: S,
    enabled: bool,
}

impl FreezeCache<MemoryStore> {
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: KvStore> FreezeCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Pinned payload for `kind`, or `None` when disabled or unpinned.
    pub fn lookup(&self, kind: &str) -> Result<Option<Value>> {
        if !self.enabled {
            return Ok(None);
        }
        self.store.get(kind)
    }

    /// Pin `payload` for `kind`. The first pin wins; later pins for the
    /// same kind are ignored so a frozen dashboard stays frozen.
    pub fn pin(&mut self, kind: &str, payload: Value) -> Result<()> {
        if !self.enabled || self.store.get(kind)?.is_some() {
            return Ok(());
        }
        self.store.set(kind, payload)
    }

    /// Drop all pinned payloads; the next lookup per kind will miss.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()
    }
}
