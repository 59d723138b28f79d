//! # Storage Module - Session Slot Persistence
//!
//! The dashboard persists exactly one thing: the current user, serialized as
//! JSON under a single key. This module hides where that key lives behind the
//! [`KeyValueStore`] trait:
//!
//! - [`SledStore`] - sled tree on disk, used by the console binary
//! - [`MemoryStore`] - shared in-process map, used by tests and dry runs
//!
//! ```text
//! data/
//! └── session/        ← sled database, tree "session"
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use log::debug;

use crate::errors::BlitzError;

const TREE_SESSION: &str = "session";

/// Minimal key-value contract for the persisted session slot.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BlitzError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), BlitzError>;
    fn remove(&self, key: &str) -> Result<(), BlitzError>;
}

/// Sled-backed slot storage.
#[derive(Clone)]
pub struct SledStore {
    _db: sled::Db,
    tree: sled::Tree,
}

impl SledStore {
    /// Open (or create) the store rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BlitzError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::open(path_ref)?;
        let tree = db.open_tree(TREE_SESSION)?;
        debug!("Opened session store at {}", path_ref.display());
        Ok(Self { _db: db, tree })
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BlitzError> {
        Ok(self.tree.get(key.as_bytes())?.map(|bytes| bytes.to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), BlitzError> {
        self.tree.insert(key.as_bytes(), value)?;
        self.tree.flush()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BlitzError> {
        self.tree.remove(key.as_bytes())?;
        self.tree.flush()?;
        Ok(())
    }
}

/// In-memory slot storage. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BlitzError> {
        Ok(self.map().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), BlitzError> {
        self.map().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BlitzError> {
        self.map().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sled_store_set_get_remove() {
        let dir = TempDir::new().expect("tempdir");
        let store = SledStore::open(dir.path().join("session")).expect("store");

        assert!(store.get("k").unwrap().is_none());
        store.set("k", b"{\"a\":1}").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"{\"a\":1}"[..]));
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn sled_store_survives_reopen() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("session");
        {
            let store = SledStore::open(&path).expect("store");
            store.set("user", b"persisted").unwrap();
        }
        let store = SledStore::open(&path).expect("reopen");
        assert_eq!(store.get("user").unwrap().as_deref(), Some(&b"persisted"[..]));
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", b"v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some(&b"v"[..]));
        handle.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }
}
