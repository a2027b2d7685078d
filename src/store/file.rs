//! # File-Backed Store
//!
//! [`MemoryStore`] semantics plus a JSON snapshot on disk. The snapshot is
//! read once at open; every successful mutation rewrites it, write-to-temp
//! then rename, so a crash mid-write never leaves a half-written file in
//! place of the last good snapshot.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;
use tracing::debug;

use super::document::DocumentId;
use super::errors::{StoreError, StoreResult};
use super::memory::MemoryStore;
use super::DocumentStore;

/// Document store persisted as a single JSON snapshot file
pub struct FileStore {
    inner: MemoryStore,
    path: PathBuf,
    // Serializes snapshot+write+rename; concurrent mutations otherwise race
    // on the shared temp path and can rename each other's files away.
    persist_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store backed by `path`, creating an empty store if the file
    /// does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let inner = match fs::read_to_string(&path) {
            Ok(contents) => {
                let snapshot: HashMap<String, Vec<Value>> = serde_json::from_str(&contents)
                    .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?;
                MemoryStore::from_snapshot(snapshot)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => MemoryStore::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(Self {
            inner,
            path,
            persist_lock: Mutex::new(()),
        })
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> StoreResult<()> {
        // The snapshot is taken under the same lock so a later mutation can
        // never be overwritten on disk by an earlier, staler snapshot.
        let _guard = self
            .persist_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;

        let snapshot = self.inner.snapshot()?;
        let contents =
            serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "snapshot persisted");
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn list(&self, collection: &str) -> StoreResult<Vec<Value>> {
        self.inner.list(collection)
    }

    fn get(&self, collection: &str, id: &DocumentId) -> StoreResult<Option<Value>> {
        self.inner.get(collection, id)
    }

    fn insert(&self, collection: &str, document: Value) -> StoreResult<Value> {
        let stored = self.inner.insert(collection, document)?;
        self.persist()?;
        Ok(stored)
    }

    fn update(&self, collection: &str, id: &DocumentId, patch: Value) -> StoreResult<bool> {
        let matched = self.inner.update(collection, id, patch)?;
        if matched {
            self.persist()?;
        }
        Ok(matched)
    }

    fn delete(&self, collection: &str, id: &DocumentId) -> StoreResult<bool> {
        let removed = self.inner.delete(collection, id)?;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ID_FIELD;
    use serde_json::json;

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("data.json")).unwrap();
        assert!(store.list("lessons").unwrap().is_empty());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let stored = {
            let store = FileStore::open(&path).unwrap();
            store
                .insert("lessons", json!({"title": "Yoga", "price": 10}))
                .unwrap()
        };

        let reopened = FileStore::open(&path).unwrap();
        let all = reopened.list("lessons").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["title"], "Yoga");
        assert_eq!(all[0][ID_FIELD], stored[ID_FIELD]);
    }

    #[test]
    fn test_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        {
            let store = FileStore::open(&path).unwrap();
            let stored = store.insert("lessons", json!({"title": "Yoga"})).unwrap();
            let id = DocumentId::parse(stored[ID_FIELD].as_str().unwrap()).unwrap();
            assert!(store.delete("lessons", &id).unwrap());
        }

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.list("lessons").unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_mutations_all_persist() {
        use std::sync::{Arc, Barrier};
        use std::thread;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = Arc::new(FileStore::open(&path).unwrap());

        let threads = 8;
        let rounds = 25;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..rounds {
                        store.insert("lessons", json!({"title": "Yoga"})).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Every acknowledged insert is on disk after reopen.
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.list("lessons").unwrap().len(), threads * rounds);
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }
}
