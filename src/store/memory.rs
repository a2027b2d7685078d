//! # In-Memory Store
//!
//! `RwLock`-guarded collections held entirely in process memory. Documents
//! keep insertion order within a collection.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use super::document::DocumentId;
use super::errors::{StoreError, StoreResult};
use super::{DocumentStore, ID_FIELD};

/// Documents of one collection
#[derive(Debug, Default, Clone)]
struct CollectionData {
    documents: Vec<Value>,
}

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, CollectionData>>,
}

fn id_matches(document: &Value, id: &str) -> bool {
    document.get(ID_FIELD).and_then(|v| v.as_str()) == Some(id)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot of collection -> documents
    pub fn from_snapshot(snapshot: HashMap<String, Vec<Value>>) -> Self {
        let collections = snapshot
            .into_iter()
            .map(|(name, documents)| (name, CollectionData { documents }))
            .collect();

        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Clone the full contents, for snapshot persistence
    pub fn snapshot(&self) -> StoreResult<HashMap<String, Vec<Value>>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        Ok(collections
            .iter()
            .map(|(name, data)| (name.clone(), data.documents.clone()))
            .collect())
    }
}

impl DocumentStore for MemoryStore {
    fn list(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        Ok(collections
            .get(collection)
            .map(|data| data.documents.clone())
            .unwrap_or_default())
    }

    fn get(&self, collection: &str, id: &DocumentId) -> StoreResult<Option<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        let hex = id.to_string();
        Ok(collections
            .get(collection)
            .and_then(|data| data.documents.iter().find(|d| id_matches(d, &hex)))
            .cloned())
    }

    fn insert(&self, collection: &str, mut document: Value) -> StoreResult<Value> {
        let Some(fields) = document.as_object_mut() else {
            return Err(StoreError::NotAnObject);
        };

        // The store owns identifier assignment; a caller-supplied _id is
        // overwritten so issued identifiers stay unique.
        let id = DocumentId::generate();
        fields.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        collections
            .entry(collection.to_string())
            .or_default()
            .documents
            .push(document.clone());

        Ok(document)
    }

    fn update(&self, collection: &str, id: &DocumentId, patch: Value) -> StoreResult<bool> {
        let Some(patch_fields) = patch.as_object() else {
            return Err(StoreError::NotAnObject);
        };

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        let hex = id.to_string();
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|data| data.documents.iter_mut().find(|d| id_matches(d, &hex)))
        else {
            return Ok(false);
        };

        if let Some(fields) = document.as_object_mut() {
            for (key, value) in patch_fields {
                if key == ID_FIELD {
                    continue;
                }
                fields.insert(key.clone(), value.clone());
            }
        }

        Ok(true)
    }

    fn delete(&self, collection: &str, id: &DocumentId) -> StoreResult<bool> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        let hex = id.to_string();
        let Some(data) = collections.get_mut(collection) else {
            return Ok(false);
        };

        match data.documents.iter().position(|d| id_matches(d, &hex)) {
            Some(idx) => {
                data.documents.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
