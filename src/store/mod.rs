//! # Document Store
//!
//! Named collections of JSON documents with single-document CRUD.
//!
//! The store is the only stateful seam in the service. Handlers receive it
//! as an explicitly passed `Arc<dyn DocumentStore>`; there is no global
//! handle. Two implementations exist: [`MemoryStore`] keeps everything in
//! process memory, [`FileStore`] adds a JSON snapshot on disk.

pub mod document;
pub mod errors;
pub mod file;
pub mod memory;

pub use document::{DocumentId, ID_HEX_LEN};
pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use serde_json::Value;

/// Field stamped onto every stored document
pub const ID_FIELD: &str = "_id";

/// Collection-scoped document operations
///
/// Each method is one store call; no method retries or batches. A collection
/// that has never been written to behaves as empty on read.
pub trait DocumentStore: Send + Sync {
    /// List all documents in a collection, in insertion order
    fn list(&self, collection: &str) -> StoreResult<Vec<Value>>;

    /// Fetch a single document by identifier
    fn get(&self, collection: &str, id: &DocumentId) -> StoreResult<Option<Value>>;

    /// Insert a document, stamping a fresh identifier
    ///
    /// Returns the stored document including its generated [`ID_FIELD`].
    /// Rejects bodies that are not JSON objects.
    fn insert(&self, collection: &str, document: Value) -> StoreResult<Value>;

    /// Merge `patch` into the matching document, field by field
    ///
    /// Top-level keys of `patch` overwrite the stored document's keys; other
    /// stored fields are untouched and the identifier is never rewritten.
    /// Returns `false` when no document matches.
    fn update(&self, collection: &str, id: &DocumentId, patch: Value) -> StoreResult<bool>;

    /// Delete at most one document; returns `false` when no document matches
    fn delete(&self, collection: &str, id: &DocumentId) -> StoreResult<bool>;
}
