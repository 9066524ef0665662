//! # Store Adapter
//!
//! The adapter wraps an optional store backend and owns the availability
//! semantics: insert/update/delete on an unconfigured store fail fast with
//! `StoreError::Unavailable`, while find degrades to an empty result so read
//! paths stay usable against a not-yet-provisioned store.
//!
//! The adapter is built once at process start and handed to every handler
//! explicitly; there is no ambient global store handle.

use std::sync::Arc;

use super::errors::{StoreError, StoreResult};
use super::filter::Filter;
use super::value::{Document, DocumentId};

/// Backend contract for a document store
pub trait StoreBackend: Send + Sync {
    /// Store a document, assigning and returning its `_id`
    fn insert(&self, collection: &str, document: Document) -> StoreResult<DocumentId>;

    /// Return all documents in a collection matching the filter
    fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>>;

    /// Merge the supplied fields over the document with the given id.
    /// Returns whether a document matched. Field values are replaced
    /// wholesale; arrays and maps are not deep-merged.
    fn update(&self, collection: &str, id: DocumentId, fields: Document) -> StoreResult<bool>;

    /// Remove the document with the given id; returns whether one existed
    fn delete(&self, collection: &str, id: DocumentId) -> StoreResult<bool>;

    /// Names of all non-empty collections
    fn collection_names(&self) -> StoreResult<Vec<String>>;
}

/// Handle to the (possibly absent) document store
#[derive(Clone)]
pub struct StoreAdapter {
    backend: Option<Arc<dyn StoreBackend>>,
}

impl StoreAdapter {
    /// Adapter over a live backend
    pub fn connected(backend: Arc<dyn StoreBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Adapter for a process started without store configuration
    pub fn disconnected() -> Self {
        Self { backend: None }
    }

    /// Whether a backend was ever connected
    pub fn is_connected(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> StoreResult<&Arc<dyn StoreBackend>> {
        self.backend.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Insert a document; fails with `Unavailable` when no store is connected
    pub fn insert(&self, collection: &str, document: Document) -> StoreResult<DocumentId> {
        self.backend()?.insert(collection, document)
    }

    /// Find documents matching the filter.
    ///
    /// Degrades to an empty vec when no store is connected or the backend
    /// fails; read paths never error.
    pub fn find(&self, collection: &str, filter: &Filter) -> Vec<Document> {
        match &self.backend {
            Some(backend) => backend.find(collection, filter).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Merge fields over a document; returns whether one matched
    pub fn update(&self, collection: &str, id: DocumentId, fields: Document) -> StoreResult<bool> {
        self.backend()?.update(collection, id, fields)
    }

    /// Delete a document by id; returns whether one was removed
    pub fn delete(&self, collection: &str, id: DocumentId) -> StoreResult<bool> {
        self.backend()?.delete(collection, id)
    }

    /// Collection names; fails with `Unavailable` when no store is
    /// connected. Diagnostics report backend listing failures instead of
    /// masking them as an empty store.
    pub fn collection_names(&self) -> StoreResult<Vec<String>> {
        self.backend()?.collection_names()
    }
}
