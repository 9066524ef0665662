//! # In-Memory Store Backend
//!
//! Per-collection vectors behind a single `RwLock`. Documents keep insertion
//! order, which is the store-defined order list responses expose.

use std::collections::HashMap;
use std::sync::RwLock;

use super::adapter::StoreBackend;
use super::errors::{StoreError, StoreResult};
use super::filter::Filter;
use super::value::{DocValue, Document, DocumentId};

/// In-memory document store
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the document's `_id` field holds the given identifier
fn has_id(document: &Document, id: DocumentId) -> bool {
    document.get("_id") == Some(&DocValue::Id(id))
}

impl StoreBackend for MemoryBackend {
    fn insert(&self, collection: &str, mut document: Document) -> StoreResult<DocumentId> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let id = DocumentId::new();
        document.insert("_id".to_string(), DocValue::Id(id));
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    fn update(&self, collection: &str, id: DocumentId, fields: Document) -> StoreResult<bool> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let Some(documents) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(document) = documents.iter_mut().find(|doc| has_id(doc, id)) else {
            return Ok(false);
        };

        for (field, value) in fields {
            // _id is immutable after insert
            if field != "_id" {
                document.insert(field, value);
            }
        }

        Ok(true)
    }

    fn delete(&self, collection: &str, id: DocumentId) -> StoreResult<bool> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let Some(documents) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(index) = documents.iter().position(|doc| has_id(doc, id)) else {
            return Ok(false);
        };
        documents.remove(index);

        Ok(true)
    }

    fn collection_names(&self) -> StoreResult<Vec<String>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pairs: &[(&str, DocValue)]) -> Document {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let backend = MemoryBackend::new();
        let a = backend
            .insert("role", doc(&[("name", DocValue::Text("admin".into()))]))
            .unwrap();
        let b = backend
            .insert("role", doc(&[("name", DocValue::Text("editor".into()))]))
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_find_preserves_insertion_order() {
        let backend = MemoryBackend::new();
        for name in ["first", "second", "third"] {
            backend
                .insert("role", doc(&[("name", DocValue::Text(name.into()))]))
                .unwrap();
        }

        let found = backend.find("role", &Filter::empty()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|d| d.get("name").cloned().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                DocValue::Text("first".into()),
                DocValue::Text("second".into()),
                DocValue::Text("third".into()),
            ]
        );
    }

    #[test]
    fn test_find_with_filter() {
        let backend = MemoryBackend::new();
        backend
            .insert(
                "deployment",
                doc(&[("project_id", DocValue::Text("p1".into()))]),
            )
            .unwrap();
        backend
            .insert(
                "deployment",
                doc(&[("project_id", DocValue::Text("p2".into()))]),
            )
            .unwrap();

        let filter = Filter::eq("project_id", DocValue::Text("p1".into()));
        assert_eq!(backend.find("deployment", &filter).unwrap().len(), 1);
    }

    #[test]
    fn test_update_merges_and_reports_match() {
        let backend = MemoryBackend::new();
        let id = backend
            .insert(
                "role",
                doc(&[
                    ("name", DocValue::Text("admin".into())),
                    ("description", DocValue::Text("full access".into())),
                ]),
            )
            .unwrap();

        let matched = backend
            .update("role", id, doc(&[("name", DocValue::Text("owner".into()))]))
            .unwrap();
        assert!(matched);

        let found = backend.find("role", &Filter::empty()).unwrap();
        assert_eq!(found[0].get("name"), Some(&DocValue::Text("owner".into())));
        // Untouched fields survive the merge
        assert_eq!(
            found[0].get("description"),
            Some(&DocValue::Text("full access".into()))
        );
    }

    #[test]
    fn test_update_cannot_overwrite_id() {
        let backend = MemoryBackend::new();
        let id = backend.insert("role", Document::new()).unwrap();

        backend
            .update("role", id, doc(&[("_id", DocValue::Text("spoofed".into()))]))
            .unwrap();

        let found = backend.find("role", &Filter::empty()).unwrap();
        assert_eq!(found[0].get("_id"), Some(&DocValue::Id(id)));
    }

    #[test]
    fn test_update_missing_id_reports_no_match() {
        let backend = MemoryBackend::new();
        backend.insert("role", Document::new()).unwrap();

        let matched = backend
            .update("role", DocumentId::new(), Document::new())
            .unwrap();
        assert!(!matched);
    }

    #[test]
    fn test_delete() {
        let backend = MemoryBackend::new();
        let id = backend.insert("role", Document::new()).unwrap();

        assert!(backend.delete("role", id).unwrap());
        assert!(!backend.delete("role", id).unwrap());
        assert!(backend.find("role", &Filter::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_collection_names_sorted() {
        let backend = MemoryBackend::new();
        backend.insert("role", Document::new()).unwrap();
        backend.insert("deployment", Document::new()).unwrap();

        assert_eq!(
            backend.collection_names().unwrap(),
            vec!["deployment".to_string(), "role".to_string()]
        );
    }
}
