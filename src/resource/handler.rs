//! # Generic Resource Handler
//!
//! Four operations (list/create/update/delete) that work uniformly across
//! all twelve resource kinds by resolving the kind's schema and collection
//! from the registry. Unknown kinds fail before any store access. Handlers
//! hold no cross-request state; everything lives in the store.

use std::sync::Arc;

use serde_json::Value as Json;

use crate::schema::{validate_create, validate_partial, Registry, RegistryEntry};
use crate::store::{
    document_to_json, DocValue, DocumentId, Filter, StoreAdapter,
};

use super::errors::{ResourceError, ResourceResult};

/// Dispatch core for the generic CRUD surface
#[derive(Clone)]
pub struct ResourceHandler {
    registry: Arc<Registry>,
    store: StoreAdapter,
}

impl ResourceHandler {
    pub fn new(registry: Arc<Registry>, store: StoreAdapter) -> Self {
        Self { registry, store }
    }

    /// The underlying store handle (used by diagnostics)
    pub fn store(&self) -> &StoreAdapter {
        &self.store
    }

    fn resolve(&self, resource: &str) -> ResourceResult<&RegistryEntry> {
        self.registry
            .resolve(resource)
            .ok_or_else(|| ResourceError::UnknownKind(resource.to_string()))
    }

    /// List records of a kind, optionally filtered by project id.
    ///
    /// Identifier values are serialized to strings. No matches is success
    /// with an empty vec, never an error.
    pub fn list(&self, resource: &str, project_id: Option<&str>) -> ResourceResult<Vec<Json>> {
        let entry = self.resolve(resource)?;

        let filter = match project_id {
            Some(id) => Filter::eq("project_id", DocValue::Text(id.to_string())),
            None => Filter::empty(),
        };

        let documents = self.store.find(&entry.collection, &filter);
        Ok(documents.into_iter().map(document_to_json).collect())
    }

    /// Validate a payload against the kind's schema and insert it.
    ///
    /// Returns the new record's id. Validation failures carry the detail
    /// text; nothing is inserted on failure.
    pub fn create(&self, resource: &str, payload: &Json) -> ResourceResult<DocumentId> {
        let entry = self.resolve(resource)?;

        let document = validate_create(&entry.schema, payload)?;
        let id = self.store.insert(&entry.collection, document)?;
        Ok(id)
    }

    /// Best-effort-validated raw merge update.
    ///
    /// The schema-intersection check is advisory: its result is discarded so
    /// partial updates are never rejected, and the entire payload is then
    /// merged over the record, undeclared fields included.
    pub fn update(&self, resource: &str, id: &str, payload: &Json) -> ResourceResult<()> {
        let entry = self.resolve(resource)?;

        let _ = validate_partial(&entry.schema, payload);

        let object = payload
            .as_object()
            .ok_or(ResourceError::Validation(
                crate::schema::SchemaError::NotAnObject,
            ))?;
        let fields = object
            .iter()
            .map(|(k, v)| (k.clone(), DocValue::from_json(v.clone())))
            .collect();

        // A malformed id can never match a stored record
        let Some(id) = DocumentId::parse(id) else {
            return Err(ResourceError::NotFound);
        };

        let matched = self.store.update(&entry.collection, id, fields)?;
        if !matched {
            return Err(ResourceError::NotFound);
        }
        Ok(())
    }

    /// Delete a record by id; no cascading effects
    pub fn delete(&self, resource: &str, id: &str) -> ResourceResult<()> {
        let entry = self.resolve(resource)?;

        let Some(id) = DocumentId::parse(id) else {
            return Err(ResourceError::NotFound);
        };

        let removed = self.store.delete(&entry.collection, id)?;
        if !removed {
            return Err(ResourceError::NotFound);
        }
        Ok(())
    }
}
