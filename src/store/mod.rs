//! # Document Store
//!
//! Document value model, the in-memory store backend, and the adapter that
//! gives every handler the same availability semantics: writes fail fast when
//! no store is configured, reads degrade to empty results.

pub mod adapter;
pub mod errors;
pub mod filter;
pub mod memory;
pub mod serializer;
pub mod value;

pub use adapter::{StoreAdapter, StoreBackend};
pub use errors::{StoreError, StoreResult};
pub use filter::Filter;
pub use memory::MemoryBackend;
pub use serializer::{document_to_json, serialize_document, serialize_value};
pub use value::{DocValue, Document, DocumentId};
