//! # Schema Registry & Validation
//!
//! Field/type definitions for the twelve fixed resource kinds, the immutable
//! registry that maps URL resource names to (schema, collection) pairs, and
//! the coercing document validator used on the create path.

pub mod errors;
pub mod registry;
pub mod types;
pub mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use registry::{Registry, RegistryEntry, ResourceKind};
pub use types::{FieldDef, FieldType, Schema};
pub use validator::{validate_create, validate_partial};
