//! # Schema Errors
//!
//! Validation failures raised while checking a payload against a kind's
//! schema. These surface to clients as 422 responses with the detail text.

use thiserror::Error;

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Validation errors for create payloads
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Payload root was not a JSON object
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// A required field with no default was absent
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// A non-nullable field was explicitly null
    #[error("field '{0}' must not be null")]
    NullValue(String),

    /// A field value could not be coerced to its declared type
    #[error("field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A value was outside a field's fixed set of allowed strings
    #[error("field '{field}': '{value}' is not one of {allowed:?}")]
    InvalidVariant {
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },
}
