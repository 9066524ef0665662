//! # Schema Type Definitions
//!
//! Supported field types:
//! - text: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - bool: Boolean
//! - object: nested JSON object (contents unconstrained)
//! - array: JSON array (elements unconstrained)
//! - variant: string restricted to a fixed set of values

use std::collections::BTreeMap;

use serde_json::Value as Json;

/// Supported field types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    Text,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// Nested JSON object, stored as supplied
    Object,
    /// JSON array, stored as supplied
    Array,
    /// String restricted to a fixed set of allowed values
    Variant {
        /// Allowed values
        allowed: &'static [&'static str],
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Object => "object",
            FieldType::Array => "array",
            FieldType::Variant { .. } => "variant",
        }
    }
}

/// Field definition: type, required/nullable flags, and default applied
/// when absent
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether the field must be present when there is no default
    pub required: bool,
    /// Whether an explicit null is acceptable. Only the truly optional
    /// fields are nullable; required and defaulted fields reject null.
    pub nullable: bool,
    /// Default value applied when the field is absent from a create payload
    pub default: Option<Json>,
}

impl FieldDef {
    /// A field that must be supplied on create
    pub fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            nullable: false,
            default: None,
        }
    }

    /// A field that may be omitted or explicitly null
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            nullable: true,
            default: None,
        }
    }

    /// A non-nullable field filled with a default when absent
    pub fn with_default(field_type: FieldType, default: Json) -> Self {
        Self {
            field_type,
            required: false,
            nullable: false,
            default: Some(default),
        }
    }
}

/// Schema for one resource kind
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Record-kind name; its case-folded form is the storage collection name
    pub name: &'static str,
    /// Field definitions
    pub fields: BTreeMap<&'static str, FieldDef>,
}

impl Schema {
    pub fn new(name: &'static str, fields: BTreeMap<&'static str, FieldDef>) -> Self {
        Self { name, fields }
    }

    /// Storage collection name, deterministically derived from the kind name
    pub fn collection(&self) -> String {
        self.name.to_lowercase()
    }
}
