//! # Document Validator
//!
//! Validation and coercion of create payloads against a kind's schema:
//! required fields must be present or have defaults, variant fields must hold
//! an allowed value, scalars are coerced leniently (integral floats and
//! numeric strings are accepted for numbers). Explicit null is accepted only
//! for nullable fields; required and defaulted fields reject it. Undeclared
//! payload fields are dropped on create.
//!
//! `validate_partial` is the advisory check used on the update path; callers
//! discard its result and write the raw payload regardless. Partial updates
//! are never rejected for touching only a subset of fields.

use serde_json::Value as Json;

use crate::store::value::{DocValue, Document};

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldType, Schema};

/// Build a storable document from a create payload.
///
/// Declared fields are coerced, defaults fill the gaps, undeclared fields
/// are dropped. Fails on the first violation.
pub fn validate_create(schema: &Schema, payload: &Json) -> SchemaResult<Document> {
    let object = payload.as_object().ok_or(SchemaError::NotAnObject)?;

    let mut document = Document::new();
    for (&name, def) in &schema.fields {
        match object.get(name) {
            Some(Json::Null) => {
                if !def.nullable {
                    return Err(SchemaError::NullValue(name.to_string()));
                }
                document.insert(name.to_string(), DocValue::Null);
            }
            Some(value) => {
                document.insert(name.to_string(), coerce(name, value, &def.field_type)?);
            }
            None => {
                if let Some(default) = &def.default {
                    document.insert(name.to_string(), coerce(name, default, &def.field_type)?);
                } else if def.required {
                    return Err(SchemaError::MissingField(name.to_string()));
                }
                // Optional and absent: omitted from the stored document
            }
        }
    }

    Ok(document)
}

/// Advisory check of the intersection of payload fields with declared fields.
///
/// Required-ness is not checked and undeclared fields are ignored. The update
/// path calls this and discards the result on purpose.
pub fn validate_partial(schema: &Schema, payload: &Json) -> SchemaResult<()> {
    let object = payload.as_object().ok_or(SchemaError::NotAnObject)?;

    for (&name, def) in &schema.fields {
        if let Some(value) = object.get(name) {
            if value.is_null() {
                continue;
            }
            coerce(name, value, &def.field_type)?;
        }
    }

    Ok(())
}

/// Coerce one JSON value to its declared field type
fn coerce(field: &str, value: &Json, field_type: &FieldType) -> SchemaResult<DocValue> {
    match field_type {
        FieldType::Text => match value {
            Json::String(s) => Ok(DocValue::Text(s.clone())),
            other => Err(mismatch(field, field_type, other)),
        },
        FieldType::Int => match value {
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(DocValue::Int(i))
                } else if let Some(f) = n.as_f64() {
                    if f.fract() == 0.0 {
                        Ok(DocValue::Int(f as i64))
                    } else {
                        Err(mismatch(field, field_type, value))
                    }
                } else {
                    Err(mismatch(field, field_type, value))
                }
            }
            Json::String(s) => s
                .parse::<i64>()
                .map(DocValue::Int)
                .map_err(|_| mismatch(field, field_type, value)),
            other => Err(mismatch(field, field_type, other)),
        },
        FieldType::Float => match value {
            Json::Number(n) => Ok(DocValue::Float(n.as_f64().unwrap_or_default())),
            Json::String(s) => s
                .parse::<f64>()
                .map(DocValue::Float)
                .map_err(|_| mismatch(field, field_type, value)),
            other => Err(mismatch(field, field_type, other)),
        },
        FieldType::Bool => match value {
            Json::Bool(b) => Ok(DocValue::Bool(*b)),
            Json::String(s) if s == "true" => Ok(DocValue::Bool(true)),
            Json::String(s) if s == "false" => Ok(DocValue::Bool(false)),
            other => Err(mismatch(field, field_type, other)),
        },
        FieldType::Object => match value {
            Json::Object(_) => Ok(DocValue::from_json(value.clone())),
            other => Err(mismatch(field, field_type, other)),
        },
        FieldType::Array => match value {
            Json::Array(_) => Ok(DocValue::from_json(value.clone())),
            other => Err(mismatch(field, field_type, other)),
        },
        FieldType::Variant { allowed } => match value {
            Json::String(s) if allowed.iter().any(|v| *v == s.as_str()) => {
                Ok(DocValue::Text(s.clone()))
            }
            Json::String(s) => Err(SchemaError::InvalidVariant {
                field: field.to_string(),
                value: s.clone(),
                allowed: *allowed,
            }),
            other => Err(mismatch(field, field_type, other)),
        },
    }
}

fn mismatch(field: &str, expected: &FieldType, actual: &Json) -> SchemaError {
    SchemaError::TypeMismatch {
        field: field.to_string(),
        expected: expected.type_name(),
        actual: json_type_name(actual),
    }
}

/// Returns the JSON type name for error messages
fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
