//! # Document Serializer
//!
//! Recursive tree-walk that replaces every store-native identifier leaf, at
//! any nesting depth, with its plain string form. Idempotent: a serialized
//! tree contains no identifier leaves, so a second pass is a no-op.

use serde_json::Value as Json;

use super::value::{DocValue, Document};

/// Replace every `Id` leaf in the tree with its string form
pub fn serialize_value(value: DocValue) -> DocValue {
    match value {
        DocValue::Id(id) => DocValue::Text(id.to_string()),
        DocValue::Array(items) => {
            DocValue::Array(items.into_iter().map(serialize_value).collect())
        }
        DocValue::Map(map) => DocValue::Map(
            map.into_iter()
                .map(|(k, v)| (k, serialize_value(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Serialize every field of a document
pub fn serialize_document(document: Document) -> Document {
    document
        .into_iter()
        .map(|(field, value)| (field, serialize_value(value)))
        .collect()
}

/// Serialize a document and render it as a JSON object for a response
pub fn document_to_json(document: Document) -> Json {
    Json::Object(
        serialize_document(document)
            .iter()
            .map(|(field, value)| (field.clone(), value.to_json()))
            .collect(),
    )
}
