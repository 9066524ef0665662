//! # Document Value Model
//!
//! Documents are trees of `DocValue` leaves and containers. The one piece of
//! store-native state is `DocumentId`: the identifier the store assigns on
//! insert. Identifiers stay in their native form inside the store and are
//! converted to plain strings at the API boundary (see `serializer`).

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value as Json;
use uuid::Uuid;

/// Store-assigned unique document identifier.
///
/// Opaque to callers: once serialized it is only ever seen as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Mint a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form; `None` if malformed
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored document: field name to value
pub type Document = BTreeMap<String, DocValue>;

/// Tagged union of everything a stored document field can hold.
///
/// `Id` is the store-native identifier leaf; every other variant maps 1:1 to
/// a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Id(DocumentId),
    Array(Vec<DocValue>),
    Map(BTreeMap<String, DocValue>),
}

impl DocValue {
    /// Convert an inbound JSON value into the store representation.
    ///
    /// Whole numbers become `Int`, everything else numeric becomes `Float`.
    /// JSON has no identifier type, so this never produces `Id`.
    pub fn from_json(value: Json) -> Self {
        match value {
            Json::Null => DocValue::Null,
            Json::Bool(b) => DocValue::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DocValue::Int(i)
                } else {
                    DocValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            Json::String(s) => DocValue::Text(s),
            Json::Array(items) => {
                DocValue::Array(items.into_iter().map(DocValue::from_json).collect())
            }
            Json::Object(map) => DocValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, DocValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert to a JSON value for responses.
    ///
    /// Identifier leaves render as their string form; non-finite floats
    /// render as null (JSON cannot carry them).
    pub fn to_json(&self) -> Json {
        match self {
            DocValue::Null => Json::Null,
            DocValue::Bool(b) => Json::Bool(*b),
            DocValue::Int(i) => Json::from(*i),
            DocValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            DocValue::Text(s) => Json::String(s.clone()),
            DocValue::Id(id) => Json::String(id.to_string()),
            DocValue::Array(items) => Json::Array(items.iter().map(DocValue::to_json).collect()),
            DocValue::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}
