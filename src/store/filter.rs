//! # Find Filters
//!
//! Exact-match conjunction over top-level document fields. An empty filter
//! matches every document in a collection.

use std::collections::BTreeMap;

use super::value::{DocValue, Document};

/// Exact-match filter: every entry must equal the document's field value
#[derive(Debug, Clone, Default)]
pub struct Filter {
    fields: BTreeMap<String, DocValue>,
}

impl Filter {
    /// Filter that matches every document
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single-field equality filter
    pub fn eq(field: impl Into<String>, value: DocValue) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.into(), value);
        Self { fields }
    }

    /// True when every filter field equals the document's value for it
    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }
}
