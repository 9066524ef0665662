//! # Response Types
//!
//! Standard response bodies for the CRUD surface.

use serde::Serialize;

/// Response carrying a newly created record's id
#[derive(Debug, Clone, Serialize)]
pub struct IdResponse {
    pub id: String,
}

impl IdResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Plain acknowledgement body for update/delete
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&IdResponse::new("abc")).unwrap();
        assert_eq!(json, r#"{"id":"abc"}"#);

        let json = serde_json::to_string(&StatusResponse::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
