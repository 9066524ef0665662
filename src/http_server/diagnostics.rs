//! Diagnostics HTTP Routes
//!
//! Liveness, health, and the store diagnostic endpoint. These never error,
//! even with the store down; they report what they see.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use super::server::AppState;

/// Collection-name cap for the diagnostic response
const MAX_COLLECTIONS: usize = 20;

/// Cap on error detail echoed into the diagnostic response
const MAX_ERROR_DETAIL: usize = 80;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Store diagnostic response
#[derive(Debug, Serialize)]
pub struct StoreDiagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Liveness message
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "BackendForge API running" }))
}

/// Health check: "ok" when a store is connected, "error" otherwise
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if state.handler.store().is_connected() {
        "ok"
    } else {
        "error"
    };
    Json(HealthResponse {
        status: status.to_string(),
    })
}

/// Store diagnostic: env-var presence, connectivity, collection names
pub async fn store_diagnostics(State(state): State<Arc<AppState>>) -> Json<StoreDiagnostics> {
    let store = state.handler.store();
    let connected = store.is_connected();

    // A connected store whose listing fails is reported as such, not as a
    // connected store with no collections
    let (database, collections) = if connected {
        match store.collection_names() {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                ("available".to_string(), names)
            }
            Err(err) => {
                let mut detail = err.to_string();
                detail.truncate(MAX_ERROR_DETAIL);
                (format!("available but listing failed: {detail}"), Vec::new())
            }
        }
    } else {
        ("not available".to_string(), Vec::new())
    };

    let presence = |set: bool| {
        let text = if set { "set" } else { "not set" };
        text.to_string()
    };
    let connection_status = if connected { "connected" } else { "not connected" };

    Json(StoreDiagnostics {
        backend: "running".to_string(),
        database,
        database_url: presence(state.store_config.url.is_some()),
        database_name: presence(state.store_config.database.is_some()),
        connection_status: connection_status.to_string(),
        collections,
    })
}
