//! Resource HTTP Routes
//!
//! Axum handlers for the project routes and the generic `/{resource}` CRUD
//! routes. All of them are thin: extract, delegate to the resource handler,
//! wrap the result.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::resource::{IdResponse, ResourceError, StatusResponse};

use super::server::AppState;

/// Query parameters accepted by list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub project_id: Option<String>,
}

// ---------- Projects ----------

/// List all projects (no filter)
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, ResourceError> {
    let records = state.handler.list("projects", None)?;
    Ok(Json(records))
}

/// Create a project; seeds auth settings and per-environment deployments
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<IdResponse>, ResourceError> {
    let id = state.handler.create_project(&payload)?;
    Ok(Json(IdResponse::new(id.to_string())))
}

/// Update a project (generic merge-update semantics)
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<StatusResponse>, ResourceError> {
    state.handler.update("projects", &id, &payload)?;
    Ok(Json(StatusResponse::ok()))
}

/// Delete a project; dependent records are left behind
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ResourceError> {
    state.handler.delete_project(&id)?;
    Ok(Json(StatusResponse::ok()))
}

// ---------- Generic resources ----------

/// List records of a kind, optionally filtered by project
pub async fn list_resource(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Value>>, ResourceError> {
    let records = state
        .handler
        .list(&resource, query.project_id.as_deref())?;
    Ok(Json(records))
}

/// Create a record of a kind; body validated against the kind's schema
pub async fn create_resource(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<IdResponse>, ResourceError> {
    let id = state.handler.create(&resource, &payload)?;
    Ok(Json(IdResponse::new(id.to_string())))
}

/// Best-effort-validated raw merge update
pub async fn update_resource(
    State(state): State<Arc<AppState>>,
    Path((resource, id)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> Result<Json<StatusResponse>, ResourceError> {
    state.handler.update(&resource, &id, &payload)?;
    Ok(Json(StatusResponse::ok()))
}

/// Delete a record by id
pub async fn delete_resource(
    State(state): State<Arc<AppState>>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<StatusResponse>, ResourceError> {
    state.handler.delete(&resource, &id)?;
    Ok(Json(StatusResponse::ok()))
}
