//! End-to-end CRUD scenarios across the generic resource surface, running
//! against a connected in-memory store.

use std::sync::Arc;

use serde_json::{json, Value};

use backendforge::resource::{ResourceError, ResourceHandler};
use backendforge::schema::{Registry, ResourceKind};
use backendforge::store::{DocumentId, MemoryBackend, StoreAdapter};

fn handler() -> ResourceHandler {
    ResourceHandler::new(
        Arc::new(Registry::new()),
        StoreAdapter::connected(Arc::new(MemoryBackend::new())),
    )
}

/// A minimal valid create payload for each kind
fn sample_payload(kind: ResourceKind) -> Value {
    match kind {
        ResourceKind::Projects => json!({"name": "Shop"}),
        ResourceKind::Tables => json!({"project_id": "p1", "name": "users"}),
        ResourceKind::Relationships => json!({
            "project_id": "p1",
            "name": "user_orders",
            "rel_type": "One-to-Many",
            "source_table_id": "t1",
            "target_table_id": "t2",
        }),
        ResourceKind::ApiEndpoints => {
            json!({"project_id": "p1", "method": "GET", "url": "/users"})
        }
        ResourceKind::GraphqlSchemas => {
            json!({"project_id": "p1", "schema": {"types": []}})
        }
        ResourceKind::AuthSettings => json!({"project_id": "p1"}),
        ResourceKind::Roles => json!({"project_id": "p1", "name": "admin"}),
        ResourceKind::Deployments => {
            json!({"project_id": "p1", "environment": "Dev"})
        }
        ResourceKind::ApiKeys => {
            json!({"project_id": "p1", "name": "ci", "key": "secret"})
        }
        ResourceKind::TeamMembers => {
            json!({"project_id": "p1", "name": "Alex", "role": "dev"})
        }
        ResourceKind::Activity => {
            json!({"project_id": "p1", "action": "created table"})
        }
        ResourceKind::Analytics => json!({
            "project_id": "p1",
            "metric": "api_usage",
            "timestamp": 1700000000,
            "value": 12.5,
        }),
    }
}

#[test]
fn listing_returns_only_inserted_records_with_string_ids() {
    let handler = handler();

    for kind in ResourceKind::ALL {
        let name = kind.path_name();
        assert!(
            handler.list(name, None).unwrap().is_empty(),
            "{name} should start empty"
        );

        let id = handler.create(name, &sample_payload(kind)).unwrap();

        let records = handler.list(name, None).unwrap();
        assert_eq!(records.len(), 1, "{name} should hold one record");
        assert_eq!(
            records[0]["_id"],
            json!(id.to_string()),
            "{name} id should serialize to its string form"
        );
    }
}

#[test]
fn listing_preserves_store_order() {
    let handler = handler();
    for name in ["alpha", "beta", "gamma"] {
        handler
            .create("roles", &json!({"project_id": "p1", "name": name}))
            .unwrap();
    }

    let names: Vec<_> = handler
        .list("roles", None)
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn unknown_kind_is_rejected_everywhere() {
    let handler = handler();

    for result in [
        handler.list("unknown-kind", None).map(|_| ()),
        handler.create("unknown-kind", &json!({})).map(|_| ()),
        handler.update("unknown-kind", "x", &json!({})),
        handler.delete("unknown-kind", "x"),
    ] {
        assert!(matches!(result.unwrap_err(), ResourceError::UnknownKind(_)));
    }
}

#[test]
fn table_create_defaults_columns_to_empty_array() {
    let handler = handler();
    handler
        .create("tables", &json!({"project_id": "p1", "name": "users"}))
        .unwrap();

    let records = handler.list("tables", None).unwrap();
    assert_eq!(records[0]["columns"], json!([]));
}

#[test]
fn update_on_missing_id_mutates_nothing() {
    let handler = handler();
    let id = handler
        .create("tables", &json!({"project_id": "p1", "name": "users"}))
        .unwrap();

    let err = handler
        .update(
            "tables",
            &DocumentId::new().to_string(),
            &json!({"name": "renamed"}),
        )
        .unwrap_err();
    assert!(matches!(err, ResourceError::NotFound));

    let records = handler.list("tables", None).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["_id"], json!(id.to_string()));
    assert_eq!(records[0]["name"], json!("users"));
}

#[test]
fn update_persists_undeclared_fields_verbatim() {
    let handler = handler();
    let id = handler
        .create("roles", &json!({"project_id": "p1", "name": "admin"}))
        .unwrap();

    handler
        .update(
            "roles",
            &id.to_string(),
            &json!({"favorite_color": "teal", "nested": {"a": [1, 2]}}),
        )
        .unwrap();

    let records = handler.list("roles", None).unwrap();
    assert_eq!(records[0]["favorite_color"], json!("teal"));
    assert_eq!(records[0]["nested"], json!({"a": [1, 2]}));
    // Declared fields untouched by the merge survive
    assert_eq!(records[0]["name"], json!("admin"));
}

#[test]
fn create_rejects_explicit_null_for_defaulted_field() {
    let handler = handler();

    // db_type has a default and is not nullable
    let err = handler
        .create("projects", &json!({"name": "Shop", "db_type": null}))
        .unwrap_err();
    assert!(matches!(err, ResourceError::Validation(_)));
    assert!(err.to_string().contains("db_type"));
    assert!(handler.list("projects", None).unwrap().is_empty());

    // Nullable fields still take an explicit null
    handler
        .create(
            "tables",
            &json!({"project_id": "p1", "name": "users", "description": null}),
        )
        .unwrap();
    let records = handler.list("tables", None).unwrap();
    assert_eq!(records[0]["description"], json!(null));
}

#[test]
fn create_validation_error_carries_detail() {
    let handler = handler();

    let err = handler
        .create("deployments", &json!({"project_id": "p1", "environment": "Staging"}))
        .unwrap_err();
    assert!(matches!(err, ResourceError::Validation(_)));
    let detail = err.to_string();
    assert!(detail.contains("environment"));
    assert!(detail.contains("Staging"));
}

#[test]
fn delete_then_delete_again_is_not_found() {
    let handler = handler();
    let id = handler
        .create("api-keys", &json!({"project_id": "p1", "name": "ci", "key": "k"}))
        .unwrap();

    handler.delete("api-keys", &id.to_string()).unwrap();
    let err = handler.delete("api-keys", &id.to_string()).unwrap_err();
    assert!(matches!(err, ResourceError::NotFound));
}

#[test]
fn kinds_do_not_share_collections() {
    let handler = handler();
    handler
        .create("roles", &json!({"project_id": "p1", "name": "admin"}))
        .unwrap();

    assert!(handler.list("team-members", None).unwrap().is_empty());
    assert!(handler.list("tables", None).unwrap().is_empty());
}
