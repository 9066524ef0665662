//! # Resource Registry
//!
//! The fixed mapping from a URL resource name to a record kind, its schema,
//! and its storage collection. Built once at process start, never mutated.
//! Twelve kinds, no dynamic registration.

use std::collections::{BTreeMap, HashMap};

use serde_json::json;

use super::types::{FieldDef, FieldType, Schema};

const DB_TYPES: &[&str] = &["PostgreSQL", "MySQL", "MongoDB"];
const PROJECT_STATUSES: &[&str] = &["active", "provisioning", "error"];
const LOG_LEVELS: &[&str] = &["info", "warning", "error"];
const REL_TYPES: &[&str] = &["One-to-One", "One-to-Many", "Many-to-Many"];
const REFERENTIAL_ACTIONS: &[&str] = &["NO ACTION", "CASCADE", "SET NULL", "RESTRICT"];
const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE"];
const ENVIRONMENTS: &[&str] = &["Dev", "QA", "Production"];
const DEPLOY_STATUSES: &[&str] = &["Success", "Pending", "Failed"];
const MEMBER_STATUSES: &[&str] = &["invited", "active", "removed"];
const METRICS: &[&str] = &["api_usage", "response_time", "error_rate"];

/// The twelve fixed resource kinds exposed by the REST surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Projects,
    Tables,
    Relationships,
    ApiEndpoints,
    GraphqlSchemas,
    AuthSettings,
    Roles,
    Deployments,
    ApiKeys,
    TeamMembers,
    Activity,
    Analytics,
}

impl ResourceKind {
    /// Every kind, in registry order
    pub const ALL: [ResourceKind; 12] = [
        ResourceKind::Projects,
        ResourceKind::Tables,
        ResourceKind::Relationships,
        ResourceKind::ApiEndpoints,
        ResourceKind::GraphqlSchemas,
        ResourceKind::AuthSettings,
        ResourceKind::Roles,
        ResourceKind::Deployments,
        ResourceKind::ApiKeys,
        ResourceKind::TeamMembers,
        ResourceKind::Activity,
        ResourceKind::Analytics,
    ];

    /// The resource name as it appears in the URL path
    pub fn path_name(&self) -> &'static str {
        match self {
            ResourceKind::Projects => "projects",
            ResourceKind::Tables => "tables",
            ResourceKind::Relationships => "relationships",
            ResourceKind::ApiEndpoints => "api-endpoints",
            ResourceKind::GraphqlSchemas => "graphql-schemas",
            ResourceKind::AuthSettings => "auth-settings",
            ResourceKind::Roles => "roles",
            ResourceKind::Deployments => "deployments",
            ResourceKind::ApiKeys => "api-keys",
            ResourceKind::TeamMembers => "team-members",
            ResourceKind::Activity => "activity",
            ResourceKind::Analytics => "analytics",
        }
    }

    /// Resolve a URL path segment to a kind; `None` for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.path_name() == name)
    }

    fn schema(&self) -> Schema {
        match self {
            ResourceKind::Projects => project_schema(),
            ResourceKind::Tables => table_schema(),
            ResourceKind::Relationships => relationship_schema(),
            ResourceKind::ApiEndpoints => api_endpoint_schema(),
            ResourceKind::GraphqlSchemas => graphql_schema(),
            ResourceKind::AuthSettings => auth_settings_schema(),
            ResourceKind::Roles => role_schema(),
            ResourceKind::Deployments => deployment_schema(),
            ResourceKind::ApiKeys => api_key_schema(),
            ResourceKind::TeamMembers => team_member_schema(),
            ResourceKind::Activity => activity_schema(),
            ResourceKind::Analytics => analytics_schema(),
        }
    }
}

fn fields(defs: Vec<(&'static str, FieldDef)>) -> BTreeMap<&'static str, FieldDef> {
    defs.into_iter().collect()
}

fn project_schema() -> Schema {
    Schema::new(
        "Project",
        fields(vec![
            ("name", FieldDef::required(FieldType::Text)),
            (
                "db_type",
                FieldDef::with_default(FieldType::Variant { allowed: DB_TYPES }, json!("MongoDB")),
            ),
            (
                "region",
                FieldDef::with_default(FieldType::Text, json!("us-east-1")),
            ),
            (
                "status",
                FieldDef::with_default(
                    FieldType::Variant {
                        allowed: PROJECT_STATUSES,
                    },
                    json!("active"),
                ),
            ),
        ]),
    )
}

fn table_schema() -> Schema {
    Schema::new(
        "TableDef",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            ("name", FieldDef::required(FieldType::Text)),
            ("description", FieldDef::optional(FieldType::Text)),
            ("columns", FieldDef::with_default(FieldType::Array, json!([]))),
        ]),
    )
}

fn relationship_schema() -> Schema {
    Schema::new(
        "Relationship",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            ("name", FieldDef::required(FieldType::Text)),
            (
                "rel_type",
                FieldDef::required(FieldType::Variant { allowed: REL_TYPES }),
            ),
            ("source_table_id", FieldDef::required(FieldType::Text)),
            ("target_table_id", FieldDef::required(FieldType::Text)),
            (
                "on_delete",
                FieldDef::with_default(
                    FieldType::Variant {
                        allowed: REFERENTIAL_ACTIONS,
                    },
                    json!("NO ACTION"),
                ),
            ),
            (
                "on_update",
                FieldDef::with_default(
                    FieldType::Variant {
                        allowed: REFERENTIAL_ACTIONS,
                    },
                    json!("NO ACTION"),
                ),
            ),
        ]),
    )
}

fn api_endpoint_schema() -> Schema {
    Schema::new(
        "ApiEndpoint",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            (
                "method",
                FieldDef::required(FieldType::Variant {
                    allowed: HTTP_METHODS,
                }),
            ),
            ("url", FieldDef::required(FieldType::Text)),
            (
                "auth_required",
                FieldDef::with_default(FieldType::Bool, json!(true)),
            ),
            ("description", FieldDef::optional(FieldType::Text)),
        ]),
    )
}

fn graphql_schema() -> Schema {
    Schema::new(
        "GraphQLSchema",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            ("schema", FieldDef::required(FieldType::Object)),
        ]),
    )
}

fn auth_settings_schema() -> Schema {
    Schema::new(
        "AuthSettings",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            (
                "jwt_enabled",
                FieldDef::with_default(FieldType::Bool, json!(true)),
            ),
            (
                "oauth_google",
                FieldDef::with_default(FieldType::Bool, json!(false)),
            ),
            (
                "oauth_github",
                FieldDef::with_default(FieldType::Bool, json!(false)),
            ),
            (
                "oauth_microsoft",
                FieldDef::with_default(FieldType::Bool, json!(false)),
            ),
        ]),
    )
}

fn role_schema() -> Schema {
    Schema::new(
        "Role",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            ("name", FieldDef::required(FieldType::Text)),
            ("description", FieldDef::optional(FieldType::Text)),
            (
                "permissions",
                FieldDef::with_default(FieldType::Array, json!([])),
            ),
        ]),
    )
}

fn deployment_schema() -> Schema {
    Schema::new(
        "Deployment",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            (
                "environment",
                FieldDef::required(FieldType::Variant {
                    allowed: ENVIRONMENTS,
                }),
            ),
            (
                "status",
                FieldDef::with_default(
                    FieldType::Variant {
                        allowed: DEPLOY_STATUSES,
                    },
                    json!("Pending"),
                ),
            ),
            ("logs", FieldDef::optional(FieldType::Text)),
        ]),
    )
}

fn api_key_schema() -> Schema {
    Schema::new(
        "ApiKey",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            ("name", FieldDef::required(FieldType::Text)),
            ("key", FieldDef::required(FieldType::Text)),
        ]),
    )
}

fn team_member_schema() -> Schema {
    Schema::new(
        "TeamMember",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            ("name", FieldDef::required(FieldType::Text)),
            ("role", FieldDef::required(FieldType::Text)),
            (
                "status",
                FieldDef::with_default(
                    FieldType::Variant {
                        allowed: MEMBER_STATUSES,
                    },
                    json!("invited"),
                ),
            ),
        ]),
    )
}

fn activity_schema() -> Schema {
    Schema::new(
        "ActivityLog",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            ("action", FieldDef::required(FieldType::Text)),
            ("details", FieldDef::optional(FieldType::Text)),
            ("actor", FieldDef::optional(FieldType::Text)),
            (
                "level",
                FieldDef::with_default(FieldType::Variant { allowed: LOG_LEVELS }, json!("info")),
            ),
        ]),
    )
}

fn analytics_schema() -> Schema {
    Schema::new(
        "AnalyticsPoint",
        fields(vec![
            ("project_id", FieldDef::required(FieldType::Text)),
            (
                "metric",
                FieldDef::required(FieldType::Variant { allowed: METRICS }),
            ),
            ("timestamp", FieldDef::required(FieldType::Int)),
            ("value", FieldDef::required(FieldType::Float)),
        ]),
    )
}

/// One registry entry: kind, schema, and its derived collection name
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub kind: ResourceKind,
    pub schema: Schema,
    pub collection: String,
}

/// Immutable resource registry, built once at process start
pub struct Registry {
    entries: HashMap<&'static str, RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        let entries = ResourceKind::ALL
            .iter()
            .map(|&kind| {
                let schema = kind.schema();
                let collection = schema.collection();
                (
                    kind.path_name(),
                    RegistryEntry {
                        kind,
                        schema,
                        collection,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    /// Resolve a URL resource name; `None` signals an unknown kind
    pub fn resolve(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    /// Entry for a known kind
    pub fn entry(&self, kind: ResourceKind) -> &RegistryEntry {
        &self.entries[kind.path_name()]
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_twelve_kinds_resolve() {
        let registry = Registry::new();
        for kind in ResourceKind::ALL {
            let entry = registry.resolve(kind.path_name()).unwrap();
            assert_eq!(entry.kind, kind);
        }
    }

    #[test]
    fn test_unknown_kind_does_not_resolve() {
        let registry = Registry::new();
        assert!(registry.resolve("unknown-kind").is_none());
        assert!(registry.resolve("").is_none());
        // Collection names are not resource names
        assert!(registry.resolve("tabledef").is_none());
    }

    #[test]
    fn test_parse_matches_path_names() {
        assert_eq!(
            ResourceKind::parse("api-endpoints"),
            Some(ResourceKind::ApiEndpoints)
        );
        assert_eq!(ResourceKind::parse("tables"), Some(ResourceKind::Tables));
        assert_eq!(ResourceKind::parse("Table"), None);
    }

    #[test]
    fn test_collection_names_are_case_folded_schema_names() {
        let registry = Registry::new();
        assert_eq!(registry.entry(ResourceKind::Tables).collection, "tabledef");
        assert_eq!(
            registry.entry(ResourceKind::GraphqlSchemas).collection,
            "graphqlschema"
        );
        assert_eq!(
            registry.entry(ResourceKind::Analytics).collection,
            "analyticspoint"
        );
        assert_eq!(registry.entry(ResourceKind::Projects).collection, "project");
    }

    #[test]
    fn test_collection_names_are_distinct() {
        let registry = Registry::new();
        let mut names: Vec<_> = ResourceKind::ALL
            .iter()
            .map(|&k| registry.entry(k).collection.clone())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_project_schema_defaults() {
        let registry = Registry::new();
        let schema = &registry.entry(ResourceKind::Projects).schema;
        assert_eq!(
            schema.fields["db_type"].default,
            Some(serde_json::json!("MongoDB"))
        );
        assert_eq!(
            schema.fields["region"].default,
            Some(serde_json::json!("us-east-1"))
        );
        assert!(schema.fields["name"].required);
    }
}
