//! # Project Lifecycle
//!
//! Projects are the root aggregate. Creating one seeds dependent defaults:
//! one auth-settings record and one deployment per environment, all
//! referencing the new project's id. Seeding is best-effort and not atomic;
//! a failed seed is logged and the project creation still succeeds.
//!
//! Deleting a project removes only the project record. Dependent records are
//! deliberately left orphaned.

use serde_json::json;
use serde_json::Value as Json;

use crate::observability::Logger;
use crate::store::DocumentId;

use super::errors::ResourceResult;
use super::handler::ResourceHandler;

/// Environments seeded for every new project
pub const SEED_ENVIRONMENTS: [&str; 3] = ["Dev", "QA", "Production"];

impl ResourceHandler {
    /// Create a project and seed its default dependent records
    pub fn create_project(&self, payload: &Json) -> ResourceResult<DocumentId> {
        let project_id = self.create("projects", payload)?;
        self.seed_project_defaults(project_id);
        Ok(project_id)
    }

    /// Delete a project record; dependents stay behind
    pub fn delete_project(&self, id: &str) -> ResourceResult<()> {
        self.delete("projects", id)
    }

    /// Best-effort seeding of auth settings and per-environment deployments.
    /// Sub-failures are logged, never surfaced to the caller.
    fn seed_project_defaults(&self, project_id: DocumentId) {
        let project_ref = project_id.to_string();

        if let Err(err) = self.create("auth-settings", &json!({ "project_id": project_ref })) {
            let detail = err.to_string();
            Logger::warn(
                "project_seed_failed",
                &[("record", "auth-settings"), ("detail", &detail)],
            );
        }

        for environment in SEED_ENVIRONMENTS {
            let payload = json!({ "project_id": project_ref, "environment": environment });
            if let Err(err) = self.create("deployments", &payload) {
                let detail = err.to_string();
                Logger::warn(
                    "project_seed_failed",
                    &[
                        ("record", "deployments"),
                        ("environment", environment),
                        ("detail", &detail),
                    ],
                );
            }
        }
    }
}
