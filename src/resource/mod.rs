//! # Generic Resource Handling
//!
//! The dispatch core: four CRUD operations parameterized by a resource-kind
//! name resolved through the registry, plus the project specialization that
//! seeds dependent default records on create.

pub mod errors;
pub mod handler;
pub mod project;
pub mod response;

pub use errors::{ResourceError, ResourceResult};
pub use handler::ResourceHandler;
pub use project::SEED_ENVIRONMENTS;
pub use response::{IdResponse, StatusResponse};
