//! backendforge - schema-driven REST backend for the BackendForge project designer
//!
//! A single set of generic CRUD handlers serves twelve fixed record kinds
//! (projects, tables, relationships, ...) by resolving each kind's schema and
//! storage collection from the resource name in the URL path.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod resource;
pub mod schema;
pub mod store;
