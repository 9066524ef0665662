//! # HTTP Server
//!
//! Axum router wiring for the REST surface: diagnostics routes, the rich
//! project routes, and the generic `/{resource}` CRUD routes, with CORS
//! applied across the board.

pub mod config;
pub mod diagnostics;
pub mod resource_routes;
pub mod server;

pub use config::{ServerConfig, StoreConfig};
pub use server::{AppState, HttpServer};
