//! # HTTP Server
//!
//! Builds the application state (registry, store adapter, resource handler)
//! once at startup and wires the full route table. Static `/projects` routes
//! are registered alongside the dynamic `/{resource}` routes; the router
//! prefers the static match.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::resource::ResourceHandler;
use crate::schema::Registry;
use crate::store::{MemoryBackend, StoreAdapter};

use super::config::{ServerConfig, StoreConfig};
use super::diagnostics;
use super::resource_routes;

/// Shared application state, constructed once and injected into handlers
pub struct AppState {
    pub handler: ResourceHandler,
    pub store_config: StoreConfig,
}

/// HTTP server for the BackendForge API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Build the server: connect the store (when configured), construct the
    /// registry and handler, and wire the routes
    pub fn new(config: ServerConfig, store_config: StoreConfig) -> Self {
        let store = if store_config.is_configured() {
            StoreAdapter::connected(Arc::new(MemoryBackend::new()))
        } else {
            StoreAdapter::disconnected()
        };
        let handler = ResourceHandler::new(Arc::new(Registry::new()), store);
        let state = Arc::new(AppState {
            handler,
            store_config,
        });

        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse::<HeaderValue>().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Diagnostics
            .route("/", get(diagnostics::root))
            .route("/health", get(diagnostics::health))
            .route("/test", get(diagnostics::store_diagnostics))
            // Project routes; static segments win over /:resource
            .route(
                "/projects",
                get(resource_routes::list_projects).post(resource_routes::create_project),
            )
            .route(
                "/projects/:id",
                put(resource_routes::update_project).delete(resource_routes::delete_project),
            )
            // Generic registry-dispatched CRUD
            .route(
                "/:resource",
                get(resource_routes::list_resource).post(resource_routes::create_resource),
            )
            .route(
                "/:resource/:id",
                put(resource_routes::update_resource).delete(resource_routes::delete_resource),
            )
            .with_state(state)
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        Logger::info("server_started", &[("addr", &addr)]);

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
