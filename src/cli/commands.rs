//! CLI command implementations
//!
//! `serve` reads configuration from the environment, applies CLI overrides,
//! and runs the HTTP server on a fresh tokio runtime.

use crate::http_server::{HttpServer, ServerConfig, StoreConfig};

use super::errors::CliResult;

/// Start the HTTP server
pub fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = ServerConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    let store_config = StoreConfig::from_env();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async { HttpServer::new(config, store_config).start().await })?;

    Ok(())
}
