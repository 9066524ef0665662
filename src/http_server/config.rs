//! HTTP Server Configuration
//!
//! Server and store settings, read from the environment once at process
//! start: `PORT`, `CORS_ORIGINS`, `DATABASE_URL`, `DATABASE_NAME`.

use serde::{Deserialize, Serialize};

/// Environment variable holding the store connection string
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable holding the database name
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";
/// Environment variable holding the listening port
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding comma-separated CORS origins
pub const ENV_CORS_ORIGINS: &str = "CORS_ORIGINS";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Read server settings from the environment
    pub fn from_env() -> Self {
        let port = std::env::var(ENV_PORT)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);

        let cors_origins = std::env::var(ENV_CORS_ORIGINS)
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: default_host(),
            port,
            cors_origins,
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Document store configuration
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Store connection string; absence means the store is never connected
    pub url: Option<String>,
    /// Database name
    pub database: Option<String>,
}

impl StoreConfig {
    /// Read store settings from the environment
    pub fn from_env() -> Self {
        Self {
            url: std::env::var(ENV_DATABASE_URL).ok(),
            database: std::env::var(ENV_DATABASE_NAME).ok(),
        }
    }

    /// Whether enough configuration is present to connect a store
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}
