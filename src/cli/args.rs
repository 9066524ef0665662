//! CLI argument definitions using clap
//!
//! Commands:
//! - backendforge serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// BackendForge - schema-driven REST backend for the project designer
#[derive(Parser, Debug)]
#[command(name = "backendforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides the default 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
