//! # CLI
//!
//! Argument parsing and command dispatch for the `backendforge` binary.

pub mod args;
pub mod commands;
pub mod errors;

pub use errors::{CliError, CliResult};

use args::{Cli, Command};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { host, port } => commands::serve(host, port),
    }
}
