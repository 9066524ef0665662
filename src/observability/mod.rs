//! # Observability
//!
//! Structured JSON logging for server lifecycle and write-path events.

pub mod logger;

pub use logger::{Logger, Severity};
