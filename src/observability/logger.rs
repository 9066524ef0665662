//! Structured JSON logger
//!
//! - One log line = one event
//! - Deterministic key ordering (alphabetical)
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value as Json};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues (e.g. a failed cascade seed)
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous JSON-line logger
pub struct Logger;

impl Logger {
    /// Log a normal-operations event to stdout
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Log a recoverable issue to stderr
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields, &mut io::stderr());
    }

    /// Log an operation failure to stderr
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields, &mut io::stderr());
    }

    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        let line = Self::render(severity, event, fields);
        // Logging must never take the process down
        let _ = writeln!(writer, "{}", line);
    }

    /// Render one event as a JSON line; keys come out alphabetically because
    /// the map is ordered
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut line = Map::new();
        line.insert(
            "ts".to_string(),
            Json::String(chrono::Utc::now().to_rfc3339()),
        );
        line.insert(
            "severity".to_string(),
            Json::String(severity.as_str().to_string()),
        );
        line.insert("event".to_string(), Json::String(event.to_string()));
        for (key, value) in fields {
            line.insert(key.to_string(), Json::String(value.to_string()));
        }

        Json::Object(line).to_string()
    }
}
