//! # Store Errors
//!
//! Error types for the document store module.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No store was ever connected; write paths must fail fast
    #[error("Database not available")]
    Unavailable,

    /// Internal store failure (e.g. a poisoned lock)
    #[error("Store internal error: {0}")]
    Internal(String),
}
