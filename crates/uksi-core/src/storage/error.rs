//! Storage error types

use thiserror::Error;

/// Errors that can occur during index or history lookups
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Taxon key does not exist in the reference dataset
    #[error("taxon not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Query error
    #[error("query error: {0}")]
    Query(String),

    /// Reference dataset missing or misconfigured
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
