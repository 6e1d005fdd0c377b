//! Error types for the SQLite backend

use std::path::PathBuf;

use thiserror::Error;
use uksi_core::storage::StoreError;

/// Result type for SQLite backend operations
pub type Result<T> = std::result::Result<T, SqliteError>;

/// Errors that can occur while opening or querying the SQLite databases
#[derive(Debug, Error)]
pub enum SqliteError {
    /// Database connection or query error
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Database file does not exist
    #[error("database not found at {}", .0.display())]
    DatabaseMissing(PathBuf),

    /// Database exists but lacks a table the backend needs
    #[error("database at {} is missing table '{table}'", .path.display())]
    MissingTable { path: PathBuf, table: &'static str },

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert SqliteError to StoreError for the storage traits
impl From<SqliteError> for StoreError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Database(e) => StoreError::Backend(format!("SQLite: {}", e)),
            SqliteError::Migration(msg) => StoreError::Backend(format!("Migration: {}", msg)),
            SqliteError::Io(e) => StoreError::Backend(format!("IO: {}", e)),
            e @ (SqliteError::DatabaseMissing(_)
            | SqliteError::MissingTable { .. }
            | SqliteError::Config(_)
            | SqliteError::Toml(_)) => StoreError::Config(e.to_string()),
        }
    }
}
