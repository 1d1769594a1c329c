//! Storage error types for algoviz-storage.

use thiserror::Error;

/// Errors produced by metadata store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An underlying SQLite call failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// No active algorithm is stored under the given key.
    #[error("algorithm not found: {0}")]
    AlgorithmNotFound(String),
}
