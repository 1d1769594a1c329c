//! Application state shared across handlers.
//!
//! The metadata store sits behind `Arc<tokio::sync::Mutex<>>`:
//! `rusqlite::Connection` is `!Sync`, and an async-aware mutex lets handlers
//! await the lock without blocking the runtime. Trace requests never touch
//! the store, so they do not contend on this lock.

use std::sync::Arc;

use algoviz_storage::{seed_builtin, InMemoryStore, MetadataStore, SqliteStore};

use crate::config::{ServerConfig, TraceLimits};
use crate::error::ApiError;

/// Boxed metadata backend.
pub type SharedCatalog = Arc<tokio::sync::Mutex<Box<dyn MetadataStore + Send>>>;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Algorithm metadata lookup, seeded at construction.
    pub catalog: SharedCatalog,
    /// Ceilings applied to every trace request.
    pub limits: TraceLimits,
}

impl AppState {
    /// Opens the SQLite database named in `config` and seeds the built-in
    /// algorithm records.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let mut store = SqliteStore::new(&config.db_path)?;
        let seeded = seed_builtin(&mut store)?;
        tracing::info!(db_path = %config.db_path, seeded, "metadata store ready");
        Ok(Self::from_store(Box::new(store), config.limits))
    }

    /// Creates state backed by a seeded in-memory store (for testing).
    pub fn in_memory(limits: TraceLimits) -> Result<Self, ApiError> {
        let mut store = InMemoryStore::new();
        seed_builtin(&mut store)?;
        Ok(Self::from_store(Box::new(store), limits))
    }

    fn from_store(store: Box<dyn MetadataStore + Send>, limits: TraceLimits) -> Self {
        AppState {
            catalog: Arc::new(tokio::sync::Mutex::new(store)),
            limits,
        }
    }
}
