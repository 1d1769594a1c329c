//! Algorithm metadata lookup for algoviz.
//!
//! Provides the [`MetadataStore`] trait plus the [`InMemoryStore`] and
//! [`SqliteStore`] backends. Records are seeded once at startup with
//! [`seed_builtin`] and read-only afterwards.
//!
//! # Modules
//!
//! - [`catalog`]: the built-in algorithm records and the seeding routine
//! - [`error`]: StorageError enum with all failure modes
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: migration setup for the SQLite backend
//! - [`sqlite`]: SqliteStore implementation
//! - [`traits`]: MetadataStore trait definition
//! - [`types`]: AlgorithmMetadata record

pub mod catalog;
pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use catalog::{builtin_algorithms, seed_builtin};
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::MetadataStore;
pub use types::AlgorithmMetadata;
