//! The [`MetadataStore`] trait defining the lookup contract.
//!
//! Both backends implement this trait so the server can be tested against the
//! in-memory store and run against SQLite without changing handler code.

use crate::error::StorageError;
use crate::types::AlgorithmMetadata;

/// Key → record lookup for algorithm metadata.
///
/// The trait is synchronous; the server serializes access behind a mutex.
pub trait MetadataStore {
    /// Returns the active record stored under `key`.
    ///
    /// Missing and inactive keys both yield
    /// [`StorageError::AlgorithmNotFound`].
    fn get_algorithm(&self, key: &str) -> Result<AlgorithmMetadata, StorageError>;

    /// Lists all active records ordered by key.
    fn list_algorithms(&self) -> Result<Vec<AlgorithmMetadata>, StorageError>;

    /// Inserts a record unless one with the same key already exists.
    ///
    /// Returns `true` when a row was written.
    fn insert_algorithm(&mut self, record: &AlgorithmMetadata) -> Result<bool, StorageError>;
}
