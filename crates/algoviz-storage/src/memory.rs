//! In-memory implementation of [`MetadataStore`].
//!
//! [`InMemoryStore`] has the same semantics as the SQLite backend (insert-or-
//! ignore, inactive records hidden, listings ordered by key) and backs the
//! server tests.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::MetadataStore;
use crate::types::AlgorithmMetadata;

/// Key-ordered store backed by a `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: BTreeMap<String, AlgorithmMetadata>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl MetadataStore for InMemoryStore {
    fn get_algorithm(&self, key: &str) -> Result<AlgorithmMetadata, StorageError> {
        self.records
            .get(key)
            .filter(|r| r.is_active)
            .cloned()
            .ok_or_else(|| StorageError::AlgorithmNotFound(key.to_string()))
    }

    fn list_algorithms(&self) -> Result<Vec<AlgorithmMetadata>, StorageError> {
        Ok(self
            .records
            .values()
            .filter(|r| r.is_active)
            .cloned()
            .collect())
    }

    fn insert_algorithm(&mut self, record: &AlgorithmMetadata) -> Result<bool, StorageError> {
        if self.records.contains_key(&record.key) {
            return Ok(false);
        }
        self.records.insert(record.key.clone(), record.clone());
        Ok(true)
    }
}
