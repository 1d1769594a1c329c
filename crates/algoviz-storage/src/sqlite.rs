//! SQLite implementation of [`MetadataStore`].
//!
//! [`SqliteStore`] keeps one row per algorithm in the `algorithms` table.
//! The schema is created by the migrations in [`crate::schema`].

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::traits::MetadataStore;
use crate::types::AlgorithmMetadata;

const SELECT_COLUMNS: &str = "SELECT key, name, short_description, time_complexity, best_case,
        average_case, worst_case, space_complexity, difficulty, category, is_active
     FROM algorithms";

/// SQLite-backed implementation of [`MetadataStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    fn row_to_metadata(row: &Row<'_>) -> rusqlite::Result<AlgorithmMetadata> {
        Ok(AlgorithmMetadata {
            key: row.get(0)?,
            name: row.get(1)?,
            short_description: row.get(2)?,
            time_complexity: row.get(3)?,
            best_case: row.get(4)?,
            average_case: row.get(5)?,
            worst_case: row.get(6)?,
            space_complexity: row.get(7)?,
            difficulty: row.get(8)?,
            category: row.get(9)?,
            is_active: row.get(10)?,
        })
    }
}

impl MetadataStore for SqliteStore {
    fn get_algorithm(&self, key: &str) -> Result<AlgorithmMetadata, StorageError> {
        let sql = format!("{} WHERE key = ?1 AND is_active = 1", SELECT_COLUMNS);
        self.conn
            .query_row(&sql, params![key], Self::row_to_metadata)
            .optional()?
            .ok_or_else(|| StorageError::AlgorithmNotFound(key.to_string()))
    }

    fn list_algorithms(&self) -> Result<Vec<AlgorithmMetadata>, StorageError> {
        let sql = format!("{} WHERE is_active = 1 ORDER BY key ASC", SELECT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::row_to_metadata)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn insert_algorithm(&mut self, record: &AlgorithmMetadata) -> Result<bool, StorageError> {
        let written = self.conn.execute(
            "INSERT OR IGNORE INTO algorithms (
                 key, name, short_description, time_complexity, best_case,
                 average_case, worst_case, space_complexity, difficulty, category, is_active
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                record.key,
                record.name,
                record.short_description,
                record.time_complexity,
                record.best_case,
                record.average_case,
                record.worst_case,
                record.space_complexity,
                record.difficulty,
                record.category,
                record.is_active,
            ],
        )?;
        Ok(written > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_algorithms, seed_builtin};

    #[test]
    fn seeded_store_serves_builtin_records() {
        let mut store = SqliteStore::in_memory().unwrap();
        seed_builtin(&mut store).unwrap();

        let record = store.get_algorithm("n-queens").unwrap();
        assert_eq!(record.name, "N Queens");
        assert_eq!(record.category, "Backtracking");
        assert!(record.is_active);

        let keys: Vec<String> = store
            .list_algorithms()
            .unwrap()
            .into_iter()
            .map(|r| r.key)
            .collect();
        assert_eq!(keys, vec!["bubble-sort", "linear-search", "n-queens"]);
    }

    #[test]
    fn reseeding_is_idempotent() {
        let mut store = SqliteStore::in_memory().unwrap();
        assert_eq!(seed_builtin(&mut store).unwrap(), builtin_algorithms().len());
        assert_eq!(seed_builtin(&mut store).unwrap(), 0);
        assert_eq!(store.list_algorithms().unwrap().len(), 3);
    }

    #[test]
    fn unknown_key_is_not_found() {
        let store = SqliteStore::in_memory().unwrap();
        let err = store.get_algorithm("quick-sort").unwrap_err();
        assert!(matches!(err, StorageError::AlgorithmNotFound(k) if k == "quick-sort"));
    }

    #[test]
    fn inactive_records_are_hidden() {
        let mut store = SqliteStore::in_memory().unwrap();
        let mut record = builtin_algorithms().remove(0);
        record.is_active = false;
        store.insert_algorithm(&record).unwrap();

        assert!(store.get_algorithm(&record.key).is_err());
        assert!(store.list_algorithms().unwrap().is_empty());
    }

    #[test]
    fn records_survive_reopening_the_file() {
        let path = std::env::temp_dir().join(format!(
            "algoviz_storage_test_{}.db",
            std::process::id()
        ));
        let path = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        {
            let mut store = SqliteStore::new(&path).unwrap();
            seed_builtin(&mut store).unwrap();
        }
        let store = SqliteStore::new(&path).unwrap();
        assert_eq!(store.get_algorithm("bubble-sort").unwrap().worst_case, "O(n²)");

        let _ = std::fs::remove_file(&path);
    }
}
