//! Migration setup for the SQLite backend.
//!
//! Uses `rusqlite_migration` to manage schema migrations via SQLite's
//! `user_version` pragma. Migrations are embedded at compile time via
//! `include_str!`.

use rusqlite::Connection;
use rusqlite_migration::{Migrations, M};

use crate::error::StorageError;

/// All schema migrations, applied in order via `user_version` tracking.
fn migrations() -> Migrations<'static> {
    Migrations::new(vec![M::up(include_str!(
        "migrations/001_initial_schema.sql"
    ))])
}

/// Opens (or creates) a SQLite database at `path` with WAL mode and all
/// pending migrations applied.
pub fn open_database(path: &str) -> Result<Connection, StorageError> {
    let mut conn = Connection::open(path)?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

/// Opens an in-memory SQLite database with all pending migrations applied.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let mut conn = Connection::open_in_memory()?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

fn configure_and_migrate(conn: &mut Connection) -> Result<(), StorageError> {
    // WAL lets lookups proceed while a seed write is in flight.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    migrations()
        .to_latest(conn)
        .map_err(|e| StorageError::Migration(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_valid() {
        assert!(migrations().validate().is_ok());
    }

    #[test]
    fn in_memory_database_has_algorithms_table() {
        let conn = open_in_memory().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM algorithms", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn algorithm_row_round_trips_every_column() {
        let conn = open_in_memory().unwrap();
        conn.execute(
            "INSERT INTO algorithms (key, name, short_description, time_complexity, best_case,
                 average_case, worst_case, space_complexity, difficulty, category)
             VALUES ('n-queens', 'N-Queens', 'Place queens', 'O(n!)', 'O(n!)',
                 'O(n!)', 'O(n!)', 'O(n)', 'Advanced', 'Backtracking')",
            [],
        )
        .unwrap();

        let (texts, is_active): (Vec<String>, bool) = conn
            .query_row(
                "SELECT key, name, short_description, time_complexity, best_case, average_case,
                     worst_case, space_complexity, difficulty, category, is_active
                 FROM algorithms WHERE key = 'n-queens'",
                [],
                |r| {
                    let texts = (0..10usize)
                        .map(|i| r.get(i))
                        .collect::<rusqlite::Result<Vec<String>>>()?;
                    Ok((texts, r.get(10)?))
                },
            )
            .unwrap();

        assert_eq!(
            texts,
            vec![
                "n-queens",
                "N-Queens",
                "Place queens",
                "O(n!)",
                "O(n!)",
                "O(n!)",
                "O(n!)",
                "O(n)",
                "Advanced",
                "Backtracking",
            ]
        );
        // is_active defaults to true.
        assert!(is_active);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let conn = open_in_memory().unwrap();
        let insert = "INSERT INTO algorithms (key, name, short_description, time_complexity,
                 best_case, average_case, worst_case, space_complexity, difficulty, category)
             VALUES ('k', 'n', 'd', 't', 'b', 'a', 'w', 's', 'x', 'c')";
        conn.execute(insert, []).unwrap();
        assert!(conn.execute(insert, []).is_err());
    }
}
