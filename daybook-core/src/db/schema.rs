//! Database schema
//!
//! Two append-only tables. There is no migration path: tables are created
//! when absent and left alone otherwise.

use crate::error::Result;
use rusqlite::Connection;

/// Tables required before any other statement runs
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS diary (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        date             TEXT NOT NULL,
        entry            TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS savings (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        date             TEXT NOT NULL,
        amount           REAL NOT NULL
    );
"#;

/// Create the `diary` and `savings` tables if they do not exist yet
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    tracing::debug!("Schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, table: &str) -> bool {
        let count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
                [table],
                |r| r.get(0),
            )
            .unwrap();
        count == 1
    }

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        create_tables(&conn).unwrap();
        conn.execute(
            "INSERT INTO diary (date, entry) VALUES ('2024-01-01', 'kept')",
            [],
        )
        .unwrap();
        create_tables(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM diary", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1, "re-running the schema must not drop rows");
    }

    #[test]
    fn test_tables_created() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        for table in ["diary", "savings"] {
            assert!(table_exists(&conn, table), "Table {} should exist", table);
        }
    }

    #[test]
    fn test_not_null_columns() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        assert!(conn
            .execute("INSERT INTO diary (date) VALUES ('2024-01-01')", [])
            .is_err());
        assert!(conn
            .execute("INSERT INTO savings (amount) VALUES (1.5)", [])
            .is_err());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        conn.execute("INSERT INTO savings (date, amount) VALUES ('d', 1.0)", [])
            .unwrap();
        conn.execute("INSERT INTO savings (date, amount) VALUES ('d', 2.0)", [])
            .unwrap();
        conn.execute("DELETE FROM savings WHERE id = 2", []).unwrap();
        conn.execute("INSERT INTO savings (date, amount) VALUES ('d', 3.0)", [])
            .unwrap();

        assert_eq!(conn.last_insert_rowid(), 3);
    }
}
