//! Database repository layer
//!
//! The gateway opens a fresh connection for every statement and closes it
//! as soon as the statement's work is done. Nothing is pooled or batched.

use crate::error::{Error, Result};
use rusqlite::{Connection, Params, Rows};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

enum Backend {
    /// A file on disk, reopened per statement
    File(PathBuf),
    /// A single private connection, used by tests
    Memory(Mutex<Connection>),
}

/// Handle to the diary database
///
/// Constructing a file-backed handle does not touch the disk; the file is
/// created by [`Database::initialize`] or the first statement.
pub struct Database {
    backend: Backend,
}

impl Database {
    /// Create a handle for the database file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::File(path.into()),
        }
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            backend: Backend::Memory(Mutex::new(conn)),
        })
    }

    /// Path of the backing file, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        match &self.backend {
            Backend::File(path) => Some(path),
            Backend::Memory(_) => None,
        }
    }

    /// Ensure the `diary` and `savings` tables exist
    ///
    /// Creates the database file and its parent directory when missing.
    pub fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path().and_then(Path::parent) {
            std::fs::create_dir_all(parent)?;
        }

        self.with_connection(super::schema::create_tables)?;

        tracing::info!(path = ?self.path(), "Database initialized");
        Ok(())
    }

    /// Run a parameterized insert/update statement, returning the affected row count
    pub fn execute_update<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        self.with_connection(|conn| {
            let changed = conn.execute(sql, params)?;
            tracing::debug!(sql, changed, "Statement executed");
            Ok(changed)
        })
    }

    /// Run a parameterized insert, returning the new row id
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.with_connection(|conn| {
            conn.execute(sql, params)?;
            let id = conn.last_insert_rowid();
            tracing::debug!(sql, id, "Row inserted");
            Ok(id)
        })
    }

    /// Run a parameterized select and hand its cursor to `read`
    ///
    /// The cursor is forward-only and only valid inside `read`; the statement
    /// and connection behind it are released as soon as `read` returns.
    pub fn execute_query<P, T, F>(&self, sql: &str, params: P, read: F) -> Result<T>
    where
        P: Params,
        F: FnOnce(&mut Rows<'_>) -> Result<T>,
    {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let mut rows = stmt.query(params)?;
            read(&mut rows)
        })
    }

    // ============================================
    // Queries
    // ============================================

    /// Stream every diary entry as `(date, entry)` in storage order
    ///
    /// Returns the number of rows visited.
    pub fn visit_diary<F>(&self, mut visit: F) -> Result<usize>
    where
        F: FnMut(&str, &str) -> Result<()>,
    {
        self.execute_query("SELECT date, entry FROM diary", [], |rows| {
            let mut count = 0;
            while let Some(row) = rows.next()? {
                let date: String = row.get(0)?;
                let entry: String = row.get(1)?;
                visit(&date, &entry)?;
                count += 1;
            }
            Ok(count)
        })
    }

    /// Sum of all savings amounts, `None` when nothing has been saved
    pub fn total_savings(&self) -> Result<Option<f64>> {
        self.execute_query("SELECT SUM(amount) AS total FROM savings", [], |rows| {
            match rows.next()? {
                Some(row) => Ok(row.get::<_, Option<f64>>(0)?),
                None => Ok(None),
            }
        })
    }

    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        match &self.backend {
            Backend::File(path) => {
                let conn = Connection::open(path)?;
                let result = f(&conn);
                match conn.close() {
                    Ok(()) => result,
                    Err((_, e)) => {
                        tracing::warn!(error = %e, path = %path.display(), "Failed to close connection");
                        match result {
                            Ok(_) => Err(Error::Database(e)),
                            Err(original) => Err(original),
                        }
                    }
                }
            }
            Backend::Memory(conn) => {
                let conn = conn.lock().unwrap_or_else(PoisonError::into_inner);
                f(&conn)
            }
        }
    }
}
