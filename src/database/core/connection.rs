//! Database connection management
//!
//! This module provides the connection provider consumed by the country
//! repository, and its SQLite implementation.

use crate::error::{DatabaseError, Result};
use rusqlite::Connection;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Supplier of a live store connection
///
/// The provider owns the connection lifecycle. Repositories borrow a provider
/// and never open or close connections themselves. Implementations serialize
/// access to the underlying connection, so a provider may be shared across
/// threads.
pub trait ConnectionProvider {
    /// Run `f` against the live connection
    ///
    /// Fails with [`DatabaseError::Connection`] once the provider has been
    /// released.
    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>;

    /// Check that the store answers a trivial round-trip
    fn ping(&self) -> Result<()>;

    /// Close the connection. Calling this more than once is a no-op.
    fn release(&self);

    /// Get the row count for a table
    ///
    /// `table_name` is interpolated and must come from a schema constant.
    fn table_count(&self, table_name: &str) -> Result<u64> {
        self.with_connection(|conn| {
            let query = format!("SELECT COUNT(*) FROM {}", table_name);
            let count: u64 = conn.query_row(&query, [], |row| row.get(0))?;
            Ok(count)
        })
    }
}

/// Core database connection wrapper
///
/// `DatabaseConn` provides a thin wrapper around SQLite connections,
/// handling both file-based and in-memory databases with consistent
/// configuration and error handling.
pub struct DatabaseConn {
    conn: Mutex<Option<Connection>>,
    path: Option<String>,
}

impl DatabaseConn {
    /// Open a database at the specified path
    ///
    /// If the path is `None`, an in-memory database is created.
    /// The connection is pinged before it is handed out.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let conn = match path {
            Some(p) => Connection::open(p).map_err(|e| {
                DatabaseError::connection(format!("failed to open database at '{}'", p), e)
            })?,
            None => Connection::open_in_memory().map_err(|e| {
                DatabaseError::connection("failed to create in-memory database", e)
            })?,
        };

        if path.is_some() {
            configure(&conn)?;
        }

        let db = DatabaseConn {
            conn: Mutex::new(Some(conn)),
            path: path.map(str::to_string),
        };
        db.ping()?;
        debug!(path = ?db.path, "database connection ready");
        Ok(db)
    }

    /// Open a database at the specified path (convenience method)
    pub fn open_path(path: &str) -> Result<Self> {
        Self::open(Some(path))
    }

    /// Create an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::open(None)
    }

    /// Path of the database file, `None` for in-memory databases
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl ConnectionProvider for DatabaseConn {
    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let guard = self.conn.lock().map_err(|_| DatabaseError::Connection {
            message: "connection lock poisoned".to_string(),
            source: None,
        })?;
        match guard.as_ref() {
            Some(conn) => f(conn),
            None => Err(DatabaseError::closed()),
        }
    }

    fn ping(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| DatabaseError::connection("ping failed", e))?;
            Ok(())
        })
    }

    fn release(&self) {
        let mut guard = match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(conn) = guard.take() {
            if let Err((_, e)) = conn.close() {
                warn!("error while closing database connection: {}", e);
            }
        }
    }
}

impl Drop for DatabaseConn {
    fn drop(&mut self) {
        self.release();
    }
}

/// Configure a file-backed database
fn configure(conn: &Connection) -> Result<()> {
    // WAL lets readers proceed while the seed transaction writes
    let _: String = conn
        .query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))
        .map_err(|e| DatabaseError::connection("failed to set journal mode", e))?;

    conn.execute_batch(
        "PRAGMA synchronous=NORMAL;
         PRAGMA temp_store=MEMORY;
         PRAGMA foreign_keys=ON;",
    )
    .map_err(|e| DatabaseError::connection("failed to configure database", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = DatabaseConn::open_in_memory();
        assert!(db.is_ok());
        assert!(db.unwrap().path().is_none());
    }

    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.sqlite3");
        let db = DatabaseConn::open_path(path.to_str().unwrap()).unwrap();
        assert!(db.ping().is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_open_unreachable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("countries.sqlite3");
        let err = DatabaseConn::open_path(path.to_str().unwrap())
            .err()
            .unwrap();
        assert!(matches!(err, DatabaseError::Connection { .. }));
    }

    #[test]
    fn test_table_count() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.with_connection(|conn| {
            conn.execute_batch(
                "CREATE TABLE test_table (id INTEGER PRIMARY KEY);
                 INSERT INTO test_table (id) VALUES (1), (2), (3);",
            )?;
            Ok(())
        })
        .unwrap();

        assert_eq!(db.table_count("test_table").unwrap(), 3);
    }

    #[test]
    fn test_release_is_idempotent() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.release();
        db.release();

        assert!(matches!(db.ping(), Err(DatabaseError::Connection { .. })));
        assert!(matches!(
            db.table_count("anything"),
            Err(DatabaseError::Connection { .. })
        ));
    }
}
