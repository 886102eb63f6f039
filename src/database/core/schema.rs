//! Database schema management
//!
//! This module provides schema definitions and management for the countries
//! database.

use crate::error::{DatabaseError, Result};
use rusqlite::Connection;

/// Current schema version
/// Increment this when making breaking schema changes
pub const SCHEMA_VERSION: u32 = 1;

/// Schema definitions for all tables in the countries database
pub struct SchemaDefinitions;

impl SchemaDefinitions {
    /// SQL for creating the meta table (tracks schema version and seed time)
    pub const META_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS countries_meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );
    "#;

    /// SQL for creating the countries table
    pub const COUNTRIES_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS countries (
            country_code TEXT NOT NULL PRIMARY KEY CHECK (length(country_code) = 2),
            ar TEXT NOT NULL,
            de TEXT NOT NULL,
            en TEXT NOT NULL,
            es TEXT NOT NULL,
            fr TEXT NOT NULL,
            ja TEXT NOT NULL,
            pt TEXT NOT NULL,
            ru TEXT NOT NULL,
            zh_hans TEXT NOT NULL,
            zh_hant TEXT NOT NULL,
            continent INTEGER NOT NULL CHECK (continent BETWEEN 1 AND 7),
            status INTEGER NOT NULL DEFAULT 1 CHECK (status IN (0, 1))
        );
    "#;

    /// SQL for creating countries indexes
    pub const COUNTRIES_INDEXES: &'static [&'static str] = &[
        "CREATE INDEX IF NOT EXISTS idx_countries_continent_status ON countries(continent, status)",
        "CREATE INDEX IF NOT EXISTS idx_countries_en ON countries(en)",
    ];
}

/// Schema manager for the countries database
///
/// Handles schema initialization, version checking, and resets.
pub struct SchemaManager<'a> {
    conn: &'a Connection,
}

impl<'a> SchemaManager<'a> {
    /// Create a new schema manager for the given connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Initialize the database schema
    ///
    /// Creates all tables and indexes if they don't exist.
    /// Sets the schema version in the meta table.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute(SchemaDefinitions::META_TABLE, [])?;
        self.set_meta("schema_version", &SCHEMA_VERSION.to_string())?;

        self.conn.execute(SchemaDefinitions::COUNTRIES_TABLE, [])?;
        for index_sql in SchemaDefinitions::COUNTRIES_INDEXES {
            self.conn.execute(index_sql, [])?;
        }

        Ok(())
    }

    /// Check the current schema status
    pub fn check_status(&self) -> Result<SchemaStatus> {
        if !self.table_exists("countries_meta")? {
            return Ok(SchemaStatus::NotInitialized);
        }

        let current_version = self.get_schema_version()?;

        if current_version == SCHEMA_VERSION {
            if self.table_exists("countries")? {
                Ok(SchemaStatus::Current)
            } else {
                Ok(SchemaStatus::Corrupted)
            }
        } else if current_version < SCHEMA_VERSION {
            Ok(SchemaStatus::NeedsMigration {
                from: current_version,
                to: SCHEMA_VERSION,
            })
        } else {
            // Database is from a newer version
            Ok(SchemaStatus::Incompatible {
                database_version: current_version,
                required_version: SCHEMA_VERSION,
            })
        }
    }

    /// Get the current schema version from the database
    pub fn get_schema_version(&self) -> Result<u32> {
        let version = self.get_meta("schema_version")?.unwrap_or_else(|| "0".to_string());
        version
            .parse()
            .map_err(|e| DatabaseError::Schema(format!("invalid schema version '{}': {}", version, e)))
    }

    fn table_exists(&self, table: &str) -> Result<bool> {
        let exists: i32 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(exists > 0)
    }

    /// Set a metadata value
    pub fn set_meta(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO countries_meta (key, value, updated_at) VALUES (?1, ?2, strftime('%s', 'now'))",
            [key, value],
        )?;
        Ok(())
    }

    /// Get a metadata value
    pub fn get_meta(&self, key: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT value FROM countries_meta WHERE key = ?1",
            [key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Reset the database by dropping all tables
    pub fn reset(&self) -> Result<()> {
        self.conn.execute_batch(
            "DROP TABLE IF EXISTS countries;
             DROP TABLE IF EXISTS countries_meta;",
        )?;
        Ok(())
    }
}

/// Status of the database schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Database is not initialized (fresh database)
    NotInitialized,

    /// Schema is current and valid
    Current,

    /// Schema needs migration from an older version
    NeedsMigration { from: u32, to: u32 },

    /// Database is from a newer version (incompatible)
    Incompatible {
        database_version: u32,
        required_version: u32,
    },

    /// Schema is corrupted (missing tables)
    Corrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_db() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_schema_not_initialized() {
        let conn = create_test_db();
        let manager = SchemaManager::new(&conn);

        assert_eq!(
            manager.check_status().unwrap(),
            SchemaStatus::NotInitialized
        );
    }

    #[test]
    fn test_schema_initialize() {
        let conn = create_test_db();
        let manager = SchemaManager::new(&conn);

        manager.initialize().unwrap();
        assert_eq!(manager.check_status().unwrap(), SchemaStatus::Current);

        // initializing twice is harmless
        manager.initialize().unwrap();
        assert_eq!(manager.get_schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_schema_corrupted() {
        let conn = create_test_db();
        let manager = SchemaManager::new(&conn);

        manager.initialize().unwrap();
        conn.execute("DROP TABLE countries", []).unwrap();
        assert_eq!(manager.check_status().unwrap(), SchemaStatus::Corrupted);
    }

    #[test]
    fn test_schema_version_mismatch() {
        let conn = create_test_db();
        let manager = SchemaManager::new(&conn);
        manager.initialize().unwrap();

        manager.set_meta("schema_version", "0").unwrap();
        assert_eq!(
            manager.check_status().unwrap(),
            SchemaStatus::NeedsMigration {
                from: 0,
                to: SCHEMA_VERSION
            }
        );

        manager
            .set_meta("schema_version", &(SCHEMA_VERSION + 1).to_string())
            .unwrap();
        assert_eq!(
            manager.check_status().unwrap(),
            SchemaStatus::Incompatible {
                database_version: SCHEMA_VERSION + 1,
                required_version: SCHEMA_VERSION
            }
        );

        manager.set_meta("schema_version", "garbage").unwrap();
        assert!(matches!(
            manager.check_status(),
            Err(DatabaseError::Schema(_))
        ));
    }

    #[test]
    fn test_constraints() {
        let conn = create_test_db();
        SchemaManager::new(&conn).initialize().unwrap();

        let bad_continent = conn.execute(
            "INSERT INTO countries VALUES ('XA','a','b','c','d','e','f','g','h','i','j',9,1)",
            [],
        );
        assert!(bad_continent.is_err());

        let bad_status = conn.execute(
            "INSERT INTO countries VALUES ('XB','a','b','c','d','e','f','g','h','i','j',1,2)",
            [],
        );
        assert!(bad_status.is_err());
    }

    #[test]
    fn test_meta_operations() {
        let conn = create_test_db();
        let manager = SchemaManager::new(&conn);

        manager.initialize().unwrap();

        manager.set_meta("test_key", "test_value").unwrap();
        let value = manager.get_meta("test_key").unwrap();
        assert_eq!(value, Some("test_value".to_string()));

        let missing = manager.get_meta("nonexistent").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_schema_reset() {
        let conn = create_test_db();
        let manager = SchemaManager::new(&conn);

        manager.initialize().unwrap();
        assert_eq!(manager.check_status().unwrap(), SchemaStatus::Current);

        manager.reset().unwrap();
        assert_eq!(
            manager.check_status().unwrap(),
            SchemaStatus::NotInitialized
        );
    }
}
