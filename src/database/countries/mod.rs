//! Countries database storage
//!
//! This module provides the country reference table and its read API:
//! - `types`: record, language, continent and status types
//! - `query`: filter/sort/pagination arguments and statement composition
//! - `repository`: `select`, the named presets, and seeding
//! - `seed_data`: the fixed data set loaded on first open

mod query;
mod repository;
mod seed_data;
mod types;

pub use query::{CountryFilters, CountrySelectArgs, SelectStatement, SortField, COUNTRIES_TABLE};
pub use repository::{CountryRepository, Preset};
pub use seed_data::{CountrySeed, COUNTRY_SEEDS, COUNTRY_SEED_COUNT};
pub use types::{Continent, CountryRecord, CountryStatus, Language, LocalizedNames};

use crate::database::core::{ConnectionProvider, DatabaseConn, SchemaManager, SchemaStatus};
use crate::error::Result;
use tracing::info;

/// Main countries database (SQLite backend)
///
/// `CountriesDatabase` owns the connection provider and handles:
/// - Schema initialization
/// - Automatic schema drift detection and reset
/// - Seeding the countries table when it is empty (except `open_unseeded`)
pub struct CountriesDatabase {
    db: DatabaseConn,
}

impl CountriesDatabase {
    /// Open the countries database at the specified path
    ///
    /// If the database doesn't exist, it will be created, initialized and
    /// seeded. If the schema is outdated or corrupted, it will be reset and
    /// seeded again.
    pub fn open(path: &str) -> Result<Self> {
        let database = Self::open_unseeded(path)?;
        database.seed_if_empty()?;
        Ok(database)
    }

    /// Open the countries database without seeding an empty table
    ///
    /// The schema is still initialized or reset as in [`open`](Self::open).
    pub fn open_unseeded(path: &str) -> Result<Self> {
        Self::prepare(DatabaseConn::open_path(path)?)
    }

    /// Open the countries database from a data directory
    ///
    /// Creates the standard database file path: `{data_dir}/countries.sqlite3`
    pub fn open_in_dir(data_dir: &str) -> Result<Self> {
        let path = format!("{}/countries.sqlite3", data_dir.trim_end_matches('/'));
        Self::open(&path)
    }

    /// Create an in-memory countries database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let database = Self::prepare(DatabaseConn::open_in_memory()?)?;
        database.seed_if_empty()?;
        Ok(database)
    }

    fn prepare(db: DatabaseConn) -> Result<Self> {
        db.with_connection(|conn| {
            let schema = SchemaManager::new(conn);
            match schema.check_status()? {
                SchemaStatus::Current => {
                    info!("Countries database schema is current");
                }
                SchemaStatus::NotInitialized => {
                    info!("Initializing countries database schema");
                    schema.initialize()?;
                }
                SchemaStatus::NeedsMigration { from, to } => {
                    info!("Countries database needs migration from v{} to v{}", from, to);
                    schema.reset()?;
                    schema.initialize()?;
                }
                SchemaStatus::Incompatible {
                    database_version,
                    required_version,
                } => {
                    info!(
                        "Countries database schema incompatible (db: v{}, required: v{}), resetting",
                        database_version, required_version
                    );
                    schema.reset()?;
                    schema.initialize()?;
                }
                SchemaStatus::Corrupted => {
                    info!("Countries database schema corrupted, resetting");
                    schema.reset()?;
                    schema.initialize()?;
                }
            }
            Ok(())
        })?;

        Ok(Self { db })
    }

    fn seed_if_empty(&self) -> Result<()> {
        if self.needs_seed()? {
            self.countries().seed()?;
        }
        Ok(())
    }

    /// Get a reference to the country repository
    pub fn countries(&self) -> CountryRepository<'_> {
        CountryRepository::new(&self.db)
    }

    /// The underlying connection provider
    pub fn provider(&self) -> &DatabaseConn {
        &self.db
    }

    /// Check if the countries table needs to be seeded
    pub fn needs_seed(&self) -> Result<bool> {
        self.countries().is_empty()
    }

    /// Schema version and seed time recorded in the meta table
    pub fn metadata(&self) -> Result<DatabaseMetadata> {
        self.db.with_connection(|conn| {
            let schema = SchemaManager::new(conn);
            Ok(DatabaseMetadata {
                schema_version: schema.get_schema_version()?,
                seeded_at: schema
                    .get_meta("seeded_at")?
                    .and_then(|v| v.parse().ok()),
            })
        })
    }

    /// Drop and recreate all tables, then seed again
    pub fn reset(&self) -> Result<usize> {
        self.db.with_connection(|conn| {
            let schema = SchemaManager::new(conn);
            schema.reset()?;
            schema.initialize()
        })?;
        self.countries().seed()
    }

    /// Release the connection. Later calls fail with a connection error.
    pub fn close(&self) {
        self.db.release();
    }
}

/// Values kept in the meta table
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DatabaseMetadata {
    pub schema_version: u32,
    /// Unix timestamp of the last seed run
    pub seeded_at: Option<u64>,
}
