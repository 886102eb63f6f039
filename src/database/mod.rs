//! Database module
//!
//! This module provides all database functionality, organized into:
//!
//! - **core**: Core database infrastructure (connection provider, schema management)
//! - **countries**: The country reference table and its read API
//!
//! # Architecture
//!
//! ```text
//! database/
//! ├── core/           # Foundation
//! │   ├── connection  # ConnectionProvider trait and SQLite DatabaseConn
//! │   └── schema      # SQLite schema definitions and management
//! │
//! └── countries/      # Reference data
//!     ├── types       # CountryRecord, Language, Continent, CountryStatus
//!     ├── query       # CountryFilters, SortField, CountrySelectArgs
//!     ├── repository  # select, presets, seed
//!     └── seed_data   # the 249 seeded rows
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use countries::database::{CountriesDatabase, CountryFilters, CountrySelectArgs, Continent};
//!
//! let db = CountriesDatabase::open_in_dir("~/.countries")?;
//!
//! let args = CountrySelectArgs::new(CountryFilters::new().with_continent(Continent::Europe))
//!     .with_language("fr")
//!     .with_limit(10);
//! for country in db.countries().select(&args)? {
//!     println!("{} {}", country.code, country.name);
//! }
//! ```

pub mod core;
pub mod countries;

pub use self::core::{
    ConnectionProvider, DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus,
    SCHEMA_VERSION,
};

pub use countries::{
    Continent, CountriesDatabase, CountryFilters, CountryRecord, CountryRepository,
    CountrySeed, CountrySelectArgs, CountryStatus, DatabaseMetadata, Language, LocalizedNames,
    Preset, SelectStatement, SortField, COUNTRIES_TABLE, COUNTRY_SEEDS, COUNTRY_SEED_COUNT,
};

/// Ensure the data directory exists
pub fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all(data_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create data directory '{}': {}", data_dir, e))
}
