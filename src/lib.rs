#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Countries - multilingual country reference data on SQLite
//!
//! The crate keeps a fixed table of 249 countries, each with its name in ten
//! languages, its continent and an active/inactive status, and offers
//! filtered, sorted and paginated reads over it. It can be used as both a
//! command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (none) | Database, queries, presets, configuration | `rusqlite`, `config` |
//! | `display` | `CountryLens` with table formatting | `tabled` |
//! | `cli` | The `countries` binary | All above + `clap`, `tracing-subscriber` |
//!
//! ```toml
//! # Library only
//! countries = { version = "0.1", default-features = false }
//!
//! # Library with formatting lens
//! countries = { version = "0.1", default-features = false, features = ["display"] }
//! ```
//!
//! # Architecture
//!
//! - **[`database`]**: connection provider, schema, seed data and the
//!   country repository
//! - **[`lens`]**: argument structs and output formatting (feature `display`)
//! - **[`config`]**: configuration management
//! - **[`error`]**: the typed database error
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use countries::database::{CountriesDatabase, Continent};
//!
//! let db = CountriesDatabase::open_in_dir("~/.countries")?;
//!
//! for country in db.countries().europe_active("de")? {
//!     println!("{}: {}", country.code, country.name);
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;

// Lens module - feature gated
#[cfg(feature = "display")]
pub mod lens;

// =============================================================================
// Configuration (always available)
// =============================================================================

pub use config::CountriesConfig;

// Shared database info types (used by config and database commands)
pub use config::{format_size, get_sqlite_info, SqliteDatabaseInfo};

// =============================================================================
// Errors
// =============================================================================

pub use error::{DatabaseError, Result};

// =============================================================================
// Database Module - Re-export commonly used types (always available)
// =============================================================================

// Primary database type (SQLite)
pub use database::CountriesDatabase;

// Core database types
pub use database::{
    ConnectionProvider, DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus,
    SCHEMA_VERSION,
};

// Country repository
pub use database::{
    Continent, CountryFilters, CountryRecord, CountryRepository, CountrySelectArgs,
    CountryStatus, DatabaseMetadata, Language, LocalizedNames, Preset, SortField,
};

// =============================================================================
// Lens Module - Feature-gated exports
// =============================================================================

#[cfg(feature = "display")]
pub use lens::country::{
    CountryActiveArgs, CountryEntry, CountryLens, CountryListArgs, CountryOutputFormat,
};
