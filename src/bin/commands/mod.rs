pub mod active;
pub mod config;
pub mod database;
pub mod list;

use countries::database::ensure_data_dir;
use countries::{CountriesConfig, CountriesDatabase};

/// Open (and seed on first use) the database named by the configuration,
/// exiting on failure
pub(crate) fn open_database(config: &CountriesConfig) -> CountriesDatabase {
    open_with(config, CountriesDatabase::open)
}

/// Open the database without seeding an empty table, exiting on failure
pub(crate) fn open_database_unseeded(config: &CountriesConfig) -> CountriesDatabase {
    open_with(config, CountriesDatabase::open_unseeded)
}

fn open_with(
    config: &CountriesConfig,
    open: fn(&str) -> countries::Result<CountriesDatabase>,
) -> CountriesDatabase {
    if let Err(e) = ensure_data_dir(&config.data_dir) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    match open(&config.sqlite_path()) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("ERROR: Failed to open database: {}", e);
            std::process::exit(1);
        }
    }
}
