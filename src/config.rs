use anyhow::{anyhow, Result};
use config::Config;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::database::Language;

pub struct CountriesConfig {
    /// Path to the directory to hold the countries database
    pub data_dir: String,

    /// Language tag used when a command does not ask for one
    pub default_language: String,
}

const EMPTY_CONFIG: &str = r#"### countries configuration file

### directory for the countries database
# data_dir = "~/.countries"

### language used for country names when none is requested
### one of: ar, de, en, es, fr, ja, pt, ru, zh-Hans, zh-Hant
# default_language = "en"
"#;

impl Default for CountriesConfig {
    fn default() -> Self {
        let home_dir = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        Self {
            data_dir: format!("{}/.countries", home_dir),
            default_language: Language::English.tag().to_string(),
        }
    }
}

impl CountriesConfig {
    /// Function to create and initialize a new configuration
    ///
    /// Without a path, `$HOME/.countries/countries.toml` is used. A commented
    /// template is written when the file does not exist yet.
    pub fn new(path: &Option<String>) -> Result<CountriesConfig> {
        let file_path = match path {
            Some(p) => p.clone(),
            None => {
                let countries_dir = Self::home_countries_dir()?;
                std::fs::create_dir_all(countries_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create countries directory: {}", e))?;
                format!("{}/countries.toml", countries_dir)
            }
        };

        if !Path::new(file_path.as_str()).exists() {
            std::fs::write(file_path.as_str(), EMPTY_CONFIG)
                .map_err(|e| anyhow!("Unable to create config file {}: {}", file_path, e))?;
        }

        // pick up COUNTRIES_* variables from a local .env file
        dotenvy::dotenv().ok();

        Self::load(Path::new(file_path.as_str()))
    }

    /// Build the configuration from a TOML file and the environment
    ///
    /// Environment variables prefixed with `COUNTRIES_` override the file,
    /// e.g. `COUNTRIES_DATA_DIR=/tmp/countries`.
    pub fn load(file: &Path) -> Result<CountriesConfig> {
        let file_str = file
            .to_str()
            .ok_or_else(|| anyhow!("Could not convert path to string"))?;

        let settings = Config::builder()
            .add_source(config::File::with_name(file_str).required(false))
            .add_source(config::Environment::with_prefix("COUNTRIES"))
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        let defaults = CountriesConfig::default();

        let data_dir = match config.get("data_dir") {
            Some(p) => expand_home(p),
            None => defaults.data_dir,
        };

        let default_language = match config.get("default_language") {
            Some(tag) => Language::from_tag(tag)
                .ok_or_else(|| anyhow!("Unsupported default_language '{}'", tag))?
                .tag()
                .to_string(),
            None => defaults.default_language,
        };

        Ok(CountriesConfig {
            data_dir,
            default_language,
        })
    }

    fn home_countries_dir() -> Result<String> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not find home directory"))?
            .to_str()
            .ok_or_else(|| anyhow!("Could not convert home directory path to string"))?
            .to_owned();
        Ok(format!("{}/.countries", home_dir))
    }

    /// Get the path to the SQLite database file
    pub fn sqlite_path(&self) -> String {
        let data_dir = self.data_dir.trim_end_matches('/');
        format!("{}/countries.sqlite3", data_dir)
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        [
            format!("Data Directory:     {}", self.data_dir),
            format!("SQLite Path:        {}", self.sqlite_path()),
            format!("Default Language:   {}", self.default_language),
        ]
        .join("\n")
    }

    /// Get the config file path
    pub fn config_file_path() -> String {
        let home_dir = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| "~".to_string());
        format!("{}/.countries/countries.toml", home_dir)
    }
}

/// Replace a leading `~` with the home directory
fn expand_home(path: &str) -> String {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) => format!("{}{}", home.to_string_lossy(), rest),
        _ => path.to_string(),
    }
}

// =============================================================================
// Database info (used by the config and database commands)
// =============================================================================

/// Information about the SQLite database
#[derive(Debug, Serialize, Clone)]
pub struct SqliteDatabaseInfo {
    pub path: String,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    pub schema_initialized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeded_at: Option<u64>,
}

/// Get SQLite database information
///
/// Only inspects an existing file; a missing database is reported, not created.
pub fn get_sqlite_info(config: &CountriesConfig) -> SqliteDatabaseInfo {
    use crate::database::{ConnectionProvider, CountryRepository, DatabaseConn, SchemaManager};
    use crate::database::{SchemaStatus, SCHEMA_VERSION};

    let sqlite_path = config.sqlite_path();
    let sqlite_exists = Path::new(&sqlite_path).exists();
    let sqlite_size = if sqlite_exists {
        std::fs::metadata(&sqlite_path).ok().map(|m| m.len())
    } else {
        None
    };

    let mut info = SqliteDatabaseInfo {
        path: sqlite_path.clone(),
        exists: sqlite_exists,
        size_bytes: sqlite_size,
        schema_initialized: false,
        schema_version: None,
        country_count: None,
        seeded_at: None,
    };

    if !sqlite_exists {
        return info;
    }

    let db = match DatabaseConn::open_path(&sqlite_path) {
        Ok(db) => db,
        Err(_) => return info,
    };

    let status = db.with_connection(|conn| SchemaManager::new(conn).check_status());
    let (initialized, version) = match status {
        Ok(SchemaStatus::Current) => (true, Some(SCHEMA_VERSION)),
        Ok(SchemaStatus::NeedsMigration { from, to: _ }) => (true, Some(from)),
        Ok(SchemaStatus::Incompatible {
            database_version,
            required_version: _,
        }) => (true, Some(database_version)),
        Ok(SchemaStatus::NotInitialized) | Ok(SchemaStatus::Corrupted) | Err(_) => (false, None),
    };
    info.schema_initialized = initialized;
    info.schema_version = version;

    if initialized {
        info.country_count = CountryRepository::new(&db).count().ok();
        info.seeded_at = db
            .with_connection(|conn| SchemaManager::new(conn).get_meta("seeded_at"))
            .ok()
            .flatten()
            .and_then(|v| v.parse().ok());
    }

    info
}

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{CountriesDatabase, COUNTRY_SEED_COUNT};

    #[test]
    fn test_default_config() {
        let config = CountriesConfig::default();
        assert_eq!(config.default_language, "en");
        assert!(config.data_dir.ends_with("/.countries"));
    }

    #[test]
    fn test_paths() {
        let config = CountriesConfig {
            data_dir: "/test/dir/".to_string(),
            default_language: "en".to_string(),
        };

        assert_eq!(config.sqlite_path(), "/test/dir/countries.sqlite3");
        assert!(config.summary().contains("/test/dir/countries.sqlite3"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("countries.toml");
        std::fs::write(
            &file,
            "data_dir = \"/srv/countries\"\ndefault_language = \"zh_hant\"\n",
        )
        .unwrap();

        let config = CountriesConfig::load(&file).unwrap();
        assert_eq!(config.data_dir, "/srv/countries");
        assert_eq!(config.default_language, "zh-Hant");
    }

    #[test]
    fn test_load_rejects_unknown_language() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("countries.toml");
        std::fs::write(&file, "default_language = \"xx\"\n").unwrap();

        assert!(CountriesConfig::load(&file).is_err());
    }

    #[test]
    fn test_new_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("countries.toml");
        let path = Some(file.to_str().unwrap().to_string());

        let config = CountriesConfig::new(&path).unwrap();
        assert!(file.exists());
        assert!(std::fs::read_to_string(&file)
            .unwrap()
            .contains("countries configuration file"));
        assert!(!config.data_dir.is_empty());
    }

    #[test]
    fn test_sqlite_info() {
        let dir = tempfile::tempdir().unwrap();
        let config = CountriesConfig {
            data_dir: dir.path().to_str().unwrap().to_string(),
            default_language: "en".to_string(),
        };

        let info = get_sqlite_info(&config);
        assert!(!info.exists);
        assert!(!info.schema_initialized);

        CountriesDatabase::open(&config.sqlite_path()).unwrap();

        let info = get_sqlite_info(&config);
        assert!(info.exists);
        assert!(info.schema_initialized);
        assert_eq!(info.country_count, Some(COUNTRY_SEED_COUNT as u64));
        assert!(info.seeded_at.is_some());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1048576), "1.00 MB");
        assert_eq!(format_size(1073741824), "1.00 GB");
    }
}
