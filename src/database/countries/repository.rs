//! Country repository
//!
//! Read access to the seeded countries table. All reads go through
//! [`CountryRepository::select`]; the eight "active" entry points are fixed
//! [`Preset`]s over it.

use super::query::{CountryFilters, CountrySelectArgs, SortField, COUNTRIES_TABLE};
use super::seed_data::COUNTRY_SEEDS;
use super::types::{Continent, CountryRecord, CountryStatus, Language, LocalizedNames};
use crate::database::core::{ConnectionProvider, DatabaseConn, SchemaManager};
use crate::error::{DatabaseError, Result};
use rusqlite::{params_from_iter, Connection, Row};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// SQLite VM instructions between deadline checks
const DEADLINE_CHECK_INTERVAL: i32 = 1000;

/// Named read presets
///
/// Every preset selects active countries, optionally restricted to one
/// continent, sorted by code ascending, without pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Active,
    AfricaActive,
    AsiaActive,
    EuropeActive,
    NorthAmericaActive,
    SouthAmericaActive,
    OceaniaActive,
    AntarcticaActive,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Active,
        Preset::AfricaActive,
        Preset::AsiaActive,
        Preset::EuropeActive,
        Preset::NorthAmericaActive,
        Preset::SouthAmericaActive,
        Preset::OceaniaActive,
        Preset::AntarcticaActive,
    ];

    /// Preset for active countries of one continent, or of all when `None`
    pub fn for_continent(continent: Option<Continent>) -> Self {
        match continent {
            None => Preset::Active,
            Some(Continent::Africa) => Preset::AfricaActive,
            Some(Continent::Asia) => Preset::AsiaActive,
            Some(Continent::Europe) => Preset::EuropeActive,
            Some(Continent::NorthAmerica) => Preset::NorthAmericaActive,
            Some(Continent::SouthAmerica) => Preset::SouthAmericaActive,
            Some(Continent::Oceania) => Preset::OceaniaActive,
            Some(Continent::Antarctica) => Preset::AntarcticaActive,
        }
    }

    pub fn continent(&self) -> Option<Continent> {
        match self {
            Preset::Active => None,
            Preset::AfricaActive => Some(Continent::Africa),
            Preset::AsiaActive => Some(Continent::Asia),
            Preset::EuropeActive => Some(Continent::Europe),
            Preset::NorthAmericaActive => Some(Continent::NorthAmerica),
            Preset::SouthAmericaActive => Some(Continent::SouthAmerica),
            Preset::OceaniaActive => Some(Continent::Oceania),
            Preset::AntarcticaActive => Some(Continent::Antarctica),
        }
    }

    /// The select arguments this preset stands for
    pub fn args(&self, language: &str) -> CountrySelectArgs {
        let mut filters = CountryFilters::new().with_status(CountryStatus::Active);
        filters.continent = self.continent();
        CountrySelectArgs::new(filters)
            .with_language(language)
            .sort_by(SortField::Code, false)
    }
}

/// Repository for country reads and seeding
///
/// Borrows a [`ConnectionProvider`]; it never opens or closes connections.
pub struct CountryRepository<'a, P: ConnectionProvider = DatabaseConn> {
    provider: &'a P,
}

impl<'a, P: ConnectionProvider> CountryRepository<'a, P> {
    /// Create a new country repository
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Filtered, sorted and paginated read
    ///
    /// Returns every matching row or an error, never a partial list. An empty
    /// result is not an error.
    pub fn select(&self, args: &CountrySelectArgs) -> Result<Vec<CountryRecord>> {
        self.select_with_deadline(args, None)
    }

    /// Same as [`select`](Self::select), interrupted once `deadline` passes
    pub fn select_with_deadline(
        &self,
        args: &CountrySelectArgs,
        deadline: Option<Instant>,
    ) -> Result<Vec<CountryRecord>> {
        let statement = args.build_statement();
        let language = args.resolved_language();
        debug!(sql = %statement.sql, params = statement.params.len(), "selecting countries");

        let records = self.provider.with_connection(|conn| {
            let _deadline = match deadline {
                Some(deadline) if Instant::now() >= deadline => {
                    return Err(DatabaseError::DeadlineExceeded)
                }
                Some(deadline) => Some(DeadlineGuard::install(conn, deadline)),
                None => None,
            };

            let mut stmt = conn.prepare(&statement.sql)?;
            let rows = stmt.query_map(params_from_iter(statement.params.iter()), |row| {
                row_to_record(row, language)
            })?;
            let records = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })?;

        debug!(count = records.len(), "countries selected");
        Ok(records)
    }

    /// Run a named preset
    pub fn preset(&self, preset: Preset, language: &str) -> Result<Vec<CountryRecord>> {
        self.select(&preset.args(language))
    }

    /// All active countries
    pub fn active(&self, language: &str) -> Result<Vec<CountryRecord>> {
        self.preset(Preset::Active, language)
    }

    /// Active countries in Africa
    pub fn africa_active(&self, language: &str) -> Result<Vec<CountryRecord>> {
        self.preset(Preset::AfricaActive, language)
    }

    /// Active countries in Asia
    pub fn asia_active(&self, language: &str) -> Result<Vec<CountryRecord>> {
        self.preset(Preset::AsiaActive, language)
    }

    /// Active countries in Europe
    pub fn europe_active(&self, language: &str) -> Result<Vec<CountryRecord>> {
        self.preset(Preset::EuropeActive, language)
    }

    /// Active countries in North America
    pub fn north_america_active(&self, language: &str) -> Result<Vec<CountryRecord>> {
        self.preset(Preset::NorthAmericaActive, language)
    }

    /// Active countries in South America
    pub fn south_america_active(&self, language: &str) -> Result<Vec<CountryRecord>> {
        self.preset(Preset::SouthAmericaActive, language)
    }

    /// Active countries in Australia / Oceania
    pub fn oceania_active(&self, language: &str) -> Result<Vec<CountryRecord>> {
        self.preset(Preset::OceaniaActive, language)
    }

    /// Active countries in Antarctica
    pub fn antarctica_active(&self, language: &str) -> Result<Vec<CountryRecord>> {
        self.preset(Preset::AntarcticaActive, language)
    }

    /// Lookup a single country by its 2-letter code (case-insensitive)
    pub fn lookup_code(&self, code: &str, language: &str) -> Result<Option<CountryRecord>> {
        let filters = CountryFilters::new().with_code(code.trim().to_ascii_uppercase());
        let args = CountrySelectArgs::new(filters).with_language(language);
        Ok(self.select(&args)?.into_iter().next())
    }

    /// Number of rows in the countries table
    pub fn count(&self) -> Result<u64> {
        self.provider.table_count(COUNTRIES_TABLE)
    }

    /// Check if the countries table is empty
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    /// Insert the seed data set
    ///
    /// Existing rows are left untouched, so seeding twice neither duplicates
    /// nor overwrites anything. Returns the number of rows inserted.
    pub fn seed(&self) -> Result<usize> {
        self.provider.with_connection(|conn| {
            let inserted = seed_countries(conn)?;
            SchemaManager::new(conn).set_meta("seeded_at", &unix_now().to_string())?;
            info!(
                "country seed finished: {} new rows, {} in data set",
                inserted,
                COUNTRY_SEEDS.len()
            );
            Ok(inserted)
        })
    }
}

/// Insert all seed rows inside one transaction
fn seed_countries(conn: &Connection) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut inserted = 0usize;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO countries
             (country_code, ar, de, en, es, fr, ja, pt, ru, zh_hans, zh_hant, continent, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )?;

        for seed in COUNTRY_SEEDS.iter() {
            let [ar, de, en, es, fr, ja, pt, ru, zh_hans, zh_hant] = seed.names;
            inserted += stmt.execute(rusqlite::params![
                seed.code,
                ar,
                de,
                en,
                es,
                fr,
                ja,
                pt,
                ru,
                zh_hans,
                zh_hant,
                seed.continent,
                CountryStatus::Active,
            ])?;
        }
    }
    tx.commit()?;
    Ok(inserted)
}

/// Map one selected row; column order follows `SELECT_COLUMNS`
fn row_to_record(row: &Row<'_>, language: Language) -> rusqlite::Result<CountryRecord> {
    let names = LocalizedNames {
        ar: row.get(1)?,
        de: row.get(2)?,
        en: row.get(3)?,
        es: row.get(4)?,
        fr: row.get(5)?,
        ja: row.get(6)?,
        pt: row.get(7)?,
        ru: row.get(8)?,
        zh_hans: row.get(9)?,
        zh_hant: row.get(10)?,
    };
    let name = names.get(language).to_string();

    Ok(CountryRecord {
        code: row.get(0)?,
        names,
        continent: row.get(11)?,
        status: row.get(12)?,
        name,
    })
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Interrupts statements on a connection once a deadline passes
///
/// The progress handler is removed when the guard drops.
struct DeadlineGuard<'c> {
    conn: &'c Connection,
}

impl<'c> DeadlineGuard<'c> {
    fn install(conn: &'c Connection, deadline: Instant) -> Self {
        conn.progress_handler(
            DEADLINE_CHECK_INTERVAL,
            Some(move || Instant::now() >= deadline),
        );
        Self { conn }
    }
}

impl Drop for DeadlineGuard<'_> {
    fn drop(&mut self) {
        self.conn.progress_handler(0, None::<fn() -> bool>);
    }
}

#[cfg(test)]
mod tests {
    use super::super::seed_data::COUNTRY_SEED_COUNT;
    use super::*;
    use std::time::Duration;

    fn setup_test_db() -> DatabaseConn {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.with_connection(|conn| SchemaManager::new(conn).initialize())
            .unwrap();
        CountryRepository::new(&db).seed().unwrap();
        db
    }

    fn codes(records: &[CountryRecord]) -> Vec<String> {
        records.iter().map(|r| r.code.clone()).collect()
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.with_connection(|conn| SchemaManager::new(conn).initialize())
            .unwrap();
        let repo = CountryRepository::new(&db);
        assert!(repo.is_empty().unwrap());

        assert_eq!(repo.seed().unwrap(), COUNTRY_SEED_COUNT);
        assert_eq!(repo.seed().unwrap(), 0);
        assert_eq!(repo.count().unwrap(), COUNTRY_SEED_COUNT as u64);
    }

    #[test]
    fn test_seed_does_not_overwrite() {
        let db = setup_test_db();
        db.with_connection(|conn| {
            conn.execute(
                "UPDATE countries SET en = 'Republic of France', status = 0 WHERE country_code = 'FR'",
                [],
            )?;
            Ok(())
        })
        .unwrap();

        let repo = CountryRepository::new(&db);
        repo.seed().unwrap();

        let france = repo.lookup_code("FR", "en").unwrap().unwrap();
        assert_eq!(france.name, "Republic of France");
        assert_eq!(france.status, CountryStatus::Inactive);
    }

    #[test]
    fn test_select_without_filters_returns_everything() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let all = repo.select(&CountrySelectArgs::default()).unwrap();
        assert_eq!(all.len(), COUNTRY_SEED_COUNT);
    }

    #[test]
    fn test_select_by_every_code() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        for seed in COUNTRY_SEEDS.iter() {
            let args = CountrySelectArgs::new(CountryFilters::new().with_code(seed.code));
            let records = repo.select(&args).unwrap();
            assert_eq!(records.len(), 1, "code {}", seed.code);
            assert_eq!(records[0].code, seed.code);
            assert_eq!(records[0].continent, seed.continent);
        }
    }

    #[test]
    fn test_continent_active_counts_match_seed() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        for continent in Continent::ALL {
            let expected = COUNTRY_SEEDS
                .iter()
                .filter(|s| s.continent == continent)
                .count();
            let filters = CountryFilters::new()
                .with_continent(continent)
                .with_status(CountryStatus::Active);
            let records = repo.select(&CountrySelectArgs::new(filters)).unwrap();

            assert_eq!(records.len(), expected, "continent {}", continent);
            assert!(records.iter().all(|r| r.continent == continent));
            assert!(records.iter().all(|r| r.status == CountryStatus::Active));
        }
    }

    #[test]
    fn test_status_filter() {
        let db = setup_test_db();
        db.with_connection(|conn| {
            conn.execute(
                "UPDATE countries SET status = 0 WHERE country_code IN ('AQ', 'BV')",
                [],
            )?;
            Ok(())
        })
        .unwrap();
        let repo = CountryRepository::new(&db);

        let inactive = repo
            .select(&CountrySelectArgs::new(
                CountryFilters::new().with_status(CountryStatus::Inactive),
            ))
            .unwrap();
        assert_eq!(codes(&inactive), vec!["AQ", "BV"]);

        let active = repo.active("en").unwrap();
        assert_eq!(active.len(), COUNTRY_SEED_COUNT - 2);
        assert!(!codes(&active).contains(&"AQ".to_string()));
    }

    #[test]
    fn test_language_resolution() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let france = repo.lookup_code("FR", "fr").unwrap().unwrap();
        assert_eq!(france.name, "France");

        let germany = repo.lookup_code("de", "de").unwrap().unwrap();
        assert_eq!(germany.name, "Deutschland");

        let japan = repo.lookup_code("JP", "ja").unwrap().unwrap();
        assert_eq!(japan.name, "日本");

        for language in Language::ALL {
            let args = CountrySelectArgs::default().with_language(language.tag());
            for record in repo.select(&args).unwrap() {
                assert_eq!(record.name, record.names.get(language));
            }
        }
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let args = CountrySelectArgs::default().with_language("xx");
        let records = repo.select(&args).unwrap();
        assert_eq!(records.len(), COUNTRY_SEED_COUNT);
        for record in records {
            assert_eq!(record.name, record.names.en);
        }
    }

    #[test]
    fn test_filter_by_localized_name() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let filters = CountryFilters::new().with_name(Language::German, "Deutschland");
        let records = repo
            .select(&CountrySelectArgs::new(filters).with_language("en"))
            .unwrap();
        assert_eq!(codes(&records), vec!["DE"]);
        assert_eq!(records[0].name, "Germany");
    }

    #[test]
    fn test_pagination_has_no_gap_or_overlap() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);
        let all = codes(&repo.select(&CountrySelectArgs::default()).unwrap());

        let first = repo
            .select(&CountrySelectArgs::default().with_limit(10).with_offset(0))
            .unwrap();
        let second = repo
            .select(&CountrySelectArgs::default().with_limit(10).with_offset(10))
            .unwrap();

        assert_eq!(codes(&first), all[..10].to_vec());
        assert_eq!(codes(&second), all[10..20].to_vec());
    }

    #[test]
    fn test_offset_only_skips_rows() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let rest = repo
            .select(&CountrySelectArgs::default().with_offset(240))
            .unwrap();
        assert_eq!(rest.len(), COUNTRY_SEED_COUNT - 240);

        let beyond = repo
            .select(&CountrySelectArgs::default().with_offset(1000))
            .unwrap();
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_descending_reverses_ascending() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let asc = codes(&repo.select(&CountrySelectArgs::default()).unwrap());
        let mut desc = codes(
            &repo
                .select(&CountrySelectArgs::default().sort_by(SortField::Code, true))
                .unwrap(),
        );
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_by_localized_name() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let args = CountrySelectArgs::new(CountryFilters::new().with_continent(Continent::Europe))
            .sort_by(SortField::Name(Language::English), false);
        let names: Vec<String> = repo
            .select(&args)
            .unwrap()
            .into_iter()
            .map(|r| r.names.en)
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_injection_is_treated_as_literal() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        for hostile in [
            "' OR '1'='1",
            "FR' OR 'x'='x",
            "FR'; DROP TABLE countries; --",
            "%",
        ] {
            let args = CountrySelectArgs::new(CountryFilters::new().with_code(hostile));
            assert!(repo.select(&args).unwrap().is_empty(), "{}", hostile);
        }

        // the quote in "Côte d'Ivoire" is matched literally
        let filters = CountryFilters::new().with_name(Language::English, "Côte d'Ivoire");
        let records = repo.select(&CountrySelectArgs::new(filters)).unwrap();
        assert_eq!(codes(&records), vec!["CI"]);

        assert_eq!(repo.count().unwrap(), COUNTRY_SEED_COUNT as u64);
    }

    #[test]
    fn test_empty_string_filter_matches_nothing() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let args = CountrySelectArgs::new(CountryFilters::new().with_code(""));
        assert!(repo.select(&args).unwrap().is_empty());
    }

    #[test]
    fn test_presets() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        assert_eq!(repo.active("en").unwrap().len(), COUNTRY_SEED_COUNT);

        let named: [(Continent, Vec<CountryRecord>); 7] = [
            (Continent::Africa, repo.africa_active("en").unwrap()),
            (Continent::Asia, repo.asia_active("en").unwrap()),
            (Continent::Europe, repo.europe_active("en").unwrap()),
            (Continent::NorthAmerica, repo.north_america_active("en").unwrap()),
            (Continent::SouthAmerica, repo.south_america_active("en").unwrap()),
            (Continent::Oceania, repo.oceania_active("en").unwrap()),
            (Continent::Antarctica, repo.antarctica_active("en").unwrap()),
        ];
        let mut total = 0;
        for (continent, records) in named {
            assert!(!records.is_empty());
            assert!(records.iter().all(|r| r.continent == continent));
            let sorted = {
                let mut c = codes(&records);
                c.sort();
                c
            };
            assert_eq!(codes(&records), sorted);
            total += records.len();
        }
        assert_eq!(total, COUNTRY_SEED_COUNT);

        let antarctica = repo.antarctica_active("fr").unwrap();
        assert_eq!(codes(&antarctica), vec!["AQ", "BV", "TF"]);
    }

    #[test]
    fn test_preset_args_are_uniform() {
        for preset in Preset::ALL {
            let args = preset.args("ja");
            assert_eq!(args.sort_by, SortField::Code);
            assert!(!args.descending);
            assert_eq!(args.limit, None);
            assert_eq!(args.offset, None);
            assert_eq!(args.filters.status, Some(CountryStatus::Active));
            assert_eq!(args.filters.continent, preset.continent());
            assert_eq!(Preset::for_continent(preset.continent()), preset);
        }
    }

    #[test]
    fn test_lookup_code() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);

        let us = repo.lookup_code("us", "en").unwrap().unwrap();
        assert_eq!(us.code, "US");
        assert_eq!(us.continent, Continent::NorthAmerica);

        assert!(repo.lookup_code("XX", "en").unwrap().is_none());
    }

    #[test]
    fn test_mapping_failure_discards_results() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.with_connection(|conn| {
            // same shape without the CHECK constraints
            conn.execute_batch(
                "CREATE TABLE countries (
                    country_code TEXT PRIMARY KEY, ar TEXT, de TEXT, en TEXT, es TEXT,
                    fr TEXT, ja TEXT, pt TEXT, ru TEXT, zh_hans TEXT, zh_hant TEXT,
                    continent INTEGER, status INTEGER);
                 INSERT INTO countries VALUES ('AA','a','a','a','a','a','a','a','a','a','a',1,1);
                 INSERT INTO countries VALUES ('BB','b','b','b','b','b','b','b','b','b','b',9,1);",
            )?;
            Ok(())
        })
        .unwrap();

        let repo = CountryRepository::new(&db);
        let err = repo.select(&CountrySelectArgs::default()).unwrap_err();
        assert!(matches!(err, DatabaseError::Query(_)));
    }

    #[test]
    fn test_missing_table_is_query_error() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let repo = CountryRepository::new(&db);
        let err = repo.select(&CountrySelectArgs::default()).unwrap_err();
        assert!(matches!(err, DatabaseError::Query(_)));
    }

    #[test]
    fn test_released_provider_is_connection_error() {
        let db = setup_test_db();
        db.release();
        let repo = CountryRepository::new(&db);
        let err = repo.select(&CountrySelectArgs::default()).unwrap_err();
        assert!(matches!(err, DatabaseError::Connection { .. }));
    }

    #[test]
    fn test_deadline_already_passed() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);
        let args = CountrySelectArgs::default();

        let past = Instant::now() - Duration::from_millis(1);
        let err = repo.select_with_deadline(&args, Some(past)).unwrap_err();
        assert!(matches!(err, DatabaseError::DeadlineExceeded));

        let future = Instant::now() + Duration::from_secs(60);
        let records = repo.select_with_deadline(&args, Some(future)).unwrap();
        assert_eq!(records.len(), COUNTRY_SEED_COUNT);
    }

    #[test]
    fn test_deadline_interrupts_running_statement() {
        let db = setup_test_db();
        let repo = CountryRepository::new(&db);
        let args = CountrySelectArgs::default();

        // 50M generated rows, sorted by code: far slower than the deadline
        db.with_connection(|conn| {
            conn.execute_batch(
                "DROP TABLE countries;
                 CREATE VIEW countries AS
                 WITH RECURSIVE n(i) AS (
                     SELECT 1 UNION ALL SELECT i + 1 FROM n WHERE i < 50000000
                 )
                 SELECT printf('%02d', i % 100) AS country_code,
                        'x' AS ar, 'x' AS de, 'x' AS en, 'x' AS es, 'x' AS fr,
                        'x' AS ja, 'x' AS pt, 'x' AS ru, 'x' AS zh_hans, 'x' AS zh_hant,
                        1 AS continent, 1 AS status
                 FROM n;",
            )?;
            Ok(())
        })
        .unwrap();

        let start = Instant::now();
        let deadline = start + Duration::from_millis(50);
        let err = repo.select_with_deadline(&args, Some(deadline)).unwrap_err();
        assert!(matches!(err, DatabaseError::DeadlineExceeded));
        assert!(start.elapsed() < Duration::from_secs(10));

        // the expired handler must not interrupt later statements
        db.with_connection(|conn| {
            conn.execute_batch("DROP VIEW countries;")?;
            SchemaManager::new(conn).initialize()
        })
        .unwrap();
        assert_eq!(repo.seed().unwrap(), COUNTRY_SEED_COUNT);
        assert_eq!(repo.select(&args).unwrap().len(), COUNTRY_SEED_COUNT);
    }

    #[test]
    fn test_concurrent_reads() {
        let db = std::sync::Arc::new(setup_test_db());
        let handles: Vec<_> = Continent::ALL
            .into_iter()
            .map(|continent| {
                let db = db.clone();
                std::thread::spawn(move || {
                    let repo = CountryRepository::new(db.as_ref());
                    repo.preset(Preset::for_continent(Some(continent)), "en")
                        .unwrap()
                        .len()
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, COUNTRY_SEED_COUNT);
    }
}
