//! Country listing lens
//!
//! Wraps [`CountryRepository`] reads with argument parsing and output
//! formatting.
//!
//! # Example
//!
//! ```rust,ignore
//! use countries::database::{CountriesDatabase, Continent};
//! use countries::lens::country::{CountryActiveArgs, CountryLens, CountryOutputFormat};
//!
//! let db = CountriesDatabase::open_in_memory()?;
//! let lens = CountryLens::new(db.provider());
//!
//! let args = CountryActiveArgs::default().with_continent(Continent::Europe);
//! let results = lens.active(&args)?;
//! println!("{}", lens.format_results(&results, &CountryOutputFormat::Simple));
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::database::{
    ConnectionProvider, Continent, CountryFilters, CountryRecord, CountryRepository,
    CountrySelectArgs, CountryStatus, DatabaseConn, Language, Preset, SortField,
};

// =============================================================================
// Types
// =============================================================================

/// Table row for a country
#[derive(Debug, Clone, Serialize, Deserialize, tabled::Tabled)]
pub struct CountryEntry {
    /// ISO 3166-1 alpha-2 country code
    pub code: String,
    /// Name in the requested language
    pub name: String,
    pub continent: String,
    pub status: String,
}

impl From<&CountryRecord> for CountryEntry {
    fn from(record: &CountryRecord) -> Self {
        CountryEntry {
            code: record.code.clone(),
            name: record.name.clone(),
            continent: record.continent.to_string(),
            status: record.status.to_string(),
        }
    }
}

/// Output format for country lens results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CountryOutputFormat {
    /// Table format with borders (default)
    #[default]
    Table,
    /// Markdown table
    Markdown,
    /// JSON format, one object per country with all localized names
    Json,
    /// Simple text format (code: name)
    Simple,
}

// =============================================================================
// Args
// =============================================================================

/// Arguments for a filtered country listing
///
/// Every filter is an exact match. The `name` filter applies to the column of
/// the requested language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[serde(default)]
pub struct CountryListArgs {
    /// Filter by country code, e.g. "DE"
    #[cfg_attr(feature = "cli", clap(long))]
    pub code: Option<String>,

    /// Filter by exact name in the requested language
    #[cfg_attr(feature = "cli", clap(long))]
    pub name: Option<String>,

    /// Filter by continent
    #[cfg_attr(feature = "cli", clap(long, value_enum))]
    pub continent: Option<Continent>,

    /// Filter by status
    #[cfg_attr(feature = "cli", clap(long, value_enum))]
    pub status: Option<CountryStatus>,

    /// Language for the name column: ar, de, en, es, fr, ja, pt, ru, zh-Hans, zh-Hant
    #[cfg_attr(feature = "cli", clap(short, long))]
    pub lang: Option<String>,

    /// Column to sort by: code, continent, status, or a language tag
    #[cfg_attr(feature = "cli", clap(short, long))]
    pub sort: Option<String>,

    /// Sort descending
    #[cfg_attr(feature = "cli", clap(long))]
    pub desc: bool,

    /// Maximum number of rows
    #[cfg_attr(feature = "cli", clap(long))]
    pub limit: Option<u32>,

    /// Number of rows to skip
    #[cfg_attr(feature = "cli", clap(long))]
    pub offset: Option<u32>,

    /// Output format
    #[cfg_attr(feature = "cli", clap(short, long, default_value = "table"))]
    pub format: CountryOutputFormat,
}

impl CountryListArgs {
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_continent(mut self, continent: Continent) -> Self {
        self.continent = Some(continent);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>, desc: bool) -> Self {
        self.sort = Some(sort.into());
        self.desc = desc;
        self
    }

    pub fn with_page(mut self, limit: Option<u32>, offset: Option<u32>) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Set output format
    pub fn with_format(mut self, format: CountryOutputFormat) -> Self {
        self.format = format;
        self
    }

    fn language_tag(&self) -> &str {
        self.lang.as_deref().unwrap_or(Language::English.tag())
    }

    /// Convert to repository arguments, rejecting unknown sort columns
    pub fn to_select_args(&self) -> Result<CountrySelectArgs> {
        let language = Language::resolve(self.language_tag());

        let mut filters = CountryFilters::new();
        filters.code = self.code.as_ref().map(|c| c.to_uppercase());
        if let Some(name) = &self.name {
            filters = filters.with_name(language, name.clone());
        }
        filters.continent = self.continent;
        filters.status = self.status;

        let sort_by = match &self.sort {
            Some(s) => s.parse::<SortField>()?,
            None => SortField::Code,
        };

        let mut args = CountrySelectArgs::new(filters)
            .with_language(self.language_tag())
            .sort_by(sort_by, self.desc);
        args.limit = self.limit;
        args.offset = self.offset;
        Ok(args)
    }
}

/// Arguments for listing active countries, optionally of one continent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[serde(default)]
pub struct CountryActiveArgs {
    /// Restrict to one continent
    #[cfg_attr(feature = "cli", clap(long, value_enum))]
    pub continent: Option<Continent>,

    /// Language for the name column
    #[cfg_attr(feature = "cli", clap(short, long))]
    pub lang: Option<String>,

    /// Output format
    #[cfg_attr(feature = "cli", clap(short, long, default_value = "table"))]
    pub format: CountryOutputFormat,
}

impl CountryActiveArgs {
    pub fn with_continent(mut self, continent: Continent) -> Self {
        self.continent = Some(continent);
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn preset(&self) -> Preset {
        Preset::for_continent(self.continent)
    }
}

// =============================================================================
// Lens
// =============================================================================

/// Country listing lens
pub struct CountryLens<'a, P: ConnectionProvider = DatabaseConn> {
    repo: CountryRepository<'a, P>,
}

impl<'a, P: ConnectionProvider> CountryLens<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            repo: CountryRepository::new(provider),
        }
    }

    /// Run a filtered listing
    pub fn list(&self, args: &CountryListArgs) -> Result<Vec<CountryRecord>> {
        let select_args = args.to_select_args()?;
        let results = self.repo.select(&select_args)?;
        debug!("country list returned {} rows", results.len());
        Ok(results)
    }

    /// Run one of the active-country presets
    pub fn active(&self, args: &CountryActiveArgs) -> Result<Vec<CountryRecord>> {
        let lang = args.lang.as_deref().unwrap_or(Language::English.tag());
        Ok(self.repo.preset(args.preset(), lang)?)
    }

    /// Format results based on output format
    pub fn format_results(
        &self,
        results: &[CountryRecord],
        format: &CountryOutputFormat,
    ) -> String {
        if results.is_empty() {
            return match format {
                CountryOutputFormat::Json => "[]".to_string(),
                _ => "No countries found".to_string(),
            };
        }

        match format {
            CountryOutputFormat::Table => {
                use tabled::settings::Style;
                use tabled::Table;
                let entries: Vec<CountryEntry> = results.iter().map(CountryEntry::from).collect();
                Table::new(entries).with(Style::rounded()).to_string()
            }
            CountryOutputFormat::Markdown => {
                use tabled::settings::Style;
                use tabled::Table;
                let entries: Vec<CountryEntry> = results.iter().map(CountryEntry::from).collect();
                Table::new(entries).with(Style::markdown()).to_string()
            }
            CountryOutputFormat::Json => self.format_json(results, true),
            CountryOutputFormat::Simple => results
                .iter()
                .map(|r| format!("{}: {}", r.code, r.name))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Format results as JSON
    pub fn format_json(&self, results: &[CountryRecord], pretty: bool) -> String {
        if pretty {
            serde_json::to_string_pretty(results).unwrap_or_default()
        } else {
            serde_json::to_string(results).unwrap_or_default()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{CountriesDatabase, COUNTRY_SEED_COUNT};

    #[test]
    fn test_list_defaults() {
        let db = CountriesDatabase::open_in_memory().unwrap();
        let lens = CountryLens::new(db.provider());

        let results = lens.list(&CountryListArgs::default()).unwrap();
        assert_eq!(results.len(), COUNTRY_SEED_COUNT);
        assert!(results.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn test_list_by_name_in_language() {
        let db = CountriesDatabase::open_in_memory().unwrap();
        let lens = CountryLens::new(db.provider());

        let args = CountryListArgs {
            name: Some("Deutschland".to_string()),
            ..Default::default()
        }
        .with_lang("de");
        let results = lens.list(&args).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "DE");
        assert_eq!(results[0].name, "Deutschland");
    }

    #[test]
    fn test_list_code_is_case_insensitive() {
        let db = CountriesDatabase::open_in_memory().unwrap();
        let lens = CountryLens::new(db.provider());

        let args = CountryListArgs {
            code: Some("fr".to_string()),
            ..Default::default()
        };
        let results = lens.list(&args).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "France");
    }

    #[test]
    fn test_list_rejects_unknown_sort() {
        let db = CountriesDatabase::open_in_memory().unwrap();
        let lens = CountryLens::new(db.provider());

        let args = CountryListArgs::default().with_sort("code; DROP TABLE countries", false);
        assert!(lens.list(&args).is_err());
        assert_eq!(db.countries().count().unwrap(), COUNTRY_SEED_COUNT as u64);
    }

    #[test]
    fn test_list_paging() {
        let db = CountriesDatabase::open_in_memory().unwrap();
        let lens = CountryLens::new(db.provider());

        let first = lens
            .list(&CountryListArgs::default().with_page(Some(5), None))
            .unwrap();
        let second = lens
            .list(&CountryListArgs::default().with_page(Some(5), Some(5)))
            .unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 5);
        assert!(first.last().unwrap().code < second[0].code);
    }

    #[test]
    fn test_active_preset() {
        let db = CountriesDatabase::open_in_memory().unwrap();
        let lens = CountryLens::new(db.provider());

        let args = CountryActiveArgs::default().with_continent(Continent::Antarctica);
        assert_eq!(args.preset(), Preset::AntarcticaActive);

        let codes: Vec<String> = lens
            .active(&args)
            .unwrap()
            .into_iter()
            .map(|r| r.code)
            .collect();
        assert_eq!(codes, vec!["AQ", "BV", "TF"]);

        let all = lens.active(&CountryActiveArgs::default()).unwrap();
        assert_eq!(all.len(), COUNTRY_SEED_COUNT);
    }

    #[test]
    fn test_args_from_json() {
        let args: CountryListArgs =
            serde_json::from_str(r#"{"continent":"europe","lang":"fr","sort":"fr","desc":true}"#)
                .unwrap();
        let select = args.to_select_args().unwrap();
        assert_eq!(select.filters.continent, Some(Continent::Europe));
        assert_eq!(select.sort_by, SortField::Name(Language::French));
        assert!(select.descending);
        assert!(matches!(args.format, CountryOutputFormat::Table));
    }

    #[test]
    fn test_format_results() {
        let db = CountriesDatabase::open_in_memory().unwrap();
        let lens = CountryLens::new(db.provider());
        let args = CountryListArgs {
            code: Some("DE".to_string()),
            ..Default::default()
        };
        let results = lens.list(&args).unwrap();

        let output = lens.format_results(&results, &CountryOutputFormat::Simple);
        assert_eq!(output, "DE: Germany");

        let output = lens.format_results(&results, &CountryOutputFormat::Table);
        assert!(output.contains("Germany"));
        assert!(output.contains("Europe"));

        let output = lens.format_results(&results, &CountryOutputFormat::Markdown);
        assert!(output.contains("| DE"));

        let output = lens.format_results(&results, &CountryOutputFormat::Json);
        assert!(output.contains("\"Deutschland\""));

        let output = lens.format_results(&[], &CountryOutputFormat::Simple);
        assert_eq!(output, "No countries found");

        let output = lens.format_results(&[], &CountryOutputFormat::Json);
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_format_json() {
        let db = CountriesDatabase::open_in_memory().unwrap();
        let lens = CountryLens::new(db.provider());
        let results = db.countries().antarctica_active("en").unwrap();

        let compact = lens.format_json(&results, false);
        assert!(compact.contains("AQ"));
        assert!(!compact.contains('\n'));

        let pretty = lens.format_json(&results, true);
        assert!(pretty.contains('\n'));
    }
}
