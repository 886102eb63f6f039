//! Query composition for country reads
//!
//! [`CountrySelectArgs`] carries everything a read needs: sparse equality
//! filters, the display language, one sort field and optional pagination.
//! [`CountrySelectArgs::build_statement`] turns it into SQL text plus bound
//! parameters. Values never appear in the SQL text; column names and sort
//! direction come from closed enums only.

use super::types::{Continent, CountryStatus, Language};
use crate::error::DatabaseError;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the countries table
pub const COUNTRIES_TABLE: &str = "countries";

/// Columns in the order they are selected and mapped
pub(crate) const SELECT_COLUMNS: &str =
    "country_code, ar, de, en, es, fr, ja, pt, ru, zh_hans, zh_hant, continent, status";

// =============================================================================
// Filters
// =============================================================================

/// Sparse equality filters over the countries table
///
/// A filter is applied when its field is `Some`. Present filters are combined
/// with AND in a fixed order: code, the ten name columns in
/// [`Language::ALL`] order, continent, status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryFilters {
    pub code: Option<String>,
    pub ar: Option<String>,
    pub de: Option<String>,
    pub en: Option<String>,
    pub es: Option<String>,
    pub fr: Option<String>,
    pub ja: Option<String>,
    pub pt: Option<String>,
    pub ru: Option<String>,
    #[serde(rename = "zh-Hans")]
    pub zh_hans: Option<String>,
    #[serde(rename = "zh-Hant")]
    pub zh_hant: Option<String>,
    pub continent: Option<Continent>,
    pub status: Option<CountryStatus>,
}

impl CountryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by exact country code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Filter by exact name in one language
    pub fn with_name(mut self, language: Language, name: impl Into<String>) -> Self {
        *self.name_slot(language) = Some(name.into());
        self
    }

    pub fn with_continent(mut self, continent: Continent) -> Self {
        self.continent = Some(continent);
        self
    }

    pub fn with_status(mut self, status: CountryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Name filter for one language, if present
    pub fn name(&self, language: Language) -> Option<&str> {
        let slot = match language {
            Language::Arabic => &self.ar,
            Language::German => &self.de,
            Language::English => &self.en,
            Language::Spanish => &self.es,
            Language::French => &self.fr,
            Language::Japanese => &self.ja,
            Language::Portuguese => &self.pt,
            Language::Russian => &self.ru,
            Language::ChineseSimplified => &self.zh_hans,
            Language::ChineseTraditional => &self.zh_hant,
        };
        slot.as_deref()
    }

    fn name_slot(&mut self, language: Language) -> &mut Option<String> {
        match language {
            Language::Arabic => &mut self.ar,
            Language::German => &mut self.de,
            Language::English => &mut self.en,
            Language::Spanish => &mut self.es,
            Language::French => &mut self.fr,
            Language::Japanese => &mut self.ja,
            Language::Portuguese => &mut self.pt,
            Language::Russian => &mut self.ru,
            Language::ChineseSimplified => &mut self.zh_hans,
            Language::ChineseTraditional => &mut self.zh_hant,
        }
    }

    /// True when no filter is present
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Equality predicates as `(column, value)` pairs, in application order
    pub(crate) fn predicates(&self) -> Vec<(&'static str, Value)> {
        let mut predicates = Vec::new();

        if let Some(code) = &self.code {
            predicates.push(("country_code", Value::Text(code.clone())));
        }
        for language in Language::ALL {
            if let Some(name) = self.name(language) {
                predicates.push((language.column(), Value::Text(name.to_string())));
            }
        }
        if let Some(continent) = self.continent {
            predicates.push(("continent", Value::Integer(i64::from(continent.id()))));
        }
        if let Some(status) = self.status {
            predicates.push(("status", Value::Integer(i64::from(status.id()))));
        }

        predicates
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Column a read is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortField {
    #[default]
    Code,
    Name(Language),
    Continent,
    Status,
}

impl SortField {
    /// Column name in the countries table
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Code => "country_code",
            SortField::Name(language) => language.column(),
            SortField::Continent => "continent",
            SortField::Status => "status",
        }
    }
}

impl FromStr for SortField {
    type Err = DatabaseError;

    /// Accepts column names (`country_code`, `en`, `zh_hans`, ...), `code`,
    /// and language tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" | "country_code" => Ok(SortField::Code),
            "continent" => Ok(SortField::Continent),
            "status" => Ok(SortField::Status),
            other => Language::from_tag(other)
                .map(SortField::Name)
                .ok_or_else(|| DatabaseError::InvalidSortField(s.to_string())),
        }
    }
}

impl TryFrom<String> for SortField {
    type Error = DatabaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortField> for String {
    fn from(field: SortField) -> Self {
        field.column().to_string()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// =============================================================================
// Select arguments
// =============================================================================

/// Arguments of a country read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountrySelectArgs {
    pub filters: CountryFilters,
    /// Language tag used to resolve `name`; unknown tags resolve to English
    pub language: String,
    pub sort_by: SortField,
    pub descending: bool,
    /// Maximum number of rows; `None` or `Some(0)` means no cap
    pub limit: Option<u32>,
    /// Rows to skip; `None` or `Some(0)` means none
    pub offset: Option<u32>,
}

impl Default for CountrySelectArgs {
    fn default() -> Self {
        Self {
            filters: CountryFilters::default(),
            language: Language::English.tag().to_string(),
            sort_by: SortField::Code,
            descending: false,
            limit: None,
            offset: None,
        }
    }
}

impl CountrySelectArgs {
    pub fn new(filters: CountryFilters) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn sort_by(mut self, field: SortField, descending: bool) -> Self {
        self.sort_by = field;
        self.descending = descending;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Language that `name` resolves to
    pub fn resolved_language(&self) -> Language {
        Language::resolve(&self.language)
    }

    /// Compose the parameterized SELECT statement
    pub fn build_statement(&self) -> SelectStatement {
        let mut sql = format!("SELECT {} FROM {}", SELECT_COLUMNS, COUNTRIES_TABLE);
        let mut params: Vec<Value> = Vec::new();

        let predicates = self.filters.predicates();
        if !predicates.is_empty() {
            let mut conditions = Vec::with_capacity(predicates.len());
            for (column, value) in predicates {
                params.push(value);
                conditions.push(format!("{} = ?{}", column, params.len()));
            }
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        let direction = if self.descending { "DESC" } else { "ASC" };
        sql.push_str(&format!(" ORDER BY {} {}", self.sort_by.column(), direction));
        if self.sort_by != SortField::Code {
            // primary key keeps ties in a stable order
            sql.push_str(", country_code ASC");
        }

        let limit = self.limit.filter(|n| *n > 0);
        let offset = self.offset.filter(|n| *n > 0);
        match (limit, offset) {
            (Some(limit), Some(offset)) => {
                params.push(Value::Integer(i64::from(limit)));
                params.push(Value::Integer(i64::from(offset)));
                sql.push_str(&format!(" LIMIT ?{} OFFSET ?{}", params.len() - 1, params.len()));
            }
            (Some(limit), None) => {
                params.push(Value::Integer(i64::from(limit)));
                sql.push_str(&format!(" LIMIT ?{}", params.len()));
            }
            (None, Some(offset)) => {
                // SQLite needs a LIMIT clause before OFFSET; -1 means unbounded
                params.push(Value::Integer(i64::from(offset)));
                sql.push_str(&format!(" LIMIT -1 OFFSET ?{}", params.len()));
            }
            (None, None) => {}
        }

        SelectStatement { sql, params }
    }
}

/// SQL text with its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "SELECT country_code, ar, de, en, es, fr, ja, pt, ru, zh_hans, zh_hant, continent, status FROM countries";

    #[test]
    fn test_no_filters() {
        let stmt = CountrySelectArgs::default().build_statement();
        assert_eq!(stmt.sql, format!("{} ORDER BY country_code ASC", BASE));
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn test_filters_follow_fixed_order() {
        // set in reverse order on purpose
        let filters = CountryFilters::new()
            .with_status(CountryStatus::Active)
            .with_continent(Continent::Europe)
            .with_name(Language::ChineseTraditional, "法国")
            .with_name(Language::French, "France")
            .with_name(Language::Arabic, "فرنسا")
            .with_code("FR");
        let stmt = CountrySelectArgs::new(filters).build_statement();

        assert_eq!(
            stmt.sql,
            format!(
                "{} WHERE country_code = ?1 AND ar = ?2 AND fr = ?3 AND zh_hant = ?4 \
                 AND continent = ?5 AND status = ?6 ORDER BY country_code ASC",
                BASE
            )
        );
        assert_eq!(
            stmt.params,
            vec![
                Value::Text("FR".to_string()),
                Value::Text("فرنسا".to_string()),
                Value::Text("France".to_string()),
                Value::Text("法国".to_string()),
                Value::Integer(3),
                Value::Integer(1),
            ]
        );
    }

    #[test]
    fn test_status_filter_is_applied() {
        let filters = CountryFilters::new().with_status(CountryStatus::Inactive);
        let stmt = CountrySelectArgs::new(filters).build_statement();
        assert!(stmt.sql.contains("WHERE status = ?1"));
        assert_eq!(stmt.params, vec![Value::Integer(0)]);
    }

    #[test]
    fn test_values_are_never_inlined() {
        let hostile = "x' OR '1'='1";
        let filters = CountryFilters::new()
            .with_code(hostile)
            .with_name(Language::English, "'; DROP TABLE countries; --");
        let stmt = CountrySelectArgs::new(filters).build_statement();

        assert!(!stmt.sql.contains(hostile));
        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(stmt.params.len(), 2);
    }

    #[test]
    fn test_sort_direction_and_tie_break() {
        let stmt = CountrySelectArgs::default()
            .sort_by(SortField::Code, true)
            .build_statement();
        assert!(stmt.sql.ends_with("ORDER BY country_code DESC"));

        let stmt = CountrySelectArgs::default()
            .sort_by(SortField::Name(Language::Japanese), false)
            .build_statement();
        assert!(stmt.sql.ends_with("ORDER BY ja ASC, country_code ASC"));

        let stmt = CountrySelectArgs::default()
            .sort_by(SortField::Continent, true)
            .build_statement();
        assert!(stmt.sql.ends_with("ORDER BY continent DESC, country_code ASC"));
    }

    #[test]
    fn test_pagination_variants() {
        let stmt = CountrySelectArgs::default()
            .with_limit(10)
            .with_offset(20)
            .build_statement();
        assert!(stmt.sql.ends_with(" LIMIT ?1 OFFSET ?2"));
        assert_eq!(stmt.params, vec![Value::Integer(10), Value::Integer(20)]);

        let stmt = CountrySelectArgs::default().with_limit(5).build_statement();
        assert!(stmt.sql.ends_with(" LIMIT ?1"));
        assert_eq!(stmt.params, vec![Value::Integer(5)]);

        let stmt = CountrySelectArgs::default().with_offset(7).build_statement();
        assert!(stmt.sql.ends_with(" LIMIT -1 OFFSET ?1"));
        assert_eq!(stmt.params, vec![Value::Integer(7)]);

        let stmt = CountrySelectArgs::default()
            .with_limit(0)
            .with_offset(0)
            .build_statement();
        assert!(!stmt.sql.contains("LIMIT"));
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn test_pagination_params_follow_filters() {
        let filters = CountryFilters::new().with_continent(Continent::Asia);
        let stmt = CountrySelectArgs::new(filters)
            .with_limit(3)
            .with_offset(4)
            .build_statement();
        assert!(stmt.sql.contains("continent = ?1"));
        assert!(stmt.sql.ends_with("LIMIT ?2 OFFSET ?3"));
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("country_code".parse::<SortField>().unwrap(), SortField::Code);
        assert_eq!("code".parse::<SortField>().unwrap(), SortField::Code);
        assert_eq!(
            "zh_hans".parse::<SortField>().unwrap(),
            SortField::Name(Language::ChineseSimplified)
        );
        assert_eq!(
            "EN".parse::<SortField>().unwrap(),
            SortField::Name(Language::English)
        );
        assert_eq!("status".parse::<SortField>().unwrap(), SortField::Status);

        let err = "en; DROP TABLE countries".parse::<SortField>().unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidSortField(_)));
    }

    #[test]
    fn test_filters_is_empty() {
        assert!(CountryFilters::new().is_empty());
        assert!(!CountryFilters::new().with_code("").is_empty());
    }

    #[test]
    fn test_select_args_from_json() {
        let args: CountrySelectArgs = serde_json::from_str(
            r#"{"filters": {"continent": "europe"}, "language": "de", "sort_by": "en", "limit": 5}"#,
        )
        .unwrap();
        assert_eq!(args.filters.continent, Some(Continent::Europe));
        assert_eq!(args.sort_by, SortField::Name(Language::English));
        assert_eq!(args.resolved_language(), Language::German);
        assert_eq!(args.limit, Some(5));
        assert!(!args.descending);

        let bad = serde_json::from_str::<CountrySelectArgs>(r#"{"sort_by": "population"}"#);
        assert!(bad.is_err());
    }
}
