//! Country record types
//!
//! Languages, continents and statuses are closed sets. Their SQL encodings are
//! fixed here and nowhere else.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Language
// =============================================================================

/// Display languages stored for every country
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "de")]
    German,
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "zh-Hans")]
    ChineseSimplified,
    #[serde(rename = "zh-Hant")]
    ChineseTraditional,
}

impl Language {
    /// All languages, in column order
    pub const ALL: [Language; 10] = [
        Language::Arabic,
        Language::German,
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Japanese,
        Language::Portuguese,
        Language::Russian,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
    ];

    /// BCP 47 tag, e.g. `zh-Hans`
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::German => "de",
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Japanese => "ja",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::ChineseSimplified => "zh-Hans",
            Language::ChineseTraditional => "zh-Hant",
        }
    }

    /// Column holding this language's names in the `countries` table
    pub fn column(&self) -> &'static str {
        match self {
            Language::ChineseSimplified => "zh_hans",
            Language::ChineseTraditional => "zh_hant",
            other => other.tag(),
        }
    }

    /// Parse a language tag
    ///
    /// Matching ignores case and treats `_` like `-`, so both tags and column
    /// names are accepted. `zh-CN` and `zh-TW` are accepted for the two
    /// Chinese scripts. Returns `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Language> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = match normalized.as_str() {
            "ar" => Language::Arabic,
            "de" => Language::German,
            "en" => Language::English,
            "es" => Language::Spanish,
            "fr" => Language::French,
            "ja" => Language::Japanese,
            "pt" => Language::Portuguese,
            "ru" => Language::Russian,
            "zh-hans" | "zh-cn" => Language::ChineseSimplified,
            "zh-hant" | "zh-tw" => Language::ChineseTraditional,
            _ => return None,
        };
        Some(language)
    }

    /// Resolve a free-form tag, falling back to English when unrecognized
    pub fn resolve(tag: &str) -> Language {
        Self::from_tag(tag).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Continent
// =============================================================================

/// Continent a country is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Continent {
    Africa = 1,
    Asia = 2,
    Europe = 3,
    NorthAmerica = 4,
    SouthAmerica = 5,
    /// Australia / Oceania
    Oceania = 6,
    Antarctica = 7,
}

impl Continent {
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    /// Value stored in the `continent` column
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<i64> for Continent {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Continent::ALL
            .into_iter()
            .find(|c| i64::from(c.id()) == value)
            .ok_or(value)
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Australia / Oceania",
            Continent::Antarctica => "Antarctica",
        };
        f.write_str(name)
    }
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "1" | "africa" => Ok(Continent::Africa),
            "2" | "asia" => Ok(Continent::Asia),
            "3" | "europe" => Ok(Continent::Europe),
            "4" | "northamerica" => Ok(Continent::NorthAmerica),
            "5" | "southamerica" => Ok(Continent::SouthAmerica),
            "6" | "oceania" | "australia" | "australiaoceania" => Ok(Continent::Oceania),
            "7" | "antarctica" => Ok(Continent::Antarctica),
            _ => Err(format!("unknown continent '{}'", s)),
        }
    }
}

impl ToSql for Continent {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(self.id())))
    }
}

impl FromSql for Continent {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = i64::column_result(value)?;
        Continent::try_from(raw).map_err(FromSqlError::OutOfRange)
    }
}

// =============================================================================
// Status
// =============================================================================

/// Whether a country is offered to callers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CountryStatus {
    Inactive = 0,
    #[default]
    Active = 1,
}

impl CountryStatus {
    /// Value stored in the `status` column
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<i64> for CountryStatus {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CountryStatus::Inactive),
            1 => Ok(CountryStatus::Active),
            other => Err(other),
        }
    }
}

impl fmt::Display for CountryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryStatus::Inactive => write!(f, "inactive"),
            CountryStatus::Active => write!(f, "active"),
        }
    }
}

impl ToSql for CountryStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(self.id())))
    }
}

impl FromSql for CountryStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = i64::column_result(value)?;
        CountryStatus::try_from(raw).map_err(FromSqlError::OutOfRange)
    }
}

// =============================================================================
// Records
// =============================================================================

/// Country names in every supported language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedNames {
    pub ar: String,
    pub de: String,
    pub en: String,
    pub es: String,
    pub fr: String,
    pub ja: String,
    pub pt: String,
    pub ru: String,
    #[serde(rename = "zh-Hans")]
    pub zh_hans: String,
    #[serde(rename = "zh-Hant")]
    pub zh_hant: String,
}

impl LocalizedNames {
    /// Name in the given language
    pub fn get(&self, language: Language) -> &str {
        match language {
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
        }
    }
}

/// One row of the countries table, with its name resolved for a language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 country code
    pub code: String,
    pub names: LocalizedNames,
    pub continent: Continent,
    pub status: CountryStatus,
    /// Name in the requested language
    pub name: String,
}
