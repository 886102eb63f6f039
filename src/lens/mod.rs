//! Lens module
//!
//! Lenses combine the database read API with output formatting so the same
//! arguments work from the CLI, from serde payloads, or from library code.
//!
//! # Feature Requirements
//!
//! | Lens | Feature Required | Dependencies |
//! |------|-----------------|--------------|
//! | `CountryLens` | `display` | tabled |
//!
//! # Usage
//!
//! ```rust,ignore
//! use countries::database::CountriesDatabase;
//! use countries::lens::country::{CountryLens, CountryListArgs, CountryOutputFormat};
//!
//! let db = CountriesDatabase::open_in_memory()?;
//! let lens = CountryLens::new(db.provider());
//!
//! let args = CountryListArgs::default().with_lang("de");
//! let results = lens.list(&args)?;
//! println!("{}", lens.format_results(&results, &CountryOutputFormat::Table));
//! ```

pub mod country;
