//! countryctl-core: country list model, search and fetch lifecycle
//!
//! - [`country`]: the record type and the REST Countries wire schema
//! - [`filter`]: case-insensitive name filtering
//! - [`debounce`]: last-value-wins timer driven by an explicit clock
//! - [`source`]: where the list comes from (HTTP or static)
//! - [`browser`]: per-mount state, render precedence and fetch task

pub mod browser;
pub mod config;
pub mod country;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod format;
pub mod source;

pub use browser::{BrowserState, BrowserView, CountryBrowser, LoadMessage};
pub use config::Config;
pub use country::{decode_countries, Country};
pub use debounce::Debouncer;
pub use error::{CountryError, Result, FETCH_FAILED_MESSAGE};
pub use filter::filter_countries;
pub use format::{format_population, group_digits};
pub use source::{CountrySource, HttpCountrySource, StaticCountrySource};
