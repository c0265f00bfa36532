//! Application constants and configuration

pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/wtfseanscool/country-atlas-data/main/countries.json";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bundled dataset snapshot, imported on first run and used as the
/// fallback when the remote dataset cannot be fetched.
pub const BUNDLED_DATASET: &str = include_str!("../assets/countries.json");

/// Quiet period after the last keystroke before a search evaluates.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
