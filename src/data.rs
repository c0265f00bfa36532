//! Dataset loading
//!
//! The bundled snapshot is the normal data source; the remote dataset
//! (see `app::refresh`) only replaces it when a newer version is
//! published. Any load failure degrades to an empty dataset — the
//! directory renders "No results found." rather than an error state.

use crate::constants::BUNDLED_DATASET;
use crate::types::Dataset;
use tracing::{debug, error};

/// Parse the bundled dataset snapshot.
///
/// A parse failure yields an empty dataset, never an error: downstream
/// code cannot distinguish "no data" from "no matches", and that
/// ambiguity is deliberate.
pub fn load_bundled() -> Dataset {
    match serde_json::from_str::<Dataset>(BUNDLED_DATASET) {
        Ok(dataset) => {
            debug!(
                version = %dataset.version,
                declared = dataset.country_count,
                count = dataset.countries.len(),
                "Bundled dataset parsed"
            );
            dataset
        }
        Err(e) => {
            error!(error = %e, "Failed to parse bundled dataset");
            Dataset {
                version: String::new(),
                country_count: 0,
                countries: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let dataset = load_bundled();
        assert!(!dataset.countries.is_empty());
        assert!(!dataset.version.is_empty());
    }

    #[test]
    fn bundled_records_are_well_formed() {
        let dataset = load_bundled();
        for country in &dataset.countries {
            assert!(!country.name.is_empty());
            assert!(!country.region.is_empty(), "{} has no region", country.name);
        }
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        let dataset: Dataset =
            serde_json::from_str("{\"countries\": []}").unwrap_or_else(|_| Dataset {
                version: String::new(),
                country_count: 0,
                countries: Vec::new(),
            });
        assert!(dataset.countries.is_empty());

        let broken = serde_json::from_str::<Dataset>("not json");
        assert!(broken.is_err());
    }
}
