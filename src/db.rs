//! Database module for Country Atlas
//! Handles SQLite storage for country records and session state

use crate::types::{Currency, DatasetCountry, Flags, Language};
use rusqlite::{params, Connection, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

/// Country record stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub alpha3_code: String,
    pub native_name: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub top_level_domain: Vec<String>,
    pub currencies: Vec<Currency>,
    pub languages: Vec<Language>,
    pub borders: Vec<String>,
    pub flags: Flags,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        debug!(path = %path.display(), "Database opened");
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS countries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                alpha3_code TEXT NOT NULL DEFAULT '',
                native_name TEXT NOT NULL DEFAULT '',
                region TEXT NOT NULL DEFAULT '',
                subregion TEXT NOT NULL DEFAULT '',
                capital TEXT NOT NULL DEFAULT '',
                population INTEGER,
                area REAL,
                top_level_domain TEXT NOT NULL DEFAULT '[]',
                currencies TEXT NOT NULL DEFAULT '[]',
                languages TEXT NOT NULL DEFAULT '[]',
                borders TEXT NOT NULL DEFAULT '[]',
                flag_svg TEXT NOT NULL DEFAULT '',
                flag_png TEXT NOT NULL DEFAULT ''
            );

            CREATE INDEX IF NOT EXISTS idx_countries_region ON countries(region);
            CREATE INDEX IF NOT EXISTS idx_countries_alpha3 ON countries(alpha3_code);

            CREATE TABLE IF NOT EXISTS session (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS metadata (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Clear all countries from database
    pub fn clear_countries(&self) -> Result<()> {
        self.conn.execute("DELETE FROM countries", [])?;
        Ok(())
    }

    /// Import countries from a parsed dataset
    pub fn import_countries(&self, countries: &[DatasetCountry]) -> Result<usize> {
        let mut imported = 0;

        for country in countries {
            let result = self.conn.execute(
                "INSERT INTO countries (name, alpha3_code, native_name, region, subregion,
                    capital, population, area, top_level_domain, currencies, languages,
                    borders, flag_svg, flag_png)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
                 ON CONFLICT(name) DO UPDATE SET
                    alpha3_code = excluded.alpha3_code,
                    native_name = excluded.native_name,
                    region = excluded.region,
                    subregion = excluded.subregion,
                    capital = excluded.capital,
                    population = excluded.population,
                    area = excluded.area,
                    top_level_domain = excluded.top_level_domain,
                    currencies = excluded.currencies,
                    languages = excluded.languages,
                    borders = excluded.borders,
                    flag_svg = excluded.flag_svg,
                    flag_png = excluded.flag_png",
                params![
                    country.name,
                    country.alpha3_code,
                    country.native_name,
                    country.region,
                    country.subregion,
                    country.capital,
                    country.population.map(|p| p as i64),
                    country.area,
                    serde_json::to_string(&country.top_level_domain).unwrap_or_default(),
                    serde_json::to_string(&country.currencies).unwrap_or_default(),
                    serde_json::to_string(&country.languages).unwrap_or_default(),
                    serde_json::to_string(&country.borders).unwrap_or_default(),
                    country.flags.svg,
                    country.flags.png,
                ],
            );

            match result {
                Ok(_) => imported += 1,
                Err(e) => error!(country = %country.name, error = %e, "Failed to import country"),
            }
        }

        debug!(imported = imported, total = countries.len(), "Countries imported");
        Ok(imported)
    }

    /// Get all countries, ordered by name
    pub fn get_all_countries(&self) -> Result<Vec<Country>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, alpha3_code, native_name, region, subregion, capital,
                    population, area, top_level_domain, currencies, languages, borders,
                    flag_svg, flag_png
             FROM countries ORDER BY name COLLATE NOCASE",
        )?;

        let countries = stmt
            .query_map([], |row| {
                let tld: String = row.get(9)?;
                let currencies: String = row.get(10)?;
                let languages: String = row.get(11)?;
                let borders: String = row.get(12)?;
                Ok(Country {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    alpha3_code: row.get(2)?,
                    native_name: row.get(3)?,
                    region: row.get(4)?,
                    subregion: row.get(5)?,
                    capital: row.get(6)?,
                    population: row.get::<_, Option<i64>>(7)?.map(|p| p as u64),
                    area: row.get(8)?,
                    top_level_domain: serde_json::from_str(&tld).unwrap_or_default(),
                    currencies: serde_json::from_str(&currencies).unwrap_or_default(),
                    languages: serde_json::from_str(&languages).unwrap_or_default(),
                    borders: serde_json::from_str(&borders).unwrap_or_default(),
                    flags: Flags {
                        svg: row.get(13)?,
                        png: row.get(14)?,
                    },
                })
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(countries)
    }

    /// Get a session value (the desktop analog of browser sessionStorage)
    pub fn session_get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM session WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    /// Set a session value
    pub fn session_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO session (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a session value
    pub fn session_remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM session WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Get dataset version
    pub fn get_dataset_version(&self) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM metadata WHERE key = 'version'")?;
        let mut rows = stmt.query([])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    /// Set dataset version
    pub fn set_dataset_version(&self, version: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO metadata (key, value) VALUES ('version', ?1)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![version],
        )?;
        Ok(())
    }

    /// Get country count
    pub fn country_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM countries", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dataset;

    fn sample_dataset() -> Dataset {
        serde_json::from_str(
            r#"{
                "version": "2024-01",
                "count": 2,
                "countries": [
                    {
                        "name": "Iceland",
                        "alpha3Code": "ISL",
                        "nativeName": "Ísland",
                        "region": "Europe",
                        "subregion": "Northern Europe",
                        "capital": "Reykjavik",
                        "population": 334300,
                        "area": 103000.0,
                        "topLevelDomain": [".is"],
                        "currencies": [{"code": "ISK", "name": "Icelandic króna", "symbol": "kr"}],
                        "languages": [{"name": "Icelandic"}],
                        "borders": [],
                        "flags": {"svg": "https://flagcdn.com/is.svg", "png": "https://flagcdn.com/w320/is.png"}
                    },
                    {
                        "name": "Niue",
                        "region": "Oceania",
                        "capital": "Alofi"
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn import_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(&dir.path().join("atlas.db")).unwrap();
        let dataset = sample_dataset();

        let imported = db.import_countries(&dataset.countries).unwrap();
        assert_eq!(imported, 2);
        assert_eq!(db.country_count().unwrap(), 2);

        let countries = db.get_all_countries().unwrap();
        assert_eq!(countries[0].name, "Iceland");
        assert_eq!(countries[0].population, Some(334_300));
        assert_eq!(countries[0].currencies[0].code, "ISK");
        assert_eq!(countries[0].top_level_domain, vec![".is".to_string()]);

        // Sparse record: absent numerics stay absent, lists stay empty
        assert_eq!(countries[1].name, "Niue");
        assert_eq!(countries[1].population, None);
        assert!(countries[1].borders.is_empty());
        assert_eq!(countries[1].flags.png, "");
    }

    #[test]
    fn reimport_upserts_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(&dir.path().join("atlas.db")).unwrap();
        let dataset = sample_dataset();

        db.import_countries(&dataset.countries).unwrap();
        db.import_countries(&dataset.countries).unwrap();
        assert_eq!(db.country_count().unwrap(), 2);
    }

    #[test]
    fn session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(&dir.path().join("atlas.db")).unwrap();

        assert_eq!(db.session_get("selected_country").unwrap(), None);
        db.session_set("selected_country", "Iceland").unwrap();
        assert_eq!(
            db.session_get("selected_country").unwrap().as_deref(),
            Some("Iceland")
        );
        db.session_set("selected_country", "Niue").unwrap();
        assert_eq!(
            db.session_get("selected_country").unwrap().as_deref(),
            Some("Niue")
        );
        db.session_remove("selected_country").unwrap();
        assert_eq!(db.session_get("selected_country").unwrap(), None);
    }

    #[test]
    fn dataset_version_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(&dir.path().join("atlas.db")).unwrap();

        assert_eq!(db.get_dataset_version().unwrap(), None);
        db.set_dataset_version("2024-01").unwrap();
        assert_eq!(
            db.get_dataset_version().unwrap().as_deref(),
            Some("2024-01")
        );
    }
}
