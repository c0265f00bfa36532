//! Common types and data structures

/// Which screen the central panel is showing
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Directory,
    Detail,
}

/// Directory rendering mode
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DirectoryLayout {
    Grid,
    List,
}

/// Dataset manifest, either bundled or fetched from the remote source
#[derive(serde::Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub version: String,
    #[serde(default, alias = "count")]
    pub country_count: usize,
    #[serde(default)]
    pub countries: Vec<DatasetCountry>,
}

/// Individual country entry in the dataset
///
/// `name` and `region` default to empty strings rather than failing
/// deserialization; a record missing either simply never matches a
/// filter.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetCountry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alpha3_code: String,
    #[serde(default)]
    pub native_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub capital: String,
    pub population: Option<u64>,
    pub area: Option<f64>,
    #[serde(default)]
    pub top_level_domain: Vec<String>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub flags: Flags,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct Currency {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct Language {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub png: String,
}
