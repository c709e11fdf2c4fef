//! Datasource configuration.
//!
//! The raw configuration selects bundles and languages:
//!
//! ```json
//! {
//!   "bundles":   { "default": false, "selected": ["article"] },
//!   "languages": { "default": true,  "selected": ["und"] }
//! }
//! ```
//!
//! With `default: true` everything except the selected values is indexed.
//! With `default: false` only the selected values are indexed.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::DatasourceError;

/// Default number of entities per enumeration page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Selection of values along one axis (bundles or languages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Whether values are indexed by default. When true, `selected` lists
    /// exclusions; when false, it lists the only indexed values.
    #[serde(default = "default_true")]
    pub default: bool,
    /// The selected values.
    #[serde(default)]
    pub selected: BTreeSet<String>,
}

fn default_true() -> bool {
    true
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl SelectionConfig {
    /// Select every value.
    pub fn all() -> Self {
        Self {
            default: true,
            selected: BTreeSet::new(),
        }
    }

    /// Select only the given values.
    pub fn only<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default: false,
            selected: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Select everything except the given values.
    pub fn except<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default: true,
            selected: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration of which entities a datasource exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasourceConfig {
    /// Bundle selection.
    #[serde(default)]
    pub bundles: SelectionConfig,
    /// Language selection.
    #[serde(default)]
    pub languages: SelectionConfig,
}

impl DatasourceConfig {
    /// Create a configuration from a bundle and a language selection.
    pub fn new(bundles: SelectionConfig, languages: SelectionConfig) -> Self {
        Self { bundles, languages }
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, DatasourceError> {
        serde_json::from_str(json)
            .map_err(|e| DatasourceError::config(format!("Invalid datasource config: {}", e)))
    }

    /// Read a configuration from a JSON file.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasourceError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }
}

/// Runtime settings of a datasource, independent of its configuration.
#[derive(Debug, Clone)]
pub struct DatasourceSettings {
    /// Number of entities per page when enumerating item ids.
    pub page_size: usize,
}

impl Default for DatasourceSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DatasourceSettings {
    /// Create settings with a custom page size.
    pub fn with_page_size(page_size: usize) -> Result<Self, DatasourceError> {
        if page_size == 0 {
            return Err(DatasourceError::config("page_size must be greater than zero"));
        }
        Ok(Self { page_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = DatasourceConfig::from_json_str(
            r#"{
                "bundles": {"default": false, "selected": ["item"]},
                "languages": {"default": true, "selected": ["l0"]}
            }"#,
        )
        .unwrap();

        assert_eq!(config.bundles, SelectionConfig::only(["item"]));
        assert_eq!(config.languages, SelectionConfig::except(["l0"]));
    }

    #[test]
    fn test_missing_sections_select_everything() {
        let config = DatasourceConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DatasourceConfig::default());
        assert!(config.bundles.default);
        assert!(config.languages.selected.is_empty());
    }

    #[test]
    fn test_missing_default_flag_is_true() {
        let config =
            DatasourceConfig::from_json_str(r#"{"languages": {"selected": ["en"]}}"#).unwrap();
        assert_eq!(config.languages, SelectionConfig::except(["en"]));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let result = DatasourceConfig::from_json_str(r#"{"bundles": 3}"#);
        assert!(matches!(result, Err(DatasourceError::ConfigError(_))));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(DatasourceSettings::with_page_size(0).is_err());
        assert_eq!(DatasourceSettings::with_page_size(25).unwrap().page_size, 25);
    }
}
