//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::VEHICLES_URL;
use crate::domain::sort::{SortField, SortOrder};
use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// UI language; detected from the system when absent
    pub locale: Option<Locale>,
    /// Remote data source
    pub api: ApiConfig,
    /// Initial store settings
    pub store: StoreConfig,
    /// Logging setup
    pub log: LogConfig,
}

/// Remote vehicle endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint returning the JSON vehicle array
    pub url: String,
    /// Request timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: VEHICLES_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Initial sort field; `None` keeps insertion order
    pub sort_field: Option<SortField>,
    /// Initial sort direction
    pub sort_order: SortOrder,
    /// Copy fetch failures into the store error message
    pub surface_fetch_errors: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            sort_field: Some(SortField::Year),
            sort_order: SortOrder::Desc,
            surface_fetch_errors: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Directory for daily rolling log files; stderr only when absent
    pub directory: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config");
        assert_eq!(config.api.url, VEHICLES_URL);
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.store.sort_field, Some(SortField::Year));
        assert_eq!(config.store.sort_order, SortOrder::Desc);
        assert!(!config.store.surface_fetch_errors);
        assert_eq!(config.log.level, "info");
        assert!(config.locale.is_none());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let text = r#"
locale = "ru"

[api]
url = "http://localhost:8080/vehicles"
timeout_secs = 5

[store]
sort_field = "price"
sort_order = "asc"
surface_fetch_errors = true
"#;
        let config: AppConfig = toml::from_str(text).expect("valid config");
        assert_eq!(config.locale, Some(Locale::RuRU));
        assert_eq!(config.api.url, "http://localhost:8080/vehicles");
        assert_eq!(config.api.timeout_secs, Some(5));
        assert_eq!(config.store.sort_field, Some(SortField::Price));
        assert_eq!(config.store.sort_order, SortOrder::Asc);
        assert!(config.store.surface_fetch_errors);
        assert_eq!(config.log.level, "info");
    }
}
