//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Get the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(Error::ConfigDir)?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Config file location: `$VEHICLE_MANAGER_CONFIG` or the platform config dir
pub fn config_path() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(app_config_dir()?.join(CONFIG_FILE_NAME)),
    }
}

/// Load a TOML config file, falling back to defaults when it does not exist
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save a config as pretty TOML, creating parent directories
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sort::{SortField, SortOrder};
    use crate::i18n::Locale;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config.store.sort_field, Some(SortField::Year));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.locale = Some(Locale::RuRU);
        config.api.timeout_secs = Some(15);
        config.store.sort_field = Some(SortField::Price);
        config.store.sort_order = SortOrder::Asc;
        config.log.directory = Some("/tmp/vehicle-logs".to_string());

        save_config(&path, &config).expect("save");
        let loaded = load_config(&path).expect("load");

        assert_eq!(loaded.locale, Some(Locale::RuRU));
        assert_eq!(loaded.api.timeout_secs, Some(15));
        assert_eq!(loaded.store.sort_field, Some(SortField::Price));
        assert_eq!(loaded.store.sort_order, SortOrder::Asc);
        assert_eq!(loaded.log.directory.as_deref(), Some("/tmp/vehicle-logs"));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[store]\nsort_order = \"sideways\"\n").expect("write");

        let err = load_config(&path).expect_err("bad sort order");
        assert!(matches!(err, Error::TomlDe { .. }));
    }
}
