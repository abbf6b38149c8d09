//! AppEntities - Shared Handles
//!
//! Everything the controllers need, collected in one cheaply cloneable value
//! created once at the application root.

use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::i18n::Locale;
use crate::services::VehicleSource;
use crate::state::{StoreOptions, VehicleStore};

/// Collection of shared handles
#[derive(Clone, Debug)]
pub struct AppEntities {
    /// The vehicle store
    pub store: Arc<VehicleStore>,
    /// Language used for every user-facing string
    pub locale: Locale,
}

impl AppEntities {
    /// Build the store from configuration and the given data source
    pub fn init(config: &AppConfig, source: Arc<dyn VehicleSource>) -> Self {
        let store = VehicleStore::new(source, StoreOptions::from(&config.store));
        Self {
            store: Arc::new(store),
            locale: config.locale.unwrap_or_else(Locale::detect),
        }
    }

    /// Wrap an existing store
    pub fn with_store(store: Arc<VehicleStore>, locale: Locale) -> Self {
        Self { store, locale }
    }
}
