//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Russian
    #[serde(rename = "ru")]
    RuRU,
}

impl Locale {
    /// Pick a locale from the user's system settings, English otherwise
    pub fn detect() -> Self {
        let tag = locale_config::Locale::user_default().to_string();
        Self::from_tag(&tag)
    }

    /// Map a language tag such as "ru-RU" or "en_US.UTF-8" to a locale
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("ru") {
            Locale::RuRU
        } else {
            Locale::EnUS
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
    OnceLock::new();

/// Initialize translations (key -> (en, ru))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Page
    map.insert("page-title", ("Vehicle Management", "Управление машинами"));
    map.insert(
        "page-subtitle",
        (
            "View, create, edit and delete vehicles",
            "Просмотр, создание, редактирование и удаление машин",
        ),
    );
    map.insert("tab-list", ("List", "Список"));
    map.insert("tab-map", ("Map", "Карта"));

    // Actions
    map.insert("action-refresh", ("Refresh", "Обновить"));
    map.insert("action-add", ("Add vehicle", "Добавить машину"));
    map.insert("action-retry", ("Try again", "Попробовать снова"));
    map.insert("action-cancel", ("Cancel", "Отмена"));
    map.insert("action-delete", ("Delete", "Удалить"));
    map.insert("action-create", ("Create", "Создать"));
    map.insert("action-update", ("Update", "Обновить"));
    map.insert("action-edit-vehicle", ("Edit vehicle", "Редактировать машину"));

    // List
    map.insert("list-title", ("Vehicles", "Список машин"));
    map.insert("list-loading", ("Loading vehicles...", "Загрузка машин..."));
    map.insert("list-load-error", ("Loading error", "Ошибка загрузки"));
    map.insert("delete-title", ("Delete vehicle?", "Удалить машину?"));
    map.insert(
        "delete-confirm",
        ("Are you sure you want to delete", "Вы уверены, что хотите удалить"),
    );
    map.insert(
        "delete-irreversible",
        ("This action cannot be undone.", "Это действие нельзя отменить."),
    );

    // Table columns
    map.insert("col-name", ("Make", "Марка"));
    map.insert("col-model", ("Model", "Модель"));
    map.insert("col-year", ("Year", "Год"));
    map.insert("col-color", ("Color", "Цвет"));
    map.insert("col-price", ("Price", "Цена"));
    map.insert("col-coordinates", ("Coordinates", "Координаты"));

    // Form
    map.insert("form-create-title", ("Add new vehicle", "Добавить новую машину"));
    map.insert("form-edit-title", ("Edit vehicle", "Редактировать машину"));
    map.insert(
        "form-required",
        (
            "Please fill in all required fields.",
            "Пожалуйста, заполните все обязательные поля.",
        ),
    );
    map.insert(
        "form-year-range",
        ("Year is out of the allowed range.", "Год вне допустимого диапазона."),
    );
    map.insert(
        "form-price-negative",
        ("Price cannot be negative.", "Цена не может быть отрицательной."),
    );
    map.insert(
        "form-created",
        ("New vehicle created successfully!", "Новый автомобиль успешно создан!"),
    );
    map.insert(
        "form-updated",
        ("Vehicle updated successfully!", "Автомобиль успешно обновлен!"),
    );
    map.insert("form-saving", ("Saving...", "Сохранение..."));

    // Map
    map.insert("map-title", ("Vehicle map", "Карта машин"));
    map.insert("map-loading", ("Loading map...", "Загрузка карты..."));
    map.insert(
        "map-empty",
        ("No vehicles to show on the map", "Нет машин для отображения на карте"),
    );

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    if let Some(&(en, ru)) = translations().get(key) {
        match locale {
            Locale::EnUS => en.to_string(),
            Locale::RuRU => ru.to_string(),
        }
    } else {
        // Fallback: return the key itself
        key.to_string()
    }
}
