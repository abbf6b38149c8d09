//! Navigation - Active Tab Management
//!
//! Defines the tabs of the vehicles page.

use serde::{Deserialize, Serialize};

/// Tabs available on the vehicles page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActiveTab {
    /// Sortable table of vehicles
    #[default]
    List,
    /// Vehicles plotted as map markers
    Map,
}

impl ActiveTab {
    /// Get the icon name for the tab
    pub fn icon(&self) -> &'static str {
        match self {
            ActiveTab::List => "list",
            ActiveTab::Map => "map",
        }
    }

    /// Get the translation key for the tab title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActiveTab::List => "tab-list",
            ActiveTab::Map => "tab-map",
        }
    }

    /// Get all tabs in display order
    pub fn all() -> &'static [ActiveTab] {
        &[ActiveTab::List, ActiveTab::Map]
    }
}
