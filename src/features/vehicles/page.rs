//! Page Controller
//!
//! Vehicles page: owns the list, map and form controllers, the active tab,
//! and the initial load.

use crate::app::entities::AppEntities;
use crate::app::navigation::ActiveTab;
use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::i18n::t;

use super::form::FormController;
use super::list::ListController;
use super::map::MapController;

/// Tab header entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub tab: ActiveTab,
    pub icon: &'static str,
    pub label: String,
    pub active: bool,
}

/// Vehicles page controller
pub struct PageController {
    entities: AppEntities,
    active_tab: ActiveTab,
    list: ListController,
    map: MapController,
    form: FormController,
}

impl PageController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self {
            list: ListController::new(entities.clone()),
            map: MapController::new(entities.clone()),
            form: FormController::new(entities.clone()),
            active_tab: ActiveTab::default(),
            entities,
        }
    }

    /// Page shown for the first time: load the remote baseline
    pub fn mount(&self) {
        tracing::info!("Vehicles page mounted, loading vehicles");
        self.entities.store.refresh();
    }

    /// Refresh button
    pub fn refresh(&self) {
        tracing::info!("Refreshing vehicles");
        self.entities.store.refresh();
    }

    // ==================== Sub-controllers ====================

    pub fn list(&self) -> &ListController {
        &self.list
    }

    pub fn map(&self) -> &MapController {
        &self.map
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    // ==================== Tabs ====================

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    /// Tab headers in display order
    pub fn tabs(&self) -> Vec<TabItem> {
        ActiveTab::all()
            .iter()
            .map(|&tab| TabItem {
                tab,
                icon: tab.icon(),
                label: t(self.entities.locale, tab.title_key()),
                active: tab == self.active_tab,
            })
            .collect()
    }

    // ==================== Header ====================

    pub fn title(&self) -> String {
        t(self.entities.locale, "page-title")
    }

    pub fn subtitle(&self) -> String {
        t(self.entities.locale, "page-subtitle")
    }

    /// Refresh button label; disabled while loading
    pub fn refresh_button(&self) -> (String, bool) {
        let loading = self.entities.store.is_loading();
        let key = if loading { "list-loading" } else { "action-refresh" };
        (t(self.entities.locale, key), !loading)
    }

    // ==================== Editing ====================

    pub fn add_button_label(&self) -> String {
        t(self.entities.locale, "action-add")
    }

    /// Add button: open an empty form over the list tab
    pub fn add_vehicle(&mut self) {
        self.form.open_create();
        self.active_tab = ActiveTab::List;
    }

    /// Edit button in the list
    pub fn edit_vehicle(&mut self, vehicle: &Vehicle) {
        self.form.open_edit(vehicle);
    }

    /// Edit button in a map popup: open the form over the list tab
    pub fn map_vehicle_clicked(&mut self, id: VehicleId) -> bool {
        let Some(vehicle) = self.map.vehicle_for_edit(id) else {
            return false;
        };
        self.form.open_edit(&vehicle);
        self.active_tab = ActiveTab::List;
        true
    }

    /// Vehicle currently open in the form
    pub fn editing_vehicle(&self) -> Option<&Vehicle> {
        self.form.editing()
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }
}
