//! List Controller
//!
//! Sortable table of vehicles with delete confirmation and a retry path when
//! the store reports an error.

use crate::app::entities::AppEntities;
use crate::domain::sort::{SortField, SortOrder};
use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::i18n::t;
use crate::utils::format::format_price;

/// Arrow shown next to a sortable column header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRow {
    pub id: VehicleId,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: String,
}

impl From<&Vehicle> for VehicleRow {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            color: vehicle.color.clone(),
            price: format_price(vehicle.price),
        }
    }
}

/// What the list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading { message: String },
    Error { message: String, retry_label: String },
    Ready { title: String, rows: Vec<VehicleRow> },
}

/// Confirmation dialog contents for a delete
#[derive(Debug, Clone, PartialEq)]
pub struct DeletePrompt {
    pub id: VehicleId,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Vehicle list controller
pub struct ListController {
    entities: AppEntities,
}

impl ListController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Columns offering a sort toggle
    pub fn sortable_fields(&self) -> [SortField; 2] {
        [SortField::Year, SortField::Price]
    }

    /// Header click: toggle direction on the active field, otherwise switch
    /// to the clicked field ascending
    pub fn handle_sort(&self, field: SortField) {
        let store = &self.entities.store;
        if store.sort_field() == Some(field) {
            store.set_sort_order(store.sort_order().toggled());
        } else {
            store.set_sort_field(Some(field));
            store.set_sort_order(SortOrder::Asc);
        }
    }

    pub fn sort_indicator(&self, field: SortField) -> SortIndicator {
        let snapshot = self.entities.store.snapshot();
        if snapshot.sort_field != Some(field) {
            return SortIndicator::Unsorted;
        }
        match snapshot.sort_order {
            SortOrder::Asc => SortIndicator::Ascending,
            SortOrder::Desc => SortIndicator::Descending,
        }
    }

    /// Current list contents
    pub fn view(&self) -> ListView {
        let locale = self.entities.locale;
        let snapshot = self.entities.store.snapshot();

        if snapshot.is_loading {
            return ListView::Loading {
                message: t(locale, "list-loading"),
            };
        }

        if !snapshot.error.is_empty() {
            return ListView::Error {
                message: format!("{}: {}", t(locale, "list-load-error"), snapshot.error),
                retry_label: t(locale, "action-retry"),
            };
        }

        let rows: Vec<VehicleRow> = snapshot.sorted().iter().map(VehicleRow::from).collect();
        ListView::Ready {
            title: format!("{} ({})", t(locale, "list-title"), rows.len()),
            rows,
        }
    }

    /// Retry button on the error view
    pub fn retry(&self) {
        self.entities.store.refresh();
    }

    /// Confirmation text for deleting a vehicle, if it exists
    pub fn delete_prompt(&self, id: VehicleId) -> Option<DeletePrompt> {
        let locale = self.entities.locale;
        let vehicle = self.entities.store.vehicle(id)?;
        Some(DeletePrompt {
            id,
            title: t(locale, "delete-title"),
            message: format!(
                "{} {}? {}",
                t(locale, "delete-confirm"),
                vehicle.display_name(),
                t(locale, "delete-irreversible")
            ),
            confirm_label: t(locale, "action-delete"),
            cancel_label: t(locale, "action-cancel"),
        })
    }

    /// Delete after the user confirmed
    pub fn confirm_delete(&self, id: VehicleId) -> usize {
        self.entities.store.delete_vehicle(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::error::Error;
    use crate::state::vehicles_state::test_support::{GatedSource, empty_store, toyota, vehicle};
    use crate::state::{StoreOptions, VehicleStore};
    use std::sync::Arc;
    use tokio::sync::oneshot;

    fn controller() -> ListController {
        let store = Arc::new(empty_store());
        ListController::new(AppEntities::with_store(store, Locale::EnUS))
    }

    #[test]
    fn test_handle_sort_switches_field_ascending() {
        let list = controller();
        // Store starts on year/desc
        list.handle_sort(SortField::Price);
        assert_eq!(list.entities.store.sort_field(), Some(SortField::Price));
        assert_eq!(list.entities.store.sort_order(), SortOrder::Asc);
        assert_eq!(list.sort_indicator(SortField::Price), SortIndicator::Ascending);
        assert_eq!(list.sort_indicator(SortField::Year), SortIndicator::Unsorted);
    }

    #[test]
    fn test_handle_sort_toggles_same_field() {
        let list = controller();
        list.handle_sort(SortField::Year);
        assert_eq!(list.sort_indicator(SortField::Year), SortIndicator::Ascending);
        list.handle_sort(SortField::Year);
        assert_eq!(list.sort_indicator(SortField::Year), SortIndicator::Descending);
    }

    #[test]
    fn test_view_ready_uses_sorted_rows() {
        let list = controller();
        list.entities.store.set_vehicles(vec![
            vehicle(1, 2010, 5000.0),
            Vehicle { id: 2, ..toyota() },
            vehicle(3, 2015, 1500.5),
        ]);

        let ListView::Ready { title, rows } = list.view() else {
            panic!("expected ready view");
        };
        assert_eq!(title, "Vehicles (3)");
        // Default sort is year descending
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(rows[0].price, "$20,000");
        assert_eq!(rows[1].price, "$1,500.50");
    }

    #[test]
    fn test_view_loading_takes_precedence() {
        let list = controller();
        list.entities.store.set_error("boom");
        list.entities.store.set_is_loading(true);
        assert!(matches!(list.view(), ListView::Loading { .. }));
    }

    #[test]
    fn test_view_error() {
        let list = controller();
        list.entities.store.set_error("network down");
        let ListView::Error { message, retry_label } = list.view() else {
            panic!("expected error view");
        };
        assert_eq!(message, "Loading error: network down");
        assert_eq!(retry_label, "Try again");
    }

    #[tokio::test]
    async fn test_successful_retry_leaves_error_view() {
        let (fail_tx, fail_rx) = oneshot::channel();
        let (ok_tx, ok_rx) = oneshot::channel();
        fail_tx
            .send(Err(Error::Status {
                url: "http://gateway.test/vehicles".to_string(),
                status: 502,
            }))
            .expect("send failure");
        ok_tx.send(Ok(vec![toyota()])).expect("send vehicles");

        let options = StoreOptions {
            surface_fetch_errors: true,
            ..StoreOptions::default()
        };
        let store = Arc::new(VehicleStore::new(
            Arc::new(GatedSource::new(vec![fail_rx, ok_rx])),
            options,
        ));
        let list = ListController::new(AppEntities::with_store(store.clone(), Locale::EnUS));

        assert!(store.fetch_vehicles().await.is_err());
        assert!(matches!(list.view(), ListView::Error { .. }));

        store.fetch_vehicles().await.expect("retry");
        let ListView::Ready { rows, .. } = list.view() else {
            panic!("expected ready view after retry");
        };
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_delete_prompt_and_confirm() {
        let list = controller();
        list.entities.store.set_vehicles(vec![toyota(), vehicle(2, 2000, 1.0)]);

        let prompt = list.delete_prompt(1).expect("prompt");
        assert_eq!(
            prompt.message,
            "Are you sure you want to delete Toyota Camry? This action cannot be undone."
        );
        assert_eq!(prompt.confirm_label, "Delete");
        assert_eq!(prompt.cancel_label, "Cancel");
        assert!(list.delete_prompt(99).is_none());

        assert_eq!(list.confirm_delete(1), 1);
        assert_eq!(list.entities.store.len(), 1);
    }
}
