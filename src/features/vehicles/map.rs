//! Map Controller
//!
//! Plots the unsorted collection as point markers. Tile rendering is left to
//! whatever draws the view model.

use crate::app::entities::AppEntities;
use crate::constants::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM};
use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::i18n::{Locale, t};
use crate::utils::format::{format_coordinates, format_price};

/// Popup body of a marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub title: String,
    pub year: i32,
    pub color: String,
    pub price: String,
    pub coordinates_label: String,
    pub coordinates: String,
    /// Label of the button that opens the vehicle in the form
    pub edit_label: String,
}

/// One vehicle on the map
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: VehicleId,
    /// (latitude, longitude)
    pub position: (f64, f64),
    pub popup: MarkerPopup,
}

impl MapMarker {
    pub fn new(vehicle: &Vehicle, locale: Locale) -> Self {
        Self {
            id: vehicle.id,
            position: (vehicle.latitude, vehicle.longitude),
            popup: MarkerPopup {
                title: vehicle.display_name(),
                year: vehicle.year,
                color: vehicle.color.clone(),
                price: format_price(vehicle.price),
                coordinates_label: t(locale, "col-coordinates"),
                coordinates: format_coordinates(vehicle.latitude, vehicle.longitude),
                edit_label: t(locale, "action-edit-vehicle"),
            },
        }
    }
}

/// What the map area shows
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Loading {
        message: String,
    },
    Empty {
        title: String,
        message: String,
    },
    Ready {
        title: String,
        center: (f64, f64),
        zoom: u8,
        markers: Vec<MapMarker>,
    },
}

/// Vehicle map controller
pub struct MapController {
    entities: AppEntities,
}

impl MapController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Current map contents
    pub fn view(&self) -> MapView {
        let locale = self.entities.locale;
        let snapshot = self.entities.store.snapshot();

        if snapshot.is_loading {
            return MapView::Loading {
                message: t(locale, "map-loading"),
            };
        }

        if snapshot.vehicles.is_empty() {
            return MapView::Empty {
                title: t(locale, "map-title"),
                message: t(locale, "map-empty"),
            };
        }

        MapView::Ready {
            title: format!("{} ({})", t(locale, "map-title"), snapshot.vehicles.len()),
            center: map_center(&snapshot.vehicles),
            zoom: DEFAULT_MAP_ZOOM,
            markers: snapshot
                .vehicles
                .iter()
                .map(|vehicle| MapMarker::new(vehicle, locale))
                .collect(),
        }
    }

    /// Vehicle behind a marker's edit button
    pub fn vehicle_for_edit(&self, id: VehicleId) -> Option<Vehicle> {
        self.entities.store.vehicle(id)
    }
}

/// First vehicle's position, or the default center for an empty list
pub fn map_center(vehicles: &[Vehicle]) -> (f64, f64) {
    vehicles
        .first()
        .map(|v| (v.latitude, v.longitude))
        .unwrap_or(DEFAULT_MAP_CENTER)
}
