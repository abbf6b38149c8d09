//! Vehicle - The Managed Record

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VEHICLE_COLOR;

/// Vehicle identifier, unique among in-memory records
pub type VehicleId = i64;

/// Colors offered by the form; the store itself accepts any string
pub const COLORS: [&str; 10] = [
    "red", "blue", "green", "yellow", "black", "white", "silver", "gray", "orange", "purple",
];

/// A single vehicle record, shaped like the remote JSON objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Make (e.g. "Toyota")
    pub name: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl Vehicle {
    /// Build a vehicle from form data, placed at the origin
    pub fn from_draft(id: VehicleId, draft: VehicleDraft) -> Self {
        Self {
            id,
            name: draft.name,
            model: draft.model,
            year: draft.year,
            color: draft.color,
            price: draft.price,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Copy every draft field over this vehicle, keeping id and coordinates
    pub fn merged_with(&self, draft: &VehicleDraft) -> Self {
        Self {
            name: draft.name.clone(),
            model: draft.model.clone(),
            year: draft.year,
            color: draft.color.clone(),
            price: draft.price,
            ..self.clone()
        }
    }

    /// "Name Model" label used by popups and prompts
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.model)
    }
}

/// Editable part of a vehicle, as held by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub name: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            model: String::new(),
            year: current_year(),
            color: DEFAULT_VEHICLE_COLOR.to_string(),
            price: 0.0,
        }
    }
}

impl From<&Vehicle> for VehicleDraft {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            name: vehicle.name.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            color: vehicle.color.clone(),
            price: vehicle.price,
        }
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camry() -> Vehicle {
        Vehicle {
            id: 7,
            name: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2021,
            color: "red".to_string(),
            price: 20000.0,
            latitude: 59.9,
            longitude: 30.3,
        }
    }

    #[test]
    fn test_deserialize_remote_shape() {
        let json = r#"{"id":1,"name":"Toyota","model":"Camry","year":2021,"color":"red","price":20000,"latitude":59.9,"longitude":30.3}"#;
        let vehicle: Vehicle = serde_json::from_str(json).expect("valid vehicle");
        assert_eq!(vehicle.id, 1);
        assert_eq!(vehicle.price, 20000.0);
        assert_eq!(vehicle.longitude, 30.3);
    }

    #[test]
    fn test_missing_coordinates_default_to_zero() {
        let json = r#"{"id":2,"name":"Lada","model":"Niva","year":2019,"color":"green","price":9000}"#;
        let vehicle: Vehicle = serde_json::from_str(json).expect("valid vehicle");
        assert_eq!(vehicle.latitude, 0.0);
        assert_eq!(vehicle.longitude, 0.0);
    }

    #[test]
    fn test_from_draft_places_at_origin() {
        let draft = VehicleDraft {
            name: "Kia".to_string(),
            model: "Rio".to_string(),
            year: 2020,
            color: "blue".to_string(),
            price: 12000.0,
        };
        let vehicle = Vehicle::from_draft(42, draft);
        assert_eq!(vehicle.id, 42);
        assert_eq!((vehicle.latitude, vehicle.longitude), (0.0, 0.0));
        assert_eq!(vehicle.display_name(), "Kia Rio");
    }

    #[test]
    fn test_merge_keeps_identity_and_position() {
        let original = camry();
        let mut draft = VehicleDraft::from(&original);
        draft.name = "Lexus".to_string();
        draft.price = 35000.0;

        let merged = original.merged_with(&draft);
        assert_eq!(merged.id, original.id);
        assert_eq!(merged.latitude, original.latitude);
        assert_eq!(merged.name, "Lexus");
        assert_eq!(merged.price, 35000.0);
        assert_eq!(merged.model, "Camry");
    }

    #[test]
    fn test_draft_defaults() {
        let draft = VehicleDraft::default();
        assert!(draft.name.is_empty());
        assert_eq!(draft.color, "red");
        assert_eq!(draft.year, current_year());
        assert_eq!(draft.price, 0.0);
    }
}
