//! Form Controller
//!
//! Create/edit dialog. Holds the transient draft, validates it and hands the
//! result to the store. Validation messages are shown through the store's
//! error string.

use crate::app::entities::AppEntities;
use crate::constants::MIN_VEHICLE_YEAR;
use crate::domain::vehicle::{COLORS, Vehicle, VehicleDraft, current_year};
use crate::error::{Result, ValidationSnafu};
use crate::i18n::t;

/// Inputs of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Model,
    Year,
    Color,
    Price,
}

impl FormField {
    pub fn label_key(&self) -> &'static str {
        match self {
            FormField::Name => "col-name",
            FormField::Model => "col-model",
            FormField::Year => "col-year",
            FormField::Color => "col-color",
            FormField::Price => "col-price",
        }
    }
}

/// Successful submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created { vehicle: Vehicle, message: String },
    Updated { vehicle: Vehicle, message: String },
}

/// Vehicle form controller
pub struct FormController {
    entities: AppEntities,
    draft: VehicleDraft,
    editing: Option<Vehicle>,
    is_open: bool,
}

impl FormController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self {
            entities,
            draft: VehicleDraft::default(),
            editing: None,
            is_open: false,
        }
    }

    // ==================== Getters ====================

    pub fn draft(&self) -> &VehicleDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<&Vehicle> {
        self.editing.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Editing only exposes name and price
    pub fn visible_fields(&self) -> &'static [FormField] {
        if self.editing.is_some() {
            &[FormField::Name, FormField::Price]
        } else {
            &[
                FormField::Name,
                FormField::Model,
                FormField::Year,
                FormField::Color,
                FormField::Price,
            ]
        }
    }

    /// Palette offered by the color select
    pub fn color_options(&self) -> &'static [&'static str] {
        &COLORS
    }

    /// Accepted year range for the year input
    pub fn year_bounds(&self) -> (i32, i32) {
        (MIN_VEHICLE_YEAR, current_year() + 1)
    }

    pub fn title(&self) -> String {
        let key = if self.editing.is_some() {
            "form-edit-title"
        } else {
            "form-create-title"
        };
        t(self.entities.locale, key)
    }

    pub fn submit_label(&self) -> String {
        let key = if self.entities.store.is_loading() {
            "form-saving"
        } else if self.editing.is_some() {
            "action-update"
        } else {
            "action-create"
        };
        t(self.entities.locale, key)
    }

    /// Message shown under the inputs, empty when there is none
    pub fn error(&self) -> String {
        self.entities.store.error()
    }

    // ==================== Open / Close ====================

    /// Open an empty dialog
    pub fn open_create(&mut self) {
        self.draft = VehicleDraft::default();
        self.editing = None;
        self.is_open = true;
    }

    /// Open the dialog prefilled from an existing vehicle
    pub fn open_edit(&mut self, vehicle: &Vehicle) {
        self.draft = VehicleDraft::from(vehicle);
        self.editing = Some(vehicle.clone());
        self.is_open = true;
    }

    /// Reset the draft, close, and clear the store error
    pub fn close(&mut self) {
        self.draft = VehicleDraft::default();
        self.editing = None;
        self.is_open = false;
        self.entities.store.clear_error();
    }

    // ==================== Inputs ====================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.draft.model = model.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.draft.color = color.into();
    }

    /// Year text input; unparsable or zero falls back to the current year
    pub fn set_year_input(&mut self, text: &str) {
        self.draft.year = match text.trim().parse::<i32>() {
            Ok(year) if year != 0 => year,
            _ => current_year(),
        };
    }

    /// Price text input; unparsable falls back to zero
    pub fn set_price_input(&mut self, text: &str) {
        self.draft.price = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .unwrap_or(0.0);
    }

    // ==================== Submit ====================

    /// Validate the draft and create or update the vehicle
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let locale = self.entities.locale;
        let store = self.entities.store.clone();
        store.clear_error();

        if let Some(message) = self.validation_error() {
            store.set_error(message.clone());
            return ValidationSnafu { message }.fail();
        }

        let outcome = match self.editing.as_ref() {
            Some(original) => {
                let vehicle = original.merged_with(&self.draft);
                if !store.update_vehicle(vehicle.clone()) {
                    tracing::warn!("Edited vehicle {} no longer exists", vehicle.id);
                }
                SubmitOutcome::Updated {
                    vehicle,
                    message: t(locale, "form-updated"),
                }
            }
            None => SubmitOutcome::Created {
                vehicle: store.create_vehicle(self.draft.clone()),
                message: t(locale, "form-created"),
            },
        };

        self.close();
        Ok(outcome)
    }

    /// Localized reason the draft cannot be submitted, if any
    pub fn validation_error(&self) -> Option<String> {
        let locale = self.entities.locale;
        let draft = &self.draft;
        let (min_year, max_year) = self.year_bounds();

        let missing = draft.name.trim().is_empty()
            || draft.model.trim().is_empty()
            || draft.color.trim().is_empty()
            || draft.year == 0
            || draft.price == 0.0;

        if missing {
            Some(t(locale, "form-required"))
        } else if draft.year < min_year || draft.year > max_year {
            Some(t(locale, "form-year-range"))
        } else if draft.price < 0.0 {
            Some(t(locale, "form-price-negative"))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::i18n::Locale;
    use crate::state::vehicles_state::test_support::{empty_store, toyota};
    use std::sync::Arc;

    fn controller(locale: Locale) -> FormController {
        let store = Arc::new(empty_store());
        FormController::new(AppEntities::with_store(store, locale))
    }

    fn fill_valid(form: &mut FormController) {
        form.set_name("Kia");
        form.set_model("Rio");
        form.set_year_input("2020");
        form.set_color("blue");
        form.set_price_input("12000.50");
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let mut form = controller(Locale::EnUS);
        form.entities.store.set_vehicles(vec![toyota()]);
        form.open_create();
        fill_valid(&mut form);

        let outcome = form.submit().expect("submit");
        let SubmitOutcome::Created { vehicle, message } = outcome else {
            panic!("expected create");
        };
        assert_eq!(vehicle.id, 2);
        assert_eq!(vehicle.price, 12000.5);
        assert_eq!((vehicle.latitude, vehicle.longitude), (0.0, 0.0));
        assert_eq!(message, "New vehicle created successfully!");
        assert_eq!(form.entities.store.len(), 2);
        assert!(!form.is_open());
        assert_eq!(form.draft(), &VehicleDraft::default());
    }

    #[test]
    fn test_missing_fields_set_store_error() {
        let mut form = controller(Locale::RuRU);
        form.open_create();
        form.set_name("Kia");

        let err = form.submit().expect_err("invalid");
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(form.error(), "Пожалуйста, заполните все обязательные поля.");
        assert!(form.entities.store.is_empty());
        assert!(form.is_open());
    }

    #[test]
    fn test_zero_price_counts_as_missing() {
        let mut form = controller(Locale::EnUS);
        form.open_create();
        fill_valid(&mut form);
        form.set_price_input("0");
        assert_eq!(
            form.validation_error().as_deref(),
            Some("Please fill in all required fields.")
        );
    }

    #[test]
    fn test_year_and_price_bounds() {
        let mut form = controller(Locale::EnUS);
        form.open_create();
        fill_valid(&mut form);

        form.set_year_input("1899");
        assert_eq!(
            form.validation_error().as_deref(),
            Some("Year is out of the allowed range.")
        );

        form.set_year_input(&(current_year() + 2).to_string());
        assert!(form.validation_error().is_some());

        form.set_year_input("2020");
        form.set_price_input("-5");
        assert_eq!(
            form.validation_error().as_deref(),
            Some("Price cannot be negative.")
        );
    }

    #[test]
    fn test_numeric_inputs_fall_back() {
        let mut form = controller(Locale::EnUS);
        form.set_year_input("abc");
        assert_eq!(form.draft().year, current_year());
        form.set_year_input("0");
        assert_eq!(form.draft().year, current_year());
        form.set_price_input("lots");
        assert_eq!(form.draft().price, 0.0);
    }

    #[test]
    fn test_edit_merges_and_keeps_position() {
        let mut form = controller(Locale::EnUS);
        let original = toyota();
        form.entities.store.set_vehicles(vec![original.clone()]);

        form.open_edit(&original);
        assert_eq!(form.visible_fields(), &[FormField::Name, FormField::Price]);
        assert_eq!(form.title(), "Edit vehicle");
        form.set_name("Toyota GR");
        form.set_price_input("25000");

        let SubmitOutcome::Updated { vehicle, message } = form.submit().expect("submit") else {
            panic!("expected update");
        };
        assert_eq!(message, "Vehicle updated successfully!");
        assert_eq!(vehicle.id, original.id);
        assert_eq!(vehicle.latitude, original.latitude);

        let stored = form.entities.store.vehicle(original.id).expect("stored");
        assert_eq!(stored.name, "Toyota GR");
        assert_eq!(stored.price, 25000.0);
        assert_eq!(stored.model, "Camry");
        assert_eq!(form.entities.store.len(), 1);
    }

    #[test]
    fn test_close_clears_error() {
        let mut form = controller(Locale::EnUS);
        form.open_create();
        let _ = form.submit();
        assert!(!form.error().is_empty());

        form.close();
        assert!(form.error().is_empty());
        assert!(form.editing().is_none());
    }

    #[test]
    fn test_submit_label_reflects_loading() {
        let form = controller(Locale::EnUS);
        assert_eq!(form.submit_label(), "Create");
        form.entities.store.set_is_loading(true);
        assert_eq!(form.submit_label(), "Saving...");
    }
}
