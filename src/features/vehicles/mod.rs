//! Vehicles Feature
//!
//! Headless controllers for the list, form and map views and the page that
//! hosts them. They read the store and call its mutators; the only state they
//! keep is transient dialog and tab state.

pub mod form;
pub mod list;
pub mod map;
pub mod page;

pub use form::{FormController, FormField, SubmitOutcome};
pub use list::{DeletePrompt, ListController, ListView, SortIndicator, VehicleRow};
pub use map::{MapController, MapMarker, MapView, MarkerPopup};
pub use page::{PageController, TabItem};
