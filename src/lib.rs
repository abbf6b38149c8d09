//! Vehicle Manager Library
//!
//! Client-side store for a small collection of vehicle records: an observable
//! state container with add/update/delete/replace mutators, a sorted view and
//! a remote fetch, plus headless controllers for the list, form and map views.

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod logging;
pub mod services;
pub mod state;
pub mod utils;
