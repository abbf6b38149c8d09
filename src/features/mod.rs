//! Features - Vertical Feature Slices
//!
//! Each feature contains its page and the controllers behind its views.

pub mod vehicles;
