//! Application Layer
//!
//! Contains app initialization, shared handles, and tab navigation.

pub mod application;
pub mod entities;
pub mod navigation;
