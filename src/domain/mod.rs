//! Domain - Pure Data Structures
//!
//! These types carry no store or I/O behavior and represent the business domain.

pub mod config;
pub mod sort;
pub mod vehicle;
