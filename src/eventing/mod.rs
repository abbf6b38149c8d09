//! Eventing - Change Notifications
//!
//! Events published by the store to its subscribers.

pub mod store_event;
