//! State - Store Modules
//!
//! The vehicle store and the subscription plumbing it publishes through.

pub mod subscription;
pub mod vehicles_state;

pub use subscription::{SubscriberRegistry, Subscription};
pub use vehicles_state::{FetchOutcome, StoreOptions, VehicleStore, VehiclesSnapshot};
