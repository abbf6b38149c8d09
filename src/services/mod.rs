//! Service Layer
//!
//! The service layer abstracts the remote data source and owns the async
//! runtime the store's fetches run on.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Service Layer                 │
//! │  ┌──────────────────┐   ┌──────────────────┐  │
//! │  │    VehicleApi    │   │  Runtime bridge  │  │
//! │  │ (VehicleSource)  │   │ (spawn/block_on) │  │
//! │  └──────────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼ Vec<Vehicle>
//! ┌──────────────────────────────────────────────┐
//! │                  State Layer                  │
//! │                (VehicleStore)                 │
//! └──────────────────────────────────────────────┘
//! ```

mod runtime;
mod vehicle_api;

pub use runtime::*;
pub use vehicle_api::*;
