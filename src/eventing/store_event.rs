//! StoreEvent - Store Change Notification Enum
//!
//! Everything a subscriber can learn about a store mutation. Consumers
//! re-read the store (or take a snapshot) after receiving an event.

use crate::domain::sort::{SortField, SortOrder};

/// Events emitted by the vehicle store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The vehicle collection changed (add, update, delete or replace)
    VehiclesChanged {
        /// Collection length after the change
        len: usize,
    },

    /// Loading flag flipped
    LoadingChanged(bool),

    /// Error message changed (empty = no error)
    ErrorChanged(String),

    /// Sort parameters changed
    SortChanged {
        field: Option<SortField>,
        order: SortOrder,
    },
}
