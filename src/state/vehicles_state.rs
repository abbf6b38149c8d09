//! Vehicle Store
//!
//! Single source of truth for the vehicle collection and the UI-facing status
//! flags (loading, error, sort parameters). The store is constructed
//! explicitly and shared as `Arc<VehicleStore>`; consumers read it through
//! getters or [`VehicleStore::snapshot`] and learn about changes through
//! [`VehicleStore::subscribe`].
//!
//! Events are published while the state lock is still held, so subscribers
//! receive them in the same order the changes were made, even when several
//! threads mutate the store at once.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::config::StoreConfig;
use crate::domain::sort::{SortField, SortOrder, sort_vehicles};
use crate::domain::vehicle::{Vehicle, VehicleDraft, VehicleId};
use crate::error::Result;
use crate::eventing::store_event::StoreEvent;
use crate::services::{VehicleSource, spawn_named_in_tokio};
use crate::state::subscription::{SubscriberRegistry, Subscription};

/// Initial settings for a store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOptions {
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
    /// Copy fetch failures into the error message
    pub surface_fetch_errors: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::from(&StoreConfig::default())
    }
}

impl From<&StoreConfig> for StoreOptions {
    fn from(config: &StoreConfig) -> Self {
        Self {
            sort_field: config.sort_field,
            sort_order: config.sort_order,
            surface_fetch_errors: config.surface_fetch_errors,
        }
    }
}

/// Owned copy of the whole store state
#[derive(Debug, Clone, PartialEq)]
pub struct VehiclesSnapshot {
    /// Collection in insertion order
    pub vehicles: Vec<Vehicle>,
    pub is_loading: bool,
    /// Empty when there is no error
    pub error: String,
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
}

impl VehiclesSnapshot {
    /// Sorted view of this snapshot
    pub fn sorted(&self) -> Vec<Vehicle> {
        sort_vehicles(&self.vehicles, self.sort_field, self.sort_order)
    }
}

/// Result of a fetch that reached the remote source successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the collection
    Applied { count: usize },
    /// A newer fetch was issued meanwhile; the response was discarded
    Superseded,
}

#[derive(Debug)]
struct VehiclesState {
    vehicles: Vec<Vehicle>,
    is_loading: bool,
    error: String,
    /// Message a failed fetch put into `error`, if it is still there
    fetch_error: Option<String>,
    sort_field: Option<SortField>,
    sort_order: SortOrder,
    /// Strictly greater than every id the store has held
    next_id: VehicleId,
    /// Ticket of the most recently issued fetch
    latest_request: u64,
}

impl VehiclesState {
    fn new(options: &StoreOptions) -> Self {
        Self {
            vehicles: Vec::new(),
            is_loading: false,
            error: String::new(),
            fetch_error: None,
            sort_field: options.sort_field,
            sort_order: options.sort_order,
            next_id: 1,
            latest_request: 0,
        }
    }

    fn observe_id(&mut self, id: VehicleId) {
        self.next_id = self.next_id.max(id.saturating_add(1));
    }

    fn allocate_id(&mut self) -> VehicleId {
        let id = self.next_id;
        self.next_id = id.saturating_add(1);
        id
    }

    fn replace_vehicles(&mut self, vehicles: Vec<Vehicle>) {
        for vehicle in &vehicles {
            self.observe_id(vehicle.id);
        }
        self.vehicles = vehicles;
    }

    fn sort_event(&self) -> StoreEvent {
        StoreEvent::SortChanged {
            field: self.sort_field,
            order: self.sort_order,
        }
    }
}

/// Observable vehicle store
pub struct VehicleStore {
    state: RwLock<VehiclesState>,
    source: Arc<dyn VehicleSource>,
    subscribers: Arc<SubscriberRegistry>,
    surface_fetch_errors: bool,
}

impl VehicleStore {
    /// Create an empty store fetching from `source`
    pub fn new(source: Arc<dyn VehicleSource>, options: StoreOptions) -> Self {
        Self {
            state: RwLock::new(VehiclesState::new(&options)),
            source,
            subscribers: SubscriberRegistry::new(),
            surface_fetch_errors: options.surface_fetch_errors,
        }
    }

    // ==================== Getters ====================

    /// Collection in insertion order
    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.read().vehicles.clone()
    }

    /// First vehicle with the given id
    pub fn vehicle(&self, id: VehicleId) -> Option<Vehicle> {
        self.read().vehicles.iter().find(|v| v.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().vehicles.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.read().is_loading
    }

    /// Current error message, empty when there is none
    pub fn error(&self) -> String {
        self.read().error.clone()
    }

    pub fn has_error(&self) -> bool {
        !self.read().error.is_empty()
    }

    pub fn sort_field(&self) -> Option<SortField> {
        self.read().sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.read().sort_order
    }

    /// Copy of the collection ordered by the current sort parameters.
    ///
    /// Never reorders the underlying collection.
    pub fn sorted_vehicles(&self) -> Vec<Vehicle> {
        let state = self.read();
        sort_vehicles(&state.vehicles, state.sort_field, state.sort_order)
    }

    /// Consistent copy of every field
    pub fn snapshot(&self) -> VehiclesSnapshot {
        let state = self.read();
        VehiclesSnapshot {
            vehicles: state.vehicles.clone(),
            is_loading: state.is_loading,
            error: state.error.clone(),
            sort_field: state.sort_field,
            sort_order: state.sort_order,
        }
    }

    /// Receive a [`StoreEvent`] for every subsequent change
    pub fn subscribe(&self) -> Subscription {
        self.subscribers.subscribe()
    }

    // ==================== Collection Mutators ====================

    /// Append a vehicle as-is; the id is not checked for uniqueness
    pub fn add_vehicle(&self, vehicle: Vehicle) {
        let mut state = self.write();
        state.observe_id(vehicle.id);
        state.vehicles.push(vehicle);
        self.publish(StoreEvent::VehiclesChanged {
            len: state.vehicles.len(),
        });
    }

    /// Append a vehicle built from form data under a freshly allocated id
    pub fn create_vehicle(&self, draft: VehicleDraft) -> Vehicle {
        let mut state = self.write();
        let id = state.allocate_id();
        let vehicle = Vehicle::from_draft(id, draft);
        state.vehicles.push(vehicle.clone());
        tracing::info!("Created vehicle {} ({})", vehicle.id, vehicle.display_name());
        self.publish(StoreEvent::VehiclesChanged {
            len: state.vehicles.len(),
        });
        vehicle
    }

    /// Reserve an id no current or past record uses
    pub fn next_id(&self) -> VehicleId {
        self.write().allocate_id()
    }

    /// Replace the first record with the same id, keeping its position.
    ///
    /// Returns `false` and changes nothing when no record matches.
    pub fn update_vehicle(&self, vehicle: Vehicle) -> bool {
        let mut state = self.write();
        let Some(slot) = state.vehicles.iter_mut().find(|v| v.id == vehicle.id) else {
            tracing::debug!("Update ignored: no vehicle with id {}", vehicle.id);
            return false;
        };
        *slot = vehicle;
        self.publish(StoreEvent::VehiclesChanged {
            len: state.vehicles.len(),
        });
        true
    }

    /// Remove every record with the given id; returns how many were removed
    pub fn delete_vehicle(&self, id: VehicleId) -> usize {
        let mut state = self.write();
        let before = state.vehicles.len();
        state.vehicles.retain(|v| v.id != id);
        let removed = before - state.vehicles.len();
        if removed > 0 {
            tracing::info!("Deleted vehicle {}", id);
            self.publish(StoreEvent::VehiclesChanged {
                len: state.vehicles.len(),
            });
        }
        removed
    }

    /// Replace the whole collection
    pub fn set_vehicles(&self, vehicles: Vec<Vehicle>) {
        let mut state = self.write();
        state.replace_vehicles(vehicles);
        self.publish(StoreEvent::VehiclesChanged {
            len: state.vehicles.len(),
        });
    }

    // ==================== Status Setters ====================

    pub fn set_sort_field(&self, field: Option<SortField>) {
        let mut state = self.write();
        if state.sort_field == field {
            return;
        }
        state.sort_field = field;
        self.publish(state.sort_event());
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        let mut state = self.write();
        if state.sort_order == order {
            return;
        }
        state.sort_order = order;
        self.publish(state.sort_event());
    }

    /// Set the error message; an empty string clears it
    pub fn set_error(&self, message: impl Into<String>) {
        let mut state = self.write();
        self.change_error(&mut state, message.into());
    }

    pub fn clear_error(&self) {
        self.set_error(String::new());
    }

    pub fn set_is_loading(&self, is_loading: bool) {
        let mut state = self.write();
        if state.is_loading == is_loading {
            return;
        }
        state.is_loading = is_loading;
        self.publish(StoreEvent::LoadingChanged(is_loading));
    }

    // ==================== Remote Fetch ====================

    /// Load the collection from the remote source.
    ///
    /// Failures are logged and returned; the collection is left untouched and
    /// the error message is only set when the store was built with
    /// `surface_fetch_errors`. A later successful fetch clears that message
    /// unless something else has replaced it. A response is applied only if
    /// no newer fetch was issued in the meantime. The loading flag is cleared
    /// when the most recent fetch completes or is dropped.
    pub async fn fetch_vehicles(&self) -> Result<FetchOutcome> {
        let ticket = self.begin_request();
        let _loading = LoadingGuard {
            store: self,
            ticket,
        };

        match self.source.fetch_vehicles().await {
            Ok(vehicles) => {
                let count = vehicles.len();
                if self.apply_response(ticket, vehicles) {
                    tracing::info!("Loaded {} vehicles", count);
                    Ok(FetchOutcome::Applied { count })
                } else {
                    tracing::debug!("Discarding stale response for fetch #{}", ticket);
                    Ok(FetchOutcome::Superseded)
                }
            }
            Err(err) => {
                tracing::error!("Failed to fetch vehicles: {}", err);
                if self.surface_fetch_errors {
                    self.surface_failure(ticket, err.to_string());
                }
                Err(err)
            }
        }
    }

    /// Start a fetch in the background without waiting for it
    pub fn refresh(self: &Arc<Self>) {
        let store = Arc::clone(self);
        spawn_named_in_tokio("vehicles-refresh", async move {
            // Failures are already logged by fetch_vehicles
            let _ = store.fetch_vehicles().await;
        });
    }

    // ==================== Internals ====================

    fn begin_request(&self) -> u64 {
        let mut state = self.write();
        state.latest_request += 1;
        let ticket = state.latest_request;
        tracing::debug!("Fetch #{} started", ticket);
        if !state.is_loading {
            state.is_loading = true;
            self.publish(StoreEvent::LoadingChanged(true));
        }
        ticket
    }

    fn apply_response(&self, ticket: u64, vehicles: Vec<Vehicle>) -> bool {
        let mut state = self.write();
        if state.latest_request != ticket {
            return false;
        }
        state.replace_vehicles(vehicles);
        self.publish(StoreEvent::VehiclesChanged {
            len: state.vehicles.len(),
        });
        if let Some(message) = state.fetch_error.take() {
            if state.error == message {
                self.change_error(&mut state, String::new());
            }
        }
        true
    }

    fn surface_failure(&self, ticket: u64, message: String) {
        let mut state = self.write();
        if state.latest_request != ticket {
            return;
        }
        self.change_error(&mut state, message.clone());
        state.fetch_error = Some(message);
    }

    fn finish_request(&self, ticket: u64) {
        let mut state = self.write();
        if state.latest_request != ticket || !state.is_loading {
            return;
        }
        state.is_loading = false;
        tracing::debug!("Fetch #{} finished", ticket);
        self.publish(StoreEvent::LoadingChanged(false));
    }

    fn change_error(&self, state: &mut VehiclesState, message: String) {
        state.fetch_error = None;
        if state.error == message {
            return;
        }
        state.error = message.clone();
        self.publish(StoreEvent::ErrorChanged(message));
    }

    fn publish(&self, event: StoreEvent) {
        self.subscribers.publish(event);
    }

    fn read(&self) -> RwLockReadGuard<'_, VehiclesState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VehiclesState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for VehicleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("VehicleStore")
            .field("vehicles", &state.vehicles.len())
            .field("is_loading", &state.is_loading)
            .field("error", &state.error)
            .field("sort_field", &state.sort_field)
            .field("sort_order", &state.sort_order)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Clears the loading flag when a fetch ends, including when its future is dropped
struct LoadingGuard<'a> {
    store: &'a VehicleStore,
    ticket: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.finish_request(self.ticket);
    }
}
