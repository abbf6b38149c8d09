//! Subscription - Store Change Listeners
//!
//! Each subscriber owns the receiving end of an unbounded channel. Dropping
//! the [`Subscription`] handle unregisters it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use ahash::AHashMap;
use crossbeam_channel::{Receiver, Sender, TryIter};

use crate::eventing::store_event::StoreEvent;

/// Registry of live subscribers
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    senders: Mutex<AHashMap<u64, Sender<StoreEvent>>>,
    next_id: AtomicU64,
}

impl SubscriberRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a new subscriber
    pub fn subscribe(self: &Arc<Self>) -> Subscription {
        let (tx, rx) = crossbeam_channel::unbounded();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.lock().insert(id, tx);
        tracing::debug!("Store subscriber {} registered", id);

        Subscription {
            id,
            events: rx,
            registry: Arc::downgrade(self),
        }
    }

    /// Deliver an event to every subscriber, forgetting disconnected ones
    pub fn publish(&self, event: StoreEvent) {
        let mut senders = self.lock();
        senders.retain(|id, tx| {
            let alive = tx.send(event.clone()).is_ok();
            if !alive {
                tracing::debug!("Dropping disconnected store subscriber {}", id);
            }
            alive
        });
    }

    /// Number of registered subscribers
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn remove(&self, id: u64) {
        if self.lock().remove(&id).is_some() {
            tracing::debug!("Store subscriber {} unregistered", id);
        }
    }

    fn lock(&self) -> MutexGuard<'_, AHashMap<u64, Sender<StoreEvent>>> {
        self.senders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle returned by `subscribe`; unsubscribes on drop
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    events: Receiver<StoreEvent>,
    registry: Weak<SubscriberRegistry>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Receiver for blocking or `select!`-style consumption
    pub fn receiver(&self) -> &Receiver<StoreEvent> {
        &self.events
    }

    /// Next pending event, if any
    pub fn try_recv(&self) -> Option<StoreEvent> {
        self.events.try_recv().ok()
    }

    /// Iterate over the events queued so far without blocking
    pub fn pending(&self) -> TryIter<'_, StoreEvent> {
        self.events.try_iter()
    }

    /// Stop receiving events
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}
