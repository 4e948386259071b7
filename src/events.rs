//! # Event Bus
//!
//! Cross-component notification for hierarchy views: a picker publishes that
//! its selection changed, a map layer publishes that shapes were edited, and
//! any number of listeners react without being wired to each other.
//!
//! The bus is typed by its event enum and owned by an [`EventContext`] that
//! the application creates with [`EventContext::init`] and disposes of with
//! [`EventContext::teardown`]. There is no global instance.
//!
//! Handlers are called outside the subscriber lock, so a handler may publish,
//! subscribe or unsubscribe without deadlocking. A handler added during a
//! publish does not receive that event.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::resolver::Resolution;

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Identifies a subscription for [`EventBus::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscribers<E> {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<E>)>,
}

/// Typed publish/subscribe channel.
pub struct EventBus<E> {
    subscribers: Mutex<Subscribers<E>>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Subscribers {
                next_id: 0,
                handlers: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Subscribers<E>>> {
        self.subscribers.lock().map_err(|_| Error::LockPoisoned {
            context: "event bus subscribers".to_string(),
        })
    }

    /// Register a handler; it receives every event published from now on.
    pub fn subscribe<F>(&self, handler: F) -> Result<SubscriptionId>
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut subscribers = self.lock()?;
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.handlers.push((id, Arc::new(handler)));
        Ok(id)
    }

    /// Remove a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool> {
        let mut subscribers = self.lock()?;
        let before = subscribers.handlers.len();
        subscribers.handlers.retain(|(sid, _)| *sid != id);
        Ok(subscribers.handlers.len() != before)
    }

    /// Deliver `event` to every current subscriber in subscription order.
    /// Returns the number of handlers called.
    pub fn publish(&self, event: &E) -> Result<usize> {
        let handlers: Vec<Handler<E>> = self
            .lock()?
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in &handlers {
            handler(event);
        }
        Ok(handlers.len())
    }

    pub fn subscriber_count(&self) -> Result<usize> {
        Ok(self.lock()?.handlers.len())
    }

    /// Drop every handler. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let mut subscribers = self.lock()?;
        let removed = subscribers.handlers.len();
        subscribers.handlers.clear();
        Ok(removed)
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Events exchanged between hierarchy views.
#[derive(Debug, Clone, PartialEq)]
pub enum HierarchyEvent {
    /// The chosen ids of a picker changed.
    SelectionChanged { selected: Vec<i64> },
    /// A new source configuration was resolved.
    ConfigResolved(Resolution),
    /// The geometry of an org unit was edited.
    ShapeEdited { org_unit_id: i64 },
    /// An org unit was removed from the tree.
    OrgUnitRemoved { org_unit_id: i64 },
}

/// Owner of the application's event bus.
pub struct EventContext {
    bus: Arc<EventBus<HierarchyEvent>>,
}

impl EventContext {
    pub fn init() -> Self {
        debug!("Event context initialized");
        Self {
            bus: Arc::new(EventBus::new()),
        }
    }

    pub fn bus(&self) -> &EventBus<HierarchyEvent> {
        &self.bus
    }

    /// Shared handle for components that outlive a borrow of the context.
    pub fn shared_bus(&self) -> Arc<EventBus<HierarchyEvent>> {
        Arc::clone(&self.bus)
    }

    /// Remove every subscriber and consume the context. Shared handles obtained
    /// before teardown stay valid but no longer reach any handler.
    pub fn teardown(self) -> Result<usize> {
        let removed = self.bus.clear()?;
        info!("Event context torn down, {} subscriber(s) removed", removed);
        Ok(removed)
    }
}
