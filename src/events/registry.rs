//! Observer registry.
//!
//! Observers register once and stay registered for the engine's lifetime.
//! They are called synchronously, in registration order, after each
//! accepted mutation.

use std::sync::mpsc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::engine::EngineState;

use super::event::BoardEvent;

/// Unique identifier for a registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create a new observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Callback invoked with the event and the state after the change.
///
/// The state is borrowed immutably, so an observer cannot drive the engine
/// from inside its handler.
pub type Observer = Box<dyn FnMut(&BoardEvent, &EngineState)>;

/// Ordered list of observers owned by the engine.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Observer)>,
    next_id: u32,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&BoardEvent, &EngineState) + 'static,
    ) -> ObserverId {
        let id = ObserverId::new(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Register a channel that receives a copy of every event.
    ///
    /// Events sent after the receiver is dropped are discarded.
    pub fn subscribe_channel(&mut self) -> (ObserverId, mpsc::Receiver<BoardEvent>) {
        let (tx, rx) = mpsc::channel();
        let id = self.subscribe(move |event, _| {
            if tx.send(*event).is_err() {
                trace!("event receiver dropped, discarding {:?}", event);
            }
        });
        (id, rx)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Call every observer with `event`.
    pub fn notify(&mut self, event: &BoardEvent, state: &EngineState) {
        for (id, observer) in &mut self.observers {
            trace!("notifying {} of {:?}", id, event);
            observer(event, state);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
