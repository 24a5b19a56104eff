//! Change notification.
//!
//! The engine owns an `ObserverRegistry` and publishes a `BoardEvent` after
//! every accepted mutation. Presentation code either registers a callback
//! or takes a channel receiver and drains it on its own schedule.

mod event;
mod registry;

pub use event::BoardEvent;
pub use registry::{Observer, ObserverId, ObserverRegistry};
