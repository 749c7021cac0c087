//! Change notification.
//!
//! The board records a [`BoardEvent`] for every observable change. After each
//! controller operation the buffered events are published on an [`EventBus`],
//! where front ends subscribe through the [`BoardObserver`] trait.

pub mod bus;
pub mod event;

pub use bus::{BoardObserver, EventBus, ObserverId};
pub use event::BoardEvent;
