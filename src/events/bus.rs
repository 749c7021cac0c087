//! Observer registry.
//!
//! The bus stores subscribers and hands each published event to all of them in
//! attach order. It knows nothing about how events are produced.

use serde::{Deserialize, Serialize};

use super::event::BoardEvent;

/// Receives board events.
///
/// Closures taking `&BoardEvent` implement this trait.
pub trait BoardObserver {
    /// Called once per event, in the order the changes happened.
    fn on_event(&mut self, event: &BoardEvent);
}

impl<F> BoardObserver for F
where
    F: FnMut(&BoardEvent),
{
    fn on_event(&mut self, event: &BoardEvent) {
        self(event);
    }
}

/// Handle returned by [`EventBus::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Subscriber list for board events.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<(ObserverId, Box<dyn BoardObserver>)>,
    next_id: u32,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an observer.
    pub fn attach(&mut self, observer: impl BoardObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unsubscribe an observer.
    ///
    /// Returns true if the observer was attached.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Hand `event` to every observer.
    pub fn emit(&mut self, event: &BoardEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }

    /// Number of attached observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<ObserverId> = self.observers.iter().map(|(id, _)| *id).collect();
        f.debug_struct("EventBus")
            .field("observers", &ids)
            .field("next_id", &self.next_id)
            .finish()
    }
}
