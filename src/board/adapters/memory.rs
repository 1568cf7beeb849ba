//! In-memory observer that records every notification.

use std::sync::{Arc, RwLock};

use crate::board::ports::{BoardEvent, BoardObserver};

/// Thread-safe recording observer.
///
/// Clones share the same event log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardObserver {
    events: Arc<RwLock<Vec<BoardEvent>>>,
}

impl InMemoryBoardObserver {
    /// Creates an observer with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events in arrival order.
    ///
    /// A poisoned lock yields the events recorded before the panic.
    #[must_use]
    pub fn events(&self) -> Vec<BoardEvent> {
        match self.events.read() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Removes and returns the recorded events.
    pub fn drain(&self) -> Vec<BoardEvent> {
        match self.events.write() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl BoardObserver for InMemoryBoardObserver {
    fn notify(&self, event: &BoardEvent) {
        match self.events.write() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
