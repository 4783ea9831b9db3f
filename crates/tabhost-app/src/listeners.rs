//! Ordered selection-listener registry.
//!
//! Membership is managed by explicit add/remove and never deduplicated:
//! registering the same listener twice means it is notified twice, and
//! avoiding that is the caller's responsibility. Publishing iterates a
//! snapshot so a listener that mutates the set mid-notification cannot
//! corrupt the in-progress traversal.

use std::sync::Arc;

use tabhost_core::ids::ListenerId;
use tabhost_core::ports::SelectionListener;

/// Ordered collection of registered selection listeners.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(ListenerId, Arc<dyn SelectionListener>)>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener and hand back the id needed to remove it.
    pub fn add(&mut self, listener: Arc<dyn SelectionListener>) -> ListenerId {
        let id = ListenerId::new();
        self.entries.push((id.clone(), listener));
        id
    }

    /// Remove a previously registered listener. Removing an id that is
    /// absent (never issued, or already removed) is a no-op.
    pub fn remove(&mut self, id: &ListenerId) {
        self.entries.retain(|(entry_id, _)| entry_id != id);
    }

    /// Registration-order snapshot for notification fan-out.
    pub fn snapshot(&self) -> Vec<Arc<dyn SelectionListener>> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
