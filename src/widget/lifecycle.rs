//! Widget lifecycle: liveness and mount/destroy tracking.
//!
//! [`Liveness`] is the single place a widget's "has my element been torn down"
//! state lives. Every deferred callback that touches widget state runs through
//! [`Liveness::guard`], so a destroyed widget is never mutated again.
//!
//! [`LifecycleTracker`] records which nodes are mounted and accumulates
//! lifecycle events for the host to drain.

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::dom::node::NodeId;

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

/// Shared, monotonic destroyed flag. Cloning shares the same flag.
#[derive(Debug, Clone, Default)]
pub struct Liveness {
    destroyed: Rc<Cell<bool>>,
}

impl Liveness {
    /// A fresh, live flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the widget is still live.
    pub fn is_live(&self) -> bool {
        !self.destroyed.get()
    }

    /// Whether the widget has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    /// Mark the widget destroyed. Irreversible.
    pub fn destroy(&self) {
        self.destroyed.set(true);
    }

    /// Run `f` only if the widget is still live.
    pub fn guard<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_destroyed() {
            tracing::debug!("widget destroyed, skipping deferred work");
            return None;
        }
        Some(f())
    }
}

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// Events that occur during a widget's life in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A widget was mounted.
    Mount { node_id: NodeId },
    /// A widget was torn down.
    Destroy { node_id: NodeId },
}

// ---------------------------------------------------------------------------
// LifecycleTracker
// ---------------------------------------------------------------------------

/// Tracks which nodes are currently mounted and accumulates lifecycle events.
#[derive(Debug, Default)]
pub struct LifecycleTracker {
    mounted: HashSet<NodeId>,
    pending: Vec<LifecycleEvent>,
}

impl LifecycleTracker {
    /// Create a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a node has been mounted. No duplicate events.
    pub fn on_mount(&mut self, id: NodeId) {
        if self.mounted.insert(id) {
            self.pending.push(LifecycleEvent::Mount { node_id: id });
        }
    }

    /// Record that a node has been destroyed. No-op if it was not mounted.
    pub fn on_destroy(&mut self, id: NodeId) {
        if self.mounted.remove(&id) {
            self.pending.push(LifecycleEvent::Destroy { node_id: id });
        }
    }

    /// Check whether a node is currently mounted.
    pub fn is_mounted(&self, id: NodeId) -> bool {
        self.mounted.contains(&id)
    }

    /// The number of currently mounted nodes.
    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    /// Drain and return all pending lifecycle events.
    pub fn pending_events(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Whether there are any pending events.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn make_id(sm: &mut SlotMap<NodeId, ()>) -> NodeId {
        sm.insert(())
    }

    // ── Liveness ─────────────────────────────────────────────────────

    #[test]
    fn liveness_starts_live() {
        let live = Liveness::new();
        assert!(live.is_live());
        assert!(!live.is_destroyed());
    }

    #[test]
    fn destroy_is_shared_and_monotonic() {
        let live = Liveness::new();
        let held_by_callback = live.clone();
        live.destroy();
        live.destroy();
        assert!(held_by_callback.is_destroyed());
    }

    #[test]
    fn guard_runs_only_when_live() {
        let live = Liveness::new();
        assert_eq!(live.guard(|| 7), Some(7));
        live.destroy();
        let mut touched = false;
        assert_eq!(live.guard(|| touched = true), None);
        assert!(!touched);
    }

    // ── LifecycleTracker ─────────────────────────────────────────────

    #[test]
    fn mount_then_destroy_events() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::new();

        tracker.on_mount(id);
        tracker.on_mount(id);
        assert!(tracker.is_mounted(id));
        tracker.on_destroy(id);
        assert!(!tracker.is_mounted(id));

        let events = tracker.pending_events();
        assert_eq!(
            events,
            vec![
                LifecycleEvent::Mount { node_id: id },
                LifecycleEvent::Destroy { node_id: id }
            ]
        );
        assert!(!tracker.has_pending());
    }

    #[test]
    fn destroy_unmounted_is_noop() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::new();
        tracker.on_destroy(id);
        assert!(!tracker.has_pending());
        assert_eq!(tracker.mounted_count(), 0);
    }
}
