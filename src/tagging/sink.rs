//! Analytics sinks: where emitted tags go.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::TagEvent;

/// Receives every tag a widget emits. Delivery is up to the implementation.
pub trait TagSink {
    fn fire_tag(&mut self, event: &TagEvent);
}

/// Logs each tag at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TagSink for TracingSink {
    fn fire_tag(&mut self, event: &TagEvent) {
        tracing::info!(
            category = %event.category,
            action = %event.action,
            label = ?event.label,
            value = %event.value,
            dimensions = ?event.custom_dimensions,
            "tag fired"
        );
    }
}

/// Collects tags in memory. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<TagEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every tag received so far, oldest first.
    pub fn events(&self) -> Vec<TagEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl TagSink for RecordingSink {
    fn fire_tag(&mut self, event: &TagEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::event::TagParams;

    fn event(category: &str) -> TagEvent {
        TagEvent::from_params(&TagParams::new(category)).unwrap()
    }

    #[test]
    fn recording_sink_shares_log() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();
        handle.fire_tag(&event("a"));
        handle.fire_tag(&event("b"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[1].category, "b");
        sink.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn tracing_sink_accepts_events() {
        let mut sink = TracingSink;
        sink.fire_tag(&event("a"));
    }
}
