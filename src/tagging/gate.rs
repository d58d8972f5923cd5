//! Tag gating: when a widget interaction turns into an analytics event.
//!
//! Clicks emit whenever a category is set; hovers emit only when hover tagging
//! is enabled. With `once`, a click that emits clears the category so the
//! widget never emits again. An empty category is a silent "tagging off".

use super::event::{TagEvent, TagParams};

/// Which interaction is asking to tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagTrigger {
    Click,
    Hover,
}

/// Per-widget gating state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGate {
    params: TagParams,
    once: bool,
    hover: bool,
    enabled: bool,
}

impl TagGate {
    /// A gate over `params`, enabled, firing on clicks only.
    pub fn new(params: TagParams) -> Self {
        Self {
            params,
            once: false,
            hover: false,
            enabled: true,
        }
    }

    /// Clear the category after the first click emission (builder).
    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Also emit on hover (builder).
    pub fn hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    /// Turn the analytics capability on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn params(&self) -> &TagParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut TagParams {
        &mut self.params
    }

    /// Decide whether `trigger` emits, updating once-only state.
    pub fn on_interaction(&mut self, trigger: TagTrigger) -> Option<TagEvent> {
        if !self.enabled {
            tracing::debug!(?trigger, "analytics disabled, tag suppressed");
            return None;
        }
        match trigger {
            TagTrigger::Click => {
                let event = TagEvent::from_params(&self.params)?;
                if self.once {
                    self.params.category.clear();
                }
                Some(event)
            }
            TagTrigger::Hover if self.hover => TagEvent::from_params(&self.params),
            TagTrigger::Hover => None,
        }
    }
}

impl Default for TagGate {
    fn default() -> Self {
        Self::new(TagParams::default())
    }
}
