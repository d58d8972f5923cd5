//! Widget trait: configure, render, handle, teardown.
//!
//! The `Widget` trait is the core abstraction for every widget in rad-widgets.
//! A widget owns a [`WidgetInstance`] (its props and liveness), renders itself
//! into an [`Element`] description, and reacts to [`Interaction`]s through a
//! [`Context`] that gives it access to the scheduler and the analytics sink.

use std::any::Any;
use std::rc::Rc;

use crate::app::AppConfig;
use crate::dom::element::Element;
use crate::dom::node::NodeId;
use crate::event::interaction::Interaction;
use crate::event::timer::Scheduler;
use crate::tagging::event::TagEvent;
use crate::tagging::sink::TagSink;
use crate::widget::instance::WidgetInstance;

/// Consumer callback, called with the widget and the interaction that
/// triggered it.
pub type Hook = Rc<dyn Fn(&WidgetInstance, &Interaction)>;

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// What a widget can reach while handling an interaction.
pub struct Context<'a> {
    node: Option<NodeId>,
    scheduler: &'a mut dyn Scheduler,
    tags: &'a mut dyn TagSink,
}

impl<'a> Context<'a> {
    pub fn new(scheduler: &'a mut dyn Scheduler, tags: &'a mut dyn TagSink) -> Self {
        Self {
            node: None,
            scheduler,
            tags,
        }
    }

    /// Attach the node the interaction was dispatched to (builder).
    pub fn with_node(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self
    }

    /// The node being handled, when dispatched through an app.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn scheduler(&mut self) -> &mut dyn Scheduler {
        &mut *self.scheduler
    }

    /// Hand an emitted tag to the analytics sink.
    pub fn fire_tag(&mut self, event: &TagEvent) {
        self.tags.fire_tag(event);
    }
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Object-safe: widgets are stored as `Box<dyn Widget>` by the app.
pub trait Widget {
    /// The component name (e.g. "rad-button").
    fn widget_type(&self) -> &str;

    /// The widget's props and lifecycle flags.
    fn instance(&self) -> &WidgetInstance;

    /// Apply app-wide configuration. Called by the app on mount.
    fn configure(&mut self, _config: &AppConfig) {}

    /// Describe the widget's current element.
    fn render(&self) -> Element;

    /// React to a user interaction. Defaults to ignoring it.
    fn handle(&mut self, _interaction: &Interaction, _cx: &mut Context<'_>) {}

    /// Framework teardown. Marks the widget (and anything it owns) destroyed.
    fn teardown(&mut self) {
        self.instance().destroy();
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
