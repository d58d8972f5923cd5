//! App struct: configuration, mounted widgets, timers, analytics sink.
//!
//! [`App`] is the host side of the widgets: it owns every mounted widget in a
//! slotmap arena, routes interactions to them, runs their deferred callbacks
//! on a [`TimerQueue`], and forwards emitted tags to a [`TagSink`]. Unmounting a
//! widget is the framework teardown that marks it destroyed.

use std::time::Duration;

use slotmap::SlotMap;

use crate::dismissal::DEFAULT_FADE;
use crate::dom::element::Element;
use crate::dom::node::NodeId;
use crate::error::AppError;
use crate::event::interaction::Interaction;
use crate::event::timer::TimerQueue;
use crate::tagging::sink::{TagSink, TracingSink};
use crate::widget::lifecycle::{LifecycleEvent, LifecycleTracker};
use crate::widget::traits::{Context, Widget};

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration injected into every mounted widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Whether widgets may emit analytics tags at all.
    pub analytics_enabled: bool,
    /// Length of the dismissal fade.
    pub fade_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analytics_enabled: true,
            fade_duration: DEFAULT_FADE,
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable analytics tagging (builder).
    pub fn with_analytics(mut self, enabled: bool) -> Self {
        self.analytics_enabled = enabled;
        self
    }

    /// Set the dismissal fade length (builder).
    pub fn with_fade_duration(mut self, fade: Duration) -> Self {
        self.fade_duration = fade;
        self
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The widget host.
pub struct App {
    widgets: SlotMap<NodeId, Box<dyn Widget>>,
    lifecycle: LifecycleTracker,
    timers: TimerQueue,
    sink: Box<dyn TagSink>,
    config: AppConfig,
}

impl App {
    /// Create an app that logs tags through `tracing`.
    pub fn new(config: AppConfig) -> Self {
        Self::with_sink(config, TracingSink)
    }

    /// Create an app delivering tags to `sink`.
    pub fn with_sink(config: AppConfig, sink: impl TagSink + 'static) -> Self {
        Self {
            widgets: SlotMap::with_key(),
            lifecycle: LifecycleTracker::new(),
            timers: TimerQueue::new(),
            sink: Box::new(sink),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ── Mounting ─────────────────────────────────────────────────────

    /// Configure and mount a widget.
    pub fn mount(&mut self, widget: impl Widget + 'static) -> NodeId {
        self.mount_boxed(Box::new(widget))
    }

    /// Configure and mount an already boxed widget.
    pub fn mount_boxed(&mut self, mut widget: Box<dyn Widget>) -> NodeId {
        widget.configure(&self.config);
        let kind = widget.widget_type().to_owned();
        let id = self.widgets.insert(widget);
        self.lifecycle.on_mount(id);
        tracing::debug!(?id, widget = %kind, "mounted");
        id
    }

    /// Tear a widget down and remove it. Pending callbacks of the widget
    /// still run, but find it destroyed.
    pub fn unmount(&mut self, id: NodeId) -> Result<(), AppError> {
        let mut widget = self.widgets.remove(id).ok_or(AppError::UnknownNode(id))?;
        widget.teardown();
        self.lifecycle.on_destroy(id);
        tracing::debug!(?id, widget = %widget.widget_type(), "unmounted");
        Ok(())
    }

    pub fn is_mounted(&self, id: NodeId) -> bool {
        self.lifecycle.is_mounted(id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Drain lifecycle events recorded since the last call.
    pub fn lifecycle_events(&mut self) -> Vec<LifecycleEvent> {
        self.lifecycle.pending_events()
    }

    // ── Access ───────────────────────────────────────────────────────

    pub fn widget(&self, id: NodeId) -> Result<&dyn Widget, AppError> {
        self.widgets
            .get(id)
            .map(|w| &**w)
            .ok_or(AppError::UnknownNode(id))
    }

    /// Borrow a mounted widget as its concrete type.
    pub fn get<W: Widget + 'static>(&self, id: NodeId) -> Result<&W, AppError> {
        let widget = self.widget(id)?;
        widget.as_any().downcast_ref::<W>().ok_or_else(|| AppError::WrongType {
            id,
            actual: widget.widget_type().to_owned(),
        })
    }

    /// Mutably borrow a mounted widget as its concrete type.
    pub fn get_mut<W: Widget + 'static>(&mut self, id: NodeId) -> Result<&mut W, AppError> {
        let widget = self.widgets.get_mut(id).ok_or(AppError::UnknownNode(id))?;
        let actual = widget.widget_type().to_owned();
        widget
            .as_any_mut()
            .downcast_mut::<W>()
            .ok_or(AppError::WrongType { id, actual })
    }

    pub fn render(&self, id: NodeId) -> Result<Element, AppError> {
        Ok(self.widget(id)?.render())
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// Deliver an interaction to a mounted widget.
    pub fn dispatch(&mut self, id: NodeId, interaction: &Interaction) -> Result<(), AppError> {
        let widget = self.widgets.get_mut(id).ok_or(AppError::UnknownNode(id))?;
        let mut cx = Context::new(&mut self.timers, &mut *self.sink).with_node(id);
        widget.handle(interaction, &mut cx);
        Ok(())
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Move the virtual clock forward, running due callbacks.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.timers.advance(elapsed)
    }

    /// Run every pending callback, however far away.
    pub fn run_until_idle(&mut self) -> usize {
        self.timers.run_until_idle()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Wait in real (tokio) time until every pending callback has run.
    pub async fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(wait) = self.timers.next_deadline() {
            tokio::time::sleep(wait).await;
            fired += self.timers.advance(wait);
        }
        fired
    }
}

// ===========================================================================
// Tests
// ===========================================================================
