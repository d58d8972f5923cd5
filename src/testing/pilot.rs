//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) whose analytics sink records
//! every tag, and provides methods to simulate user input, move the virtual
//! clock, and render mounted widgets to markup.

use std::time::Duration;

use crate::app::{App, AppConfig};
use crate::dom::element::Element;
use crate::dom::node::NodeId;
use crate::error::AppError;
use crate::event::interaction::Interaction;
use crate::tagging::event::TagEvent;
use crate::tagging::sink::RecordingSink;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```ignore
/// use rad_widgets::testing::Pilot;
/// use rad_widgets::widgets::Alert;
///
/// let mut pilot = Pilot::new();
/// let alert = pilot.mount(Alert::new());
/// pilot.click_part(alert, "close")?;
/// pilot.advance_ms(300);
/// assert!(!pilot.render(alert)?.visible);
/// ```
pub struct Pilot {
    app: App,
    sink: RecordingSink,
}

impl Pilot {
    /// A pilot over an app with the default config.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// A pilot over an app with the given config.
    pub fn with_config(config: AppConfig) -> Self {
        let sink = RecordingSink::new();
        Self {
            app: App::with_sink(config, sink.clone()),
            sink,
        }
    }

    // ── Mounting ─────────────────────────────────────────────────────

    pub fn mount(&mut self, widget: impl Widget + 'static) -> NodeId {
        self.app.mount(widget)
    }

    /// Tear a widget down, as the framework does when its element goes away.
    pub fn unmount(&mut self, id: NodeId) -> Result<(), AppError> {
        self.app.unmount(id)
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Send an arbitrary interaction.
    pub fn send(&mut self, id: NodeId, interaction: Interaction) -> Result<(), AppError> {
        self.app.dispatch(id, &interaction)
    }

    /// Simulate a full click: press, then click.
    pub fn click(&mut self, id: NodeId) -> Result<(), AppError> {
        self.send(id, Interaction::mouse_down())?;
        self.send(id, Interaction::click())
    }

    /// Simulate a full click on a named part of the widget.
    pub fn click_part(&mut self, id: NodeId, part: &str) -> Result<(), AppError> {
        self.send(id, Interaction::mouse_down().on_part(part))?;
        self.send(id, Interaction::click().on_part(part))
    }

    pub fn mouse_down(&mut self, id: NodeId) -> Result<(), AppError> {
        self.send(id, Interaction::mouse_down())
    }

    pub fn hover(&mut self, id: NodeId) -> Result<(), AppError> {
        self.send(id, Interaction::mouse_enter())
    }

    pub fn blur(&mut self, id: NodeId) -> Result<(), AppError> {
        self.send(id, Interaction::blur())
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Move the virtual clock forward. Returns the number of callbacks fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.app.advance(elapsed)
    }

    pub fn advance_ms(&mut self, millis: u64) -> usize {
        self.advance(Duration::from_millis(millis))
    }

    /// Run every pending callback.
    pub fn run_until_idle(&mut self) -> usize {
        self.app.run_until_idle()
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Every tag emitted so far, oldest first.
    pub fn tags(&self) -> Vec<TagEvent> {
        self.sink.events()
    }

    pub fn clear_tags(&self) {
        self.sink.clear();
    }

    pub fn render(&self, id: NodeId) -> Result<Element, AppError> {
        self.app.render(id)
    }

    /// Render a mounted widget to markup.
    pub fn render_to_text(&self, id: NodeId) -> Result<String, AppError> {
        Ok(super::snapshot::element_to_string(&self.render(id)?))
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::prop::reset_runtime;
    use crate::tagging::event::TagParams;
    use crate::widgets::{Alert, Button, Card};

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_pilot_is_empty() {
        let pilot = Pilot::new();
        assert!(pilot.app().is_empty());
        assert!(pilot.tags().is_empty());
        assert!(pilot.app().config().analytics_enabled);
    }

    #[test]
    fn with_config_preserves_settings() {
        let config = AppConfig::new().with_analytics(false);
        let pilot = Pilot::with_config(config.clone());
        assert_eq!(pilot.app().config(), &config);
    }

    // ── Input ────────────────────────────────────────────────────────

    #[test]
    fn click_records_tag() {
        reset_runtime();
        let mut pilot = Pilot::new();
        let id = pilot.mount(Button::new().tag(TagParams::new("cta").action("buy")));
        pilot.click(id).unwrap();
        let tags = pilot.tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].action, "buy");
        pilot.clear_tags();
        assert!(pilot.tags().is_empty());
    }

    #[test]
    fn hover_and_blur() {
        reset_runtime();
        let mut pilot = Pilot::new();
        let id = pilot.mount(Button::new().tag(TagParams::new("cta")).tag_hover(true));
        pilot.hover(id).unwrap();
        assert_eq!(pilot.tags().len(), 1);

        pilot.mouse_down(id).unwrap();
        assert!(pilot.app().get::<Button>(id).unwrap().is_focus_ring_hidden());
        pilot.blur(id).unwrap();
        assert!(!pilot.app().get::<Button>(id).unwrap().is_focus_ring_hidden());
    }

    #[test]
    fn click_part_dismisses_alert() {
        reset_runtime();
        let mut pilot = Pilot::new();
        let id = pilot.mount(Alert::new());
        pilot.click_part(id, "close").unwrap();
        assert_eq!(pilot.advance_ms(300), 1);
        assert!(!pilot.render(id).unwrap().visible);
        assert!(pilot.render_to_text(id).unwrap().contains(" hidden>"));
    }

    #[test]
    fn unmounted_widget_errors() {
        reset_runtime();
        let mut pilot = Pilot::new();
        let id = pilot.mount(Card::new());
        pilot.unmount(id).unwrap();
        assert_eq!(pilot.click(id), Err(AppError::UnknownNode(id)));
        assert_eq!(pilot.run_until_idle(), 0);
    }
}
