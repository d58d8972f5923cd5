//! Alert widget: a branded, dismissible message box.
//!
//! Renders `<div role="alert" class="alert rad-alert alert-<brand>">` with an
//! `alert-content` region and, while dismissible, an `alert-close-wrapper`
//! holding a link-style close [`Button`]. Clicking the close button runs the
//! alert's [`DismissalController`].

use std::any::Any;

use crate::app::AppConfig;
use crate::dismissal::{DismissHooks, DismissOutcome, DismissPhase, DismissalController};
use crate::dom::element::Element;
use crate::event::interaction::{Interaction, InteractionKind};
use crate::event::timer::Scheduler;
use crate::reactive::{watch, Derived};
use crate::style::binder::bind_brand_class;
use crate::widget::instance::WidgetInstance;
use crate::widget::traits::{Context, Widget};
use crate::widgets::button::Button;

/// Prefix of the derived brand class.
pub const ALERT_PREFIX: &str = "alert";

/// Interaction part naming the close button.
pub const CLOSE_PART: &str = "close";

// ---------------------------------------------------------------------------
// Alert
// ---------------------------------------------------------------------------

/// A dismissible alert box.
///
/// # Examples
///
/// ```ignore
/// let alert = Alert::new()
///     .brand("danger")
///     .with_content("Payment failed")
///     .on_deactivated(|_, _| println!("gone"));
/// ```
pub struct Alert {
    instance: WidgetInstance,
    brand_class: Derived<Option<String>>,
    content: Option<String>,
    children: Vec<Element>,
    hooks: DismissHooks,
    controller: DismissalController,
    close: Button,
}

impl Alert {
    /// An unbranded, dismissible alert.
    pub fn new() -> Self {
        let instance = WidgetInstance::new();
        instance.set_dismissible(true);
        let brand_class =
            instance.own_derived(bind_brand_class(ALERT_PREFIX, instance.brand_prop(), None));
        let close = close_button();
        let test_id = instance.test_id_prop();
        let close_instance = close.instance().clone();
        instance.own_watch(watch(move || {
            let close_id = test_id.with(|current| current.as_ref().map(|id| format!("{id}-{CLOSE_PART}")));
            close_instance.set_test_id(close_id);
        }));
        Self {
            instance,
            brand_class,
            content: None,
            children: Vec::new(),
            hooks: DismissHooks::new(),
            controller: DismissalController::new(),
            close,
        }
    }

    pub fn brand(self, brand: impl Into<String>) -> Self {
        self.instance.set_brand(brand);
        self
    }

    pub fn dismissible(self, dismissible: bool) -> Self {
        self.instance.set_dismissible(dismissible);
        self
    }

    /// Set the test id; the close button follows with `<test_id>-close` (builder).
    pub fn test_id(self, test_id: impl Into<String>) -> Self {
        self.instance.set_test_id(Some(test_id.into()));
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Hook run before the fade starts (builder).
    pub fn on_deactivate(
        mut self,
        hook: impl Fn(&WidgetInstance, &Interaction) + 'static,
    ) -> Self {
        self.hooks = self.hooks.on_deactivate(hook);
        self
    }

    /// Hook run once the alert is hidden (builder).
    pub fn on_deactivated(
        mut self,
        hook: impl Fn(&WidgetInstance, &Interaction) + 'static,
    ) -> Self {
        self.hooks = self.hooks.on_deactivated(hook);
        self
    }

    /// Start dismissing the alert.
    pub fn dismiss(&self, interaction: &Interaction, scheduler: &mut dyn Scheduler) -> DismissOutcome {
        self.controller
            .dismiss(&self.instance, &self.hooks, interaction, scheduler)
    }

    pub fn phase(&self) -> DismissPhase {
        self.controller.phase(&self.instance)
    }

    pub fn is_visible(&self) -> bool {
        self.instance.is_visible()
    }

    pub fn brand_class(&self) -> Option<String> {
        self.brand_class.get()
    }

    pub fn close_button(&self) -> &Button {
        &self.close
    }

    pub fn controller(&self) -> &DismissalController {
        &self.controller
    }
}

fn close_button() -> Button {
    Button::new()
        .with_label("×")
        .link(true)
        .aria("label", "close")
        .class_name("close")
}

impl Default for Alert {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Alert {
    fn widget_type(&self) -> &str {
        "rad-alert"
    }

    fn instance(&self) -> &WidgetInstance {
        &self.instance
    }

    fn configure(&mut self, config: &AppConfig) {
        self.controller.set_fade_duration(config.fade_duration);
        self.close.configure(config);
    }

    fn render(&self) -> Element {
        let mut content = Element::new("div").with_class("alert-content");
        content.text = self.content.clone();
        content.children = self.children.clone();

        let mut el = Element::new("div")
            .with_classes(["alert", "rad-alert"])
            .with_classes(self.brand_class.get())
            .with_attr("role", "alert")
            .with_optional_attr("data-test", self.instance.test_id())
            .visible(self.instance.is_visible())
            .with_child(content);
        if self.instance.dismissible() {
            el = el.with_child(
                Element::new("div")
                    .with_class("alert-close-wrapper")
                    .with_child(self.close.render()),
            );
        }
        el
    }

    fn handle(&mut self, interaction: &Interaction, cx: &mut Context<'_>) {
        if !interaction.hits(CLOSE_PART) {
            return;
        }
        if !self.instance.dismissible() {
            tracing::debug!("close interaction on non-dismissible alert ignored");
            return;
        }
        self.close.handle(&Interaction::new(interaction.kind), cx);
        if interaction.kind == InteractionKind::Click {
            self.dismiss(interaction, cx.scheduler());
        }
    }

    fn teardown(&mut self) {
        self.close.teardown();
        self.instance.destroy();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
