//! Button widget: a branded, taggable `<button>`.
//!
//! Classes come from three places, in order: the fixed `rad-button btn`, any
//! extra class names, and the class bindings. The built-in bindings are
//! `brandClass` (the derived `btn[-outline]-<brand>`), `link:btn-link` and
//! `link:btn-unstyled`; consumers may append their own.
//!
//! Pressing the button hides its focus ring until the next blur, and runs the
//! click tag gate. Entering it runs the hover tag gate.

use std::any::Any;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::app::AppConfig;
use crate::dom::element::Element;
use crate::event::interaction::{Interaction, InteractionKind};
use crate::reactive::{create_prop, Derived, Prop};
use crate::style::binder::bind_brand_class;
use crate::style::binding::{resolve_bindings, BindingError, BoundValue, ClassBinding};
use crate::tagging::event::TagParams;
use crate::tagging::gate::{TagGate, TagTrigger};
use crate::widget::instance::WidgetInstance;
use crate::widget::traits::{Context, Hook, Widget};

/// Prefix of the derived brand class.
pub const BUTTON_PREFIX: &str = "btn";

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A `<button type="button">` with brand styling and analytics tagging.
///
/// # Examples
///
/// ```ignore
/// let save = Button::new()
///     .with_label("Save")
///     .brand("primary")
///     .tag(TagParams::new("editor").action("save"))
///     .tag_once(true);
/// ```
pub struct Button {
    instance: WidgetInstance,
    brand_class: Derived<Option<String>>,
    link: Prop<bool>,
    disabled: Prop<bool>,
    label: Option<String>,
    class_names: Vec<String>,
    bindings: Vec<ClassBinding>,
    aria: BTreeMap<String, String>,
    gate: TagGate,
    on_click: Option<Hook>,
    focus_ring_hidden: bool,
    restore_on_blur: bool,
}

impl Button {
    /// An unbranded, enabled button with tagging off.
    pub fn new() -> Self {
        let instance = WidgetInstance::new();
        let brand_class = instance.own_derived(bind_brand_class(
            BUTTON_PREFIX,
            instance.brand_prop(),
            Some(instance.outline_prop()),
        ));
        let link = instance.own_prop(create_prop(false));
        let disabled = instance.own_prop(create_prop(false));
        Self {
            instance,
            brand_class,
            link,
            disabled,
            label: None,
            class_names: Vec::new(),
            bindings: vec![
                ClassBinding::bare("brandClass"),
                ClassBinding::when("link", "btn-link"),
                ClassBinding::when("link", "btn-unstyled"),
            ],
            aria: BTreeMap::new(),
            gate: TagGate::default(),
            on_click: None,
            focus_ring_hidden: false,
            restore_on_blur: false,
        }
    }

    // ── Builders ─────────────────────────────────────────────────────

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn brand(self, brand: impl Into<String>) -> Self {
        self.instance.set_brand(brand);
        self
    }

    pub fn outline(self, outline: bool) -> Self {
        self.instance.set_outline(outline);
        self
    }

    /// Render as an unstyled link-looking button (builder).
    pub fn link(self, link: bool) -> Self {
        self.link.set(link);
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.disabled.set(disabled);
        self
    }

    pub fn test_id(self, test_id: impl Into<String>) -> Self {
        self.instance.set_test_id(Some(test_id.into()));
        self
    }

    /// Set an `aria-<name>` attribute (builder).
    pub fn aria(mut self, name: &str, value: impl Into<String>) -> Self {
        self.aria.insert(format!("aria-{name}"), value.into());
        self
    }

    /// Add a fixed class name (builder).
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.class_names.contains(&class) {
            self.class_names.push(class);
        }
        self
    }

    /// Append a class binding expression such as `disabled:is-disabled`.
    pub fn try_class_binding(mut self, expression: &str) -> Result<Self, BindingError> {
        self.bindings.push(ClassBinding::parse(expression)?);
        Ok(self)
    }

    /// Configure analytics tagging (builder). An empty category leaves tagging off.
    pub fn tag(mut self, params: TagParams) -> Self {
        *self.gate.params_mut() = params;
        self
    }

    /// Tag only the first click (builder).
    pub fn tag_once(mut self, once: bool) -> Self {
        self.gate = self.gate.once(once);
        self
    }

    /// Also tag when the pointer enters (builder).
    pub fn tag_hover(mut self, hover: bool) -> Self {
        self.gate = self.gate.hover(hover);
        self
    }

    /// Call `hook` on every click of an enabled button (builder).
    pub fn on_click(mut self, hook: impl Fn(&WidgetInstance, &Interaction) + 'static) -> Self {
        self.on_click = Some(Rc::new(hook));
        self
    }

    // ── Runtime props ────────────────────────────────────────────────

    pub fn set_link(&self, link: bool) {
        self.link.set(link);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_link(&self) -> bool {
        self.link.get()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// The current derived brand class.
    pub fn brand_class(&self) -> Option<String> {
        self.brand_class.get()
    }

    pub fn gate(&self) -> &TagGate {
        &self.gate
    }

    /// Whether the focus ring is hidden after a press.
    pub fn is_focus_ring_hidden(&self) -> bool {
        self.focus_ring_hidden
    }

    fn bound_value(&self, name: &str) -> BoundValue {
        match name {
            "brandClass" => self.brand_class.get().into(),
            "brand" => BoundValue::Text(self.instance.brand()),
            "outline" => self.instance.outline().into(),
            "link" => self.link.get().into(),
            "disabled" => self.disabled.get().into(),
            "visible" => self.instance.is_visible().into(),
            _ => BoundValue::Absent,
        }
    }

    fn press(&mut self, cx: &mut Context<'_>) {
        self.focus_ring_hidden = true;
        self.restore_on_blur = true;
        if let Some(event) = self.gate.on_interaction(TagTrigger::Click) {
            cx.fire_tag(&event);
        }
    }

    fn blur(&mut self) {
        if !self.restore_on_blur {
            return;
        }
        self.restore_on_blur = false;
        self.instance
            .liveness()
            .guard(|| self.focus_ring_hidden = false);
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Button {
    fn widget_type(&self) -> &str {
        "rad-button"
    }

    fn instance(&self) -> &WidgetInstance {
        &self.instance
    }

    fn configure(&mut self, config: &AppConfig) {
        self.gate.set_enabled(config.analytics_enabled);
    }

    fn render(&self) -> Element {
        let classes = resolve_bindings(&self.bindings, |name| self.bound_value(name));
        let mut el = Element::new("button")
            .with_classes(["rad-button", "btn"])
            .with_classes(self.class_names.iter().cloned())
            .with_classes(classes)
            .with_attr("type", "button")
            .with_optional_attr("data-test", self.instance.test_id())
            .visible(self.instance.is_visible());
        el.attributes.extend(self.aria.clone());
        if self.disabled.get() {
            el.attributes.insert("disabled".to_owned(), String::new());
        }
        if self.focus_ring_hidden {
            el.style.insert("outline".to_owned(), "none".to_owned());
            el.style.insert("box-shadow".to_owned(), "none".to_owned());
        }
        el.text = self.label.clone();
        el
    }

    fn handle(&mut self, interaction: &Interaction, cx: &mut Context<'_>) {
        if self.disabled.get_untracked() && interaction.kind != InteractionKind::Blur {
            tracing::debug!(kind = ?interaction.kind, "disabled button ignored interaction");
            return;
        }
        match interaction.kind {
            InteractionKind::MouseDown => self.press(cx),
            InteractionKind::Click => {
                if let Some(hook) = &self.on_click {
                    hook(&self.instance, interaction);
                }
            }
            InteractionKind::MouseEnter => {
                if let Some(event) = self.gate.on_interaction(TagTrigger::Hover) {
                    cx.fire_tag(&event);
                }
            }
            InteractionKind::Blur => self.blur(),
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::timer::TimerQueue;
    use crate::reactive::prop::reset_runtime;
    use crate::tagging::sink::RecordingSink;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn send(button: &mut Button, interaction: Interaction, sink: &mut RecordingSink) {
        let mut queue = TimerQueue::new();
        let mut cx = Context::new(&mut queue, sink);
        button.handle(&interaction, &mut cx);
    }

    // ── Classes ──────────────────────────────────────────────────────

    #[test]
    fn base_markup() {
        reset_runtime();
        let b = Button::new().with_label("Save");
        assert_eq!(b.widget_type(), "rad-button");
        let el = b.render();
        assert_eq!(el.tag, "button");
        assert_eq!(el.classes, vec!["rad-button", "btn"]);
        assert_eq!(el.attr("type"), Some("button"));
        assert_eq!(el.attr("disabled"), None);
        assert_eq!(el.text.as_deref(), Some("Save"));
    }

    #[test]
    fn brand_and_outline_classes() {
        reset_runtime();
        let b = Button::new().brand("primary");
        assert_eq!(b.render().classes, vec!["rad-button", "btn", "btn-primary"]);

        b.instance().set_outline(true);
        assert_eq!(b.brand_class().as_deref(), Some("btn-outline-primary"));
        assert!(b.render().has_class("btn-outline-primary"));
        assert!(!b.render().has_class("btn-primary"));

        b.instance().set_brand("");
        assert_eq!(b.brand_class(), None);
        assert_eq!(b.render().classes, vec!["rad-button", "btn"]);
    }

    #[test]
    fn link_binds_two_classes() {
        reset_runtime();
        let b = Button::new().link(true);
        let el = b.render();
        assert!(el.has_class("btn-link"));
        assert!(el.has_class("btn-unstyled"));
        b.set_link(false);
        assert!(!b.render().has_class("btn-link"));
    }

    #[test]
    fn extra_classes_and_bindings() {
        reset_runtime();
        let b = Button::new()
            .class_name("close")
            .try_class_binding("disabled:is-disabled:is-enabled")
            .unwrap();
        assert_eq!(b.render().classes, vec!["rad-button", "btn", "close", "is-enabled"]);
        b.set_disabled(true);
        assert!(b.render().has_class("is-disabled"));
    }

    #[test]
    fn bad_binding_rejected() {
        reset_runtime();
        assert!(Button::new().try_class_binding("a:b:c:d").is_err());
    }

    #[test]
    fn attributes() {
        reset_runtime();
        let el = Button::new()
            .aria("label", "close")
            .test_id("dialog-close")
            .disabled(true)
            .render();
        assert_eq!(el.attr("aria-label"), Some("close"));
        assert_eq!(el.attr("data-test"), Some("dialog-close"));
        assert_eq!(el.attr("disabled"), Some(""));
    }

    // ── Focus ring ───────────────────────────────────────────────────

    #[test]
    fn press_hides_ring_until_blur() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let mut b = Button::new();
        send(&mut b, Interaction::mouse_down(), &mut sink);
        let el = b.render();
        assert_eq!(el.style.get("outline").map(String::as_str), Some("none"));
        assert_eq!(el.style.get("box-shadow").map(String::as_str), Some("none"));

        send(&mut b, Interaction::blur(), &mut sink);
        assert!(!b.is_focus_ring_hidden());
        assert!(b.render().style.is_empty());
    }

    #[test]
    fn blur_after_destroy_leaves_ring_hidden() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let mut b = Button::new();
        send(&mut b, Interaction::mouse_down(), &mut sink);
        b.instance().destroy();
        send(&mut b, Interaction::blur(), &mut sink);
        assert!(b.is_focus_ring_hidden());
    }

    // ── Tagging ──────────────────────────────────────────────────────

    #[test]
    fn press_fires_click_tag() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let mut b = Button::new().tag(TagParams::new("nav").action("open").label("menu"));
        send(&mut b, Interaction::mouse_down(), &mut sink);
        send(&mut b, Interaction::mouse_down(), &mut sink);
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].category, "nav");
        assert_eq!(events[0].action, "open");
        assert_eq!(events[0].label.as_deref(), Some("menu"));
    }

    #[test]
    fn untagged_button_is_silent() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let mut b = Button::new();
        send(&mut b, Interaction::mouse_down(), &mut sink);
        send(&mut b, Interaction::mouse_enter(), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn tag_once_fires_once() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let mut b = Button::new().tag(TagParams::new("x")).tag_once(true);
        send(&mut b, Interaction::mouse_down(), &mut sink);
        send(&mut b, Interaction::mouse_down(), &mut sink);
        assert_eq!(sink.len(), 1);
        assert!(!b.gate().params().has_category());
    }

    #[test]
    fn hover_tag_needs_flag() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let mut quiet = Button::new().tag(TagParams::new("x"));
        send(&mut quiet, Interaction::mouse_enter(), &mut sink);
        assert!(sink.is_empty());

        let mut loud = Button::new().tag(TagParams::new("x")).tag_hover(true);
        send(&mut loud, Interaction::mouse_enter(), &mut sink);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn analytics_disabled_by_config() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let mut b = Button::new().tag(TagParams::new("x"));
        b.configure(&AppConfig::new().with_analytics(false));
        send(&mut b, Interaction::mouse_down(), &mut sink);
        assert!(sink.is_empty());
        assert!(b.is_focus_ring_hidden());
    }

    // ── Clicks ───────────────────────────────────────────────────────

    #[test]
    fn on_click_hook_runs() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let clicks = Rc::new(Cell::new(0));
        let seen = Rc::clone(&clicks);
        let mut b = Button::new().on_click(move |_, _| seen.set(seen.get() + 1));
        send(&mut b, Interaction::click(), &mut sink);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn disabled_ignores_input() {
        reset_runtime();
        let mut sink = RecordingSink::new();
        let clicks = Rc::new(Cell::new(0));
        let seen = Rc::clone(&clicks);
        let mut b = Button::new()
            .disabled(true)
            .tag(TagParams::new("x"))
            .on_click(move |_, _| seen.set(seen.get() + 1));
        send(&mut b, Interaction::mouse_down(), &mut sink);
        send(&mut b, Interaction::click(), &mut sink);
        assert_eq!(clicks.get(), 0);
        assert!(sink.is_empty());
        assert!(!b.is_focus_ring_hidden());
    }

    #[test]
    fn as_any_downcast() {
        reset_runtime();
        let b = Button::new().with_label("test");
        let any_ref = b.as_any();
        let downcasted = any_ref.downcast_ref::<Button>().unwrap();
        assert_eq!(downcasted.label(), Some("test"));
    }
}
