//! Card widget: a branded container with named slots.
//!
//! A card exposes four slots, `block`, `header`, `footer` and `title`. Each
//! slot is backed by a component (the pure element unless overridden through
//! `<slot>_component`) that inherits the `card-<slot>` class and, when the card
//! has a test id, the `<test_id>-<slot>` test id. The title renders as `h4`.
//!
//! Slot descriptors are composed on first use and reused until a builder or a
//! new instance test id changes what they would contain.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::compose::registry::ComponentRegistry;
use crate::compose::slots::{compose, ComponentRef, SlotDescriptor, SlotProps, SlotSpec, Slots};
use crate::dom::element::Element;
use crate::error::ComposeError;
use crate::reactive::Derived;
use crate::style::binder::bind_brand_class;
use crate::widget::instance::WidgetInstance;
use crate::widget::traits::Widget;

/// Prefix of the derived brand class and of every slot class.
pub const CARD_PREFIX: &str = "card";

/// The card's slots, in render order.
pub fn card_slots() -> Vec<SlotSpec> {
    vec![
        SlotSpec::new("header"),
        SlotSpec::new("title").tag_name("h4"),
        SlotSpec::new("block"),
        SlotSpec::new("footer"),
    ]
}

/// A card with block, header, footer and title slots.
///
/// # Examples
///
/// ```ignore
/// let card = Card::new().brand("primary").test_id("promo");
/// let title = card.slot_element("title", vec![Element::new("span").with_text("Deals")])?;
/// let card = card.with_slot("block", vec![title]);
/// ```
pub struct Card {
    instance: WidgetInstance,
    brand_class: Derived<Option<String>>,
    specs: Vec<SlotSpec>,
    props: SlotProps,
    slots: RefCell<Option<Composed>>,
    registry: ComponentRegistry,
    content: Vec<(String, Vec<Element>)>,
}

impl Card {
    pub fn new() -> Self {
        let instance = WidgetInstance::new();
        let brand_class =
            instance.own_derived(bind_brand_class(CARD_PREFIX, instance.brand_prop(), None));
        Self {
            instance,
            brand_class,
            specs: card_slots(),
            props: SlotProps::new(),
            slots: RefCell::new(None),
            registry: ComponentRegistry::with_defaults(),
            content: Vec::new(),
        }
    }

    // ── Builders ─────────────────────────────────────────────────────

    pub fn brand(self, brand: impl Into<String>) -> Self {
        self.instance.set_brand(brand);
        self
    }

    /// Set the test id slots derive theirs from (builder).
    pub fn test_id(self, test_id: impl Into<String>) -> Self {
        self.instance.set_test_id(Some(test_id.into()));
        self
    }

    /// Override the component of any slot (builder).
    pub fn slot_component(mut self, slot: &str, component: impl Into<ComponentRef>) -> Self {
        self.props.set_component(slot, component);
        self.slots.get_mut().take();
        self
    }

    pub fn block_component(self, component: impl Into<ComponentRef>) -> Self {
        self.slot_component("block", component)
    }

    pub fn header_component(self, component: impl Into<ComponentRef>) -> Self {
        self.slot_component("header", component)
    }

    pub fn footer_component(self, component: impl Into<ComponentRef>) -> Self {
        self.slot_component("footer", component)
    }

    pub fn title_component(self, component: impl Into<ComponentRef>) -> Self {
        self.slot_component("title", component)
    }

    /// Use `registry` to build slot components (builder).
    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Fill a slot with content (builder). Slots render in the order they are filled.
    pub fn with_slot(mut self, slot: impl Into<String>, children: Vec<Element>) -> Self {
        self.content.push((slot.into(), children));
        self
    }

    // ── Slots ────────────────────────────────────────────────────────

    /// The composed slot descriptors, for the instance's current test id.
    pub fn slots(&self) -> Rc<Slots> {
        let test_id = self.instance.test_id();
        let mut cache = self.slots.borrow_mut();
        if let Some(composed) = cache.as_ref().filter(|c| c.test_id == test_id) {
            return Rc::clone(&composed.slots);
        }
        let mut props = self.props.clone();
        props.set_test_id(test_id.clone());
        let slots = Rc::new(compose(CARD_PREFIX, &self.specs, &props));
        *cache = Some(Composed {
            test_id,
            slots: Rc::clone(&slots),
        });
        slots
    }

    pub fn slot(&self, name: &str) -> Option<SlotDescriptor> {
        self.slots().get(name).cloned()
    }

    /// Instantiate the component backing `name`.
    pub fn build_slot(&self, name: &str) -> Result<Box<dyn Widget>, ComposeError> {
        let descriptor = self
            .slot(name)
            .ok_or_else(|| ComposeError::UnknownSlot(name.to_owned()))?;
        self.registry.instantiate(&descriptor)
    }

    /// Render slot `name` wrapped around `children`.
    pub fn slot_element(&self, name: &str, children: Vec<Element>) -> Result<Element, ComposeError> {
        let mut el = self.build_slot(name)?.render();
        el.children.extend(children);
        Ok(el)
    }

    pub fn brand_class(&self) -> Option<String> {
        self.brand_class.get()
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }
}

/// Slots composed for one test id.
struct Composed {
    test_id: Option<String>,
    slots: Rc<Slots>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Card {
    fn widget_type(&self) -> &str {
        "rad-card"
    }

    fn instance(&self) -> &WidgetInstance {
        &self.instance
    }

    fn render(&self) -> Element {
        let mut el = Element::new("div")
            .with_classes(["card", "rad-card"])
            .with_classes(self.brand_class.get())
            .with_optional_attr("data-test", self.instance.test_id())
            .visible(self.instance.is_visible());
        for (slot, children) in &self.content {
            match self.slot_element(slot, children.clone()) {
                Ok(child) => el.children.push(child),
                Err(err) => tracing::warn!(%err, "card slot skipped"),
            }
        }
        el
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
