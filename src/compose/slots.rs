//! Slot composition for container widgets.
//!
//! A container declares its named regions as [`SlotSpec`]s. [`compose`] turns
//! those specs and the container's [`SlotProps`] into one [`SlotDescriptor`]
//! per region: which component to use, which class it inherits, and which test
//! id it carries. Composition is pure; the same props always produce the same
//! descriptors.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Name of the neutral pass-through component used when a slot is not overridden.
pub const PURE_ELEMENT: &str = "pure-element";

// ---------------------------------------------------------------------------
// ComponentRef
// ---------------------------------------------------------------------------

/// A reference to a component by registered name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentRef(Cow<'static, str>);

impl ComponentRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The neutral pass-through component.
    pub const fn pure_element() -> Self {
        Self(Cow::Borrowed(PURE_ELEMENT))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_pure_element(&self) -> bool {
        self.0 == PURE_ELEMENT
    }
}

impl Default for ComponentRef {
    fn default() -> Self {
        Self::pure_element()
    }
}

impl From<&'static str> for ComponentRef {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for ComponentRef {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// SlotSpec
// ---------------------------------------------------------------------------

/// Declaration of one named region of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpec {
    pub name: String,
    pub default_component: ComponentRef,
    /// Appended to the container prefix to form the slot's class.
    pub class_suffix: String,
    /// Appended to the container's test id to form the slot's test id.
    pub test_suffix: String,
    /// Tag the slot element renders as; the component decides when `None`.
    pub tag_name: Option<String>,
}

impl SlotSpec {
    /// A slot whose suffixes both equal its name, backed by the pure element.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            default_component: ComponentRef::pure_element(),
            class_suffix: name.clone(),
            test_suffix: name.clone(),
            tag_name: None,
            name,
        }
    }

    pub fn default_component(mut self, component: impl Into<ComponentRef>) -> Self {
        self.default_component = component.into();
        self
    }

    pub fn class_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.class_suffix = suffix.into();
        self
    }

    pub fn test_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.test_suffix = suffix.into();
        self
    }

    pub fn tag_name(mut self, tag: impl Into<String>) -> Self {
        self.tag_name = Some(tag.into());
        self
    }
}

// ---------------------------------------------------------------------------
// SlotProps
// ---------------------------------------------------------------------------

/// The prop key that overrides a slot's component: `block` -> `blockComponent`.
pub fn component_key(slot: &str) -> String {
    format!("{slot}Component")
}

/// Container props consulted by [`compose`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotProps {
    components: BTreeMap<String, ComponentRef>,
    test_id: Option<String>,
}

impl SlotProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the component of `slot` (builder).
    pub fn with_component(mut self, slot: &str, component: impl Into<ComponentRef>) -> Self {
        self.set_component(slot, component);
        self
    }

    /// Set the container test id (builder).
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn set_component(&mut self, slot: &str, component: impl Into<ComponentRef>) {
        self.components.insert(component_key(slot), component.into());
    }

    pub fn set_test_id(&mut self, test_id: Option<String>) {
        self.test_id = test_id;
    }

    /// The override stored under `<slot>Component`, if any.
    pub fn component(&self, slot: &str) -> Option<&ComponentRef> {
        self.components.get(&component_key(slot))
    }

    /// The test id, when set and non-empty.
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref().filter(|id| !id.is_empty())
    }
}

// ---------------------------------------------------------------------------
// SlotDescriptor / compose
// ---------------------------------------------------------------------------

/// Everything a container hands to the component it places in a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDescriptor {
    pub component: ComponentRef,
    /// Injected class, `<container>-<class_suffix>`.
    pub class_name: String,
    /// Injected test id, `<test_id>-<test_suffix>`.
    pub test_id: Option<String>,
    pub tag_name: Option<String>,
}

/// Slot name to descriptor, in name order.
pub type Slots = BTreeMap<String, SlotDescriptor>;

/// Build the descriptors for every slot of `container`.
pub fn compose(container: &str, specs: &[SlotSpec], props: &SlotProps) -> Slots {
    specs
        .iter()
        .map(|spec| {
            let component = props
                .component(&spec.name)
                .cloned()
                .unwrap_or_else(|| spec.default_component.clone());
            let descriptor = SlotDescriptor {
                component,
                class_name: format!("{container}-{}", spec.class_suffix),
                test_id: props.test_id().map(|id| format!("{id}-{}", spec.test_suffix)),
                tag_name: spec.tag_name.clone(),
            };
            (spec.name.clone(), descriptor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card_specs() -> Vec<SlotSpec> {
        vec![
            SlotSpec::new("block"),
            SlotSpec::new("header"),
            SlotSpec::new("footer"),
            SlotSpec::new("title").tag_name("h4"),
        ]
    }

    #[test]
    fn defaults_without_props() {
        let slots = compose("card", &card_specs(), &SlotProps::new());
        assert_eq!(slots.len(), 4);
        let block = &slots["block"];
        assert!(block.component.is_pure_element());
        assert_eq!(block.class_name, "card-block");
        assert_eq!(block.test_id, None);
        assert_eq!(slots["title"].tag_name.as_deref(), Some("h4"));
    }

    #[test]
    fn test_id_propagates() {
        let props = SlotProps::new().with_test_id("promo");
        let slots = compose("card", &card_specs(), &props);
        assert_eq!(slots["header"].test_id.as_deref(), Some("promo-header"));
        assert_eq!(slots["footer"].test_id.as_deref(), Some("promo-footer"));
    }

    #[test]
    fn empty_test_id_is_absent() {
        let props = SlotProps::new().with_test_id("");
        let slots = compose("card", &card_specs(), &props);
        assert!(slots.values().all(|slot| slot.test_id.is_none()));
    }

    #[test]
    fn component_override_by_key() {
        let props = SlotProps::new().with_component("header", "fancy-header");
        assert_eq!(component_key("header"), "headerComponent");
        let slots = compose("card", &card_specs(), &props);
        assert_eq!(slots["header"].component.name(), "fancy-header");
        assert!(slots["block"].component.is_pure_element());
    }

    #[test]
    fn suffixes_are_independent() {
        let specs = [SlotSpec::new("body").class_suffix("block").test_suffix("content")];
        let props = SlotProps::new().with_test_id("t");
        let slots = compose("panel", &specs, &props);
        assert_eq!(slots["body"].class_name, "panel-block");
        assert_eq!(slots["body"].test_id.as_deref(), Some("t-content"));
    }

    #[test]
    fn default_component_used_when_not_overridden() {
        let specs = [SlotSpec::new("title").default_component("heading")];
        let slots = compose("card", &specs, &SlotProps::new());
        assert_eq!(slots["title"].component, ComponentRef::from("heading"));
    }

    #[test]
    fn deterministic() {
        let props = SlotProps::new()
            .with_test_id("card-1")
            .with_component("footer", String::from("rich-footer"));
        let first = compose("card", &card_specs(), &props);
        let second = compose("card", &card_specs(), &props);
        assert_eq!(first, second);
    }
}
