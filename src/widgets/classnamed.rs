//! ClassNamed widget: a neutral element carrying injected classes.
//!
//! This is the pass-through component container widgets place in slots that
//! were not overridden. It renders its tag with the injected class names and
//! test id, plus whatever content the consumer gives it.

use std::any::Any;

use crate::compose::slots::SlotDescriptor;
use crate::dom::element::Element;
use crate::widget::instance::WidgetInstance;
use crate::widget::traits::Widget;

/// A plain element with injected class names and a `data-test` attribute.
///
/// # Examples
///
/// ```ignore
/// let block = ClassNamed::new()
///     .with_class_name("card-block")
///     .with_text("Body copy");
/// ```
pub struct ClassNamed {
    instance: WidgetInstance,
    element_class_names: Vec<String>,
    tag: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl ClassNamed {
    /// A `div` with no classes.
    pub fn new() -> Self {
        Self {
            instance: WidgetInstance::new(),
            element_class_names: Vec::new(),
            tag: "div".to_owned(),
            text: None,
            children: Vec::new(),
        }
    }

    /// The element a slot descriptor describes.
    pub fn from_descriptor(descriptor: &SlotDescriptor) -> Self {
        let mut widget = Self::new().with_class_name(descriptor.class_name.clone());
        if let Some(tag) = &descriptor.tag_name {
            widget.tag = tag.clone();
        }
        widget.instance.set_test_id(descriptor.test_id.clone());
        widget
    }

    /// Add an injected class name (builder). Empty and repeated names are ignored.
    pub fn with_class_name(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.element_class_names.contains(&class) {
            self.element_class_names.push(class);
        }
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_test_id(self, test_id: impl Into<String>) -> Self {
        self.instance.set_test_id(Some(test_id.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn element_class_names(&self) -> &[String] {
        &self.element_class_names
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for ClassNamed {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ClassNamed {
    fn widget_type(&self) -> &str {
        "rad-classnamed"
    }

    fn instance(&self) -> &WidgetInstance {
        &self.instance
    }

    fn render(&self) -> Element {
        let mut el = Element::new(self.tag.clone())
            .with_classes(self.element_class_names.iter().cloned())
            .with_optional_attr("data-test", self.instance.test_id())
            .visible(self.instance.is_visible());
        el.text = self.text.clone();
        el.children = self.children.clone();
        el
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
