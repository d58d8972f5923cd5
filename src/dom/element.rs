//! Element descriptions produced by widgets.
//!
//! An [`Element`] is what a widget hands to the host framework: a tag name, an
//! ordered class list, bound attributes, inline styles, visibility, and child
//! elements. It carries no behavior; the host decides how to materialize it.

use std::collections::BTreeMap;

/// A rendered element description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name (e.g. "div", "button", "h4").
    pub tag: String,
    /// CSS classes, in binding order, without duplicates.
    pub classes: Vec<String>,
    /// Bound attributes (`data-test`, `role`, `aria-*`, ...).
    pub attributes: BTreeMap<String, String>,
    /// Inline style overrides.
    pub style: BTreeMap<String, String>,
    /// Whether the element takes part in layout (`display: none` when false).
    pub visible: bool,
    /// Text content rendered before the children.
    pub text: Option<String>,
    /// Child elements.
    pub children: Vec<Element>,
}

impl Element {
    /// Create a visible element with the given tag and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            visible: true,
            text: None,
            children: Vec::new(),
        }
    }

    /// Add a single CSS class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Add multiple CSS classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            self.add_class(&class.into());
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when `value` is present (builder).
    pub fn with_optional_attr(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_attr(name, value),
            None => self,
        }
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element (builder).
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set visibility (builder).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Check whether this element has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op if already present or empty.
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Depth-first search for the first element carrying `class`, including `self`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_class(class))
    }

    /// Depth-first search for the first element whose `data-test` equals `test_id`.
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&Element> {
        if self.attr("data-test") == Some(test_id) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_test_id(test_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let el = Element::new("div");
        assert_eq!(el.tag, "div");
        assert!(el.classes.is_empty());
        assert!(el.attributes.is_empty());
        assert!(el.visible);
        assert!(el.text.is_none());
    }

    #[test]
    fn classes_deduplicate_and_skip_empty() {
        let el = Element::new("div")
            .with_classes(["alert", "rad-alert", "alert"])
            .with_class("");
        assert_eq!(el.classes, vec!["alert", "rad-alert"]);
    }

    #[test]
    fn add_class_keeps_order() {
        let mut el = Element::new("button").with_class("btn");
        el.add_class("btn-link");
        el.add_class("btn");
        assert_eq!(el.classes, vec!["btn", "btn-link"]);
    }

    #[test]
    fn optional_attr() {
        let el = Element::new("div")
            .with_optional_attr("data-test", Some("card"))
            .with_optional_attr("aria-label", None::<String>);
        assert_eq!(el.attr("data-test"), Some("card"));
        assert_eq!(el.attr("aria-label"), None);
    }

    #[test]
    fn find_nested() {
        let el = Element::new("div").with_child(
            Element::new("div")
                .with_class("alert-close-wrapper")
                .with_child(Element::new("button").with_attr("data-test", "a-close")),
        );
        assert_eq!(el.find_by_class("alert-close-wrapper").map(|e| e.tag.as_str()), Some("div"));
        assert_eq!(el.find_by_test_id("a-close").map(|e| e.tag.as_str()), Some("button"));
        assert!(el.find_by_class("missing").is_none());
    }
}
