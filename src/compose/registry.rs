//! Component registry: slot descriptors to widgets.

use std::collections::HashMap;
use std::fmt;

use crate::compose::slots::{SlotDescriptor, PURE_ELEMENT};
use crate::error::ComposeError;
use crate::widget::traits::Widget;
use crate::widgets::classnamed::ClassNamed;

/// Builds a widget for a slot.
pub type Factory = Box<dyn Fn(&SlotDescriptor) -> Box<dyn Widget>>;

/// Registry of slot component factories, keyed by component name.
pub struct ComponentRegistry {
    factories: HashMap<String, Factory>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry holding the `pure-element` component.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PURE_ELEMENT, |descriptor| {
            Box::new(ClassNamed::from_descriptor(descriptor))
        });
        registry
    }

    /// Register a component. An existing entry with the same name is replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&SlotDescriptor) -> Box<dyn Widget> + 'static,
    ) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Remove a component. Returns whether it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.factories.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build the widget a descriptor refers to.
    pub fn instantiate(&self, descriptor: &SlotDescriptor) -> Result<Box<dyn Widget>, ComposeError> {
        let name = descriptor.component.name();
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ComposeError::UnknownComponent(name.to_owned()))?;
        Ok(factory(descriptor))
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ComponentRegistry")
            .field("components", &names)
            .finish()
    }
}
