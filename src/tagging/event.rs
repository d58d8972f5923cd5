//! Tag events and the typed parameter bundle they are built from.

use std::collections::BTreeMap;

/// Custom analytics dimensions, keyed by dimension name.
pub type CustomDimensions = BTreeMap<String, String>;

/// The analytics fields a widget is configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagParams {
    /// Event category. An empty category disables tagging for the widget.
    pub category: String,
    pub action: String,
    /// `None` lets the sink apply its own default label.
    pub label: Option<String>,
    pub value: String,
    pub custom_dimensions: Option<CustomDimensions>,
}

impl TagParams {
    /// Parameters with the given category and nothing else.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Add one custom dimension (builder).
    pub fn dimension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_dimensions
            .get_or_insert_with(CustomDimensions::new)
            .insert(name.into(), value.into());
        self
    }

    /// Whether a tag can be built from these parameters.
    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }
}

/// An analytics event ready for the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEvent {
    pub category: String,
    pub action: String,
    pub label: Option<String>,
    pub value: String,
    pub custom_dimensions: Option<CustomDimensions>,
}

impl TagEvent {
    /// Build an event from `params`; `None` when the category is empty.
    pub fn from_params(params: &TagParams) -> Option<Self> {
        if !params.has_category() {
            return None;
        }
        Some(Self {
            category: params.category.clone(),
            action: params.action.clone(),
            label: params.label.clone(),
            value: params.value.clone(),
            custom_dimensions: params.custom_dimensions.clone(),
        })
    }
}
