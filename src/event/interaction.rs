//! User interactions delivered to widgets.

/// What the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// A full click (press and release).
    Click,
    /// Pointer button pressed. Only produced by real pointer input.
    MouseDown,
    /// Pointer entered the widget.
    MouseEnter,
    /// The widget lost focus.
    Blur,
}

/// A user interaction, optionally aimed at a named sub-element of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Sub-element the interaction hit (e.g. `"close"` on an alert).
    pub part: Option<String>,
}

impl Interaction {
    pub fn new(kind: InteractionKind) -> Self {
        Self { kind, part: None }
    }

    pub fn click() -> Self {
        Self::new(InteractionKind::Click)
    }

    pub fn mouse_down() -> Self {
        Self::new(InteractionKind::MouseDown)
    }

    pub fn mouse_enter() -> Self {
        Self::new(InteractionKind::MouseEnter)
    }

    pub fn blur() -> Self {
        Self::new(InteractionKind::Blur)
    }

    /// Aim the interaction at a named part (builder).
    pub fn on_part(mut self, part: impl Into<String>) -> Self {
        self.part = Some(part.into());
        self
    }

    /// Whether this interaction hit `part`.
    pub fn hits(&self, part: &str) -> bool {
        self.part.as_deref() == Some(part)
    }
}
