//! # rad-widgets
//!
//! Stylable, lifecycle-safe UI widgets: alert, button, card, and a
//! class-carrying pass-through element.
//!
//! Widgets describe themselves as [`dom::Element`]s and leave materializing
//! them to the host. What they own is behavior: brand classes recomputed from
//! reactive props, a dismissal that never touches a torn-down widget, and
//! analytics tags gated by category, once-only, and hover flags.
//!
//! ## Core Systems
//!
//! - **[`reactive`]**: Props, derived values, watchers (Leptos-style auto-tracking)
//! - **[`style`]**: Brand class derivation and class-name binding expressions
//! - **[`tagging`]**: Tag parameters, the tag gate, analytics sinks
//! - **[`dismissal`]**: The fade, hide, notify sequence with liveness checks
//! - **[`compose`]**: Slot descriptors for container widgets and the component registry
//! - **[`widget`]**: Widget trait, shared instance state, lifecycle tracking
//! - **[`widgets`]**: Built-in widgets: Alert, Button, Card, ClassNamed
//! - **[`event`]**: Interactions and the timer queue
//! - **[`dom`]**: Element descriptions and slotmap node ids
//! - **[`app`]**: Host of mounted widgets, config, timers, sink
//! - **[`testing`]**: Headless pilot and markup snapshots
//! - **[`truth`]**: Truthiness normalization for template values

// Foundation
pub mod dom;
pub mod error;
pub mod truth;

// Reactivity and derivation
pub mod reactive;
pub mod style;

// Behavior
pub mod compose;
pub mod dismissal;
pub mod event;
pub mod tagging;

// Widget system
pub mod widget;
pub mod widgets;

// Application
pub mod app;
pub mod testing;

pub use app::{App, AppConfig};
pub use error::{AppError, ComposeError};
pub use truth::truth_convert;
