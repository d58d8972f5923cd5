//! Reactive widget properties.
//!
//! Leptos-style fine-grained reactivity, single-threaded and synchronous.
//!
//! - [`create_prop`]: a read/write property.
//! - [`create_derived`]: a memoised computation over props.
//! - [`watch`]: an auto-tracking side effect.
//! - [`batch`]: coalesce multiple writes into one notification pass.
//! - [`Scope`]: owns the slots created for one widget and frees them with it.

pub mod derived;
pub mod prop;
pub mod scope;

pub use derived::{create_derived, Derived};
pub use prop::{batch, create_prop, dispose_prop, stop_watch, watch, Prop, PropId, WatchId};
pub use scope::Scope;
