//! Class derivation: brand classes and class-name bindings.

pub mod binder;
pub mod binding;

pub use binder::{bind_brand_class, derive_class};
pub use binding::{parse_bindings, resolve_bindings, BindingError, BoundValue, ClassBinding};
