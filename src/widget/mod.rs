//! Widget system: trait, base instance, lifecycle.

pub mod instance;
pub mod lifecycle;
pub mod traits;

pub use instance::WidgetInstance;
pub use lifecycle::{LifecycleEvent, LifecycleTracker, Liveness};
pub use traits::{Context, Hook, Widget};
