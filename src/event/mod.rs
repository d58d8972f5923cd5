//! Event system: user interactions and deferred callbacks.

pub mod interaction;
pub mod timer;

pub use interaction::{Interaction, InteractionKind};
pub use timer::{Callback, Scheduler, TimerQueue};
