//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to programmatically drive an [`App`](crate::app::App)
//! and inspect the tags it emits. Use [`render_to_string`] and
//! [`element_to_string`] to capture widget output as markup for
//! snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{element_to_string, render_to_string};
