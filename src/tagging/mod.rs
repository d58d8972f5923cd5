//! Analytics tagging: events, gating, and sinks.

pub mod event;
pub mod gate;
pub mod sink;

pub use event::{CustomDimensions, TagEvent, TagParams};
pub use gate::{TagGate, TagTrigger};
pub use sink::{RecordingSink, TagSink, TracingSink};
