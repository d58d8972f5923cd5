//! Slot composition: named regions of container widgets.

pub mod registry;
pub mod slots;

pub use registry::{ComponentRegistry, Factory};
pub use slots::{
    component_key, compose, ComponentRef, SlotDescriptor, SlotProps, SlotSpec, Slots, PURE_ELEMENT,
};
