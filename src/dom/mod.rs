//! Element descriptions and node identity.

pub mod element;
pub mod node;

pub use element::Element;
pub use node::NodeId;
