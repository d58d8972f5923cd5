//! Node identity for mounted widgets.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a mounted widget. Copy, lightweight (u64).
    pub struct NodeId;
}
