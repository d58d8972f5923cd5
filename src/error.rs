//! Framework-level errors.
//!
//! Widget behavior itself never fails: an empty brand, a dismiss on a
//! non-dismissible widget, an untagged click and a fade that completes after
//! teardown are all silent. These errors cover host misuse only.

use crate::dom::node::NodeId;

/// Errors from driving an [`App`](crate::app::App).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("no widget mounted at {0:?}")]
    UnknownNode(NodeId),
    #[error("widget at {id:?} is a `{actual}`, not the requested type")]
    WrongType { id: NodeId, actual: String },
}

/// Errors from instantiating slot components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("no component registered as `{0}`")]
    UnknownComponent(String),
    #[error("no slot named `{0}`")]
    UnknownSlot(String),
}
