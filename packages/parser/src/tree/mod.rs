//! Document tree for a single section body.
//!
//! Nodes are stored in an arena and refer to their parent by index, so the
//! placement algorithm can walk upward from any node without owning
//! references.

mod arena;
mod output;

pub use arena::{DocumentTree, NodeId, NodeKind};
pub use output::OutputNode;
