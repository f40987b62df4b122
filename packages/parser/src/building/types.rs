//! Types shared by the tree builder and its hooks.

use crate::stream::RecordStream;
use crate::tree::{DocumentTree, NodeId};
use crate::types::LineRecord;

/// What the builder should do with a record after `before_place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    /// Run generic placement.
    Place,
    /// The hook already attached the record as this node.
    Attached(NodeId),
    /// Drop the record; it is not attached anywhere.
    Skip,
}

/// State handed to hooks for one record.
pub struct BuildContext<'a> {
    /// Position of the record in the stream.
    pub index: usize,

    /// The record being placed.
    pub record: &'a LineRecord,

    /// The whole stream, for lookups relative to `index`.
    pub stream: &'a RecordStream,

    /// The tree under construction.
    pub tree: &'a mut DocumentTree,

    /// Node created for each earlier record, by stream index.
    ///
    /// In `after_place` this also covers the current record.
    pub placements: &'a [Option<NodeId>],

    /// Sink for non-fatal problems, reported with the finished tree.
    pub warnings: &'a mut Vec<String>,
}

impl BuildContext<'_> {
    /// Node created for the record at `index`, if it was attached.
    #[must_use]
    pub fn node_for(&self, index: usize) -> Option<NodeId> {
        self.placements.get(index).copied().flatten()
    }
}

/// A finished section tree plus the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct BuiltTree {
    pub tree: DocumentTree,
    pub warnings: Vec<String>,
}

impl BuiltTree {
    /// Discard warnings and keep the tree.
    #[must_use]
    pub fn into_tree(self) -> DocumentTree {
        self.tree
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
