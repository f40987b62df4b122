//! Tree builder that drives placement over a record stream.

use super::hooks::PlacementHooks;
use super::placement;
use super::types::{BuildContext, BuiltTree, HookAction};
use crate::error::Result;
use crate::stream::RecordStream;
use crate::tree::{DocumentTree, NodeId};
use crate::types::LineRecord;

/// Builds a [`DocumentTree`] from one section's line records.
///
/// Keeps a cursor on the most recently attached labeled node. Each record
/// goes through `before_place`, then (unless the hook handled it) generic
/// placement from the cursor, then `after_place`.
pub struct TreeBuilder<H: PlacementHooks> {
    stream: RecordStream,
    tree: DocumentTree,
    cursor: NodeId,
    placements: Vec<Option<NodeId>>,
    warnings: Vec<String>,
    hooks: H,
}

impl<H: PlacementHooks> TreeBuilder<H> {
    /// Create a builder over `records`.
    #[must_use]
    pub fn new(records: Vec<LineRecord>, hooks: H) -> Self {
        let tree = DocumentTree::new();
        let cursor = tree.root();
        Self {
            placements: Vec::with_capacity(records.len()),
            stream: RecordStream::new(records),
            tree,
            cursor,
            warnings: Vec::new(),
            hooks,
        }
    }

    /// Consume every record and return the finished tree.
    ///
    /// Fails only if a hook reports an error; generic placement always
    /// finds a parent.
    pub fn build(mut self) -> Result<BuiltTree> {
        while let Some(index) = self.stream.advance() {
            let Some(record) = self.stream.get(index) else {
                break;
            };

            let action = self.hooks.before_place(&mut BuildContext {
                index,
                record,
                stream: &self.stream,
                tree: &mut self.tree,
                placements: &self.placements,
                warnings: &mut self.warnings,
            })?;

            let placed = match action {
                HookAction::Place => Some(placement::place(
                    &mut self.tree,
                    self.cursor,
                    record,
                    self.stream.ahead(1),
                )),
                HookAction::Attached(node) => Some(node),
                HookAction::Skip => {
                    tracing::debug!(index, code = ?record.code(), "Skipping record");
                    None
                }
            };
            self.placements.push(placed);

            self.hooks.after_place(
                &mut BuildContext {
                    index,
                    record,
                    stream: &self.stream,
                    tree: &mut self.tree,
                    placements: &self.placements,
                    warnings: &mut self.warnings,
                },
                placed,
            )?;

            if let Some(node) = placed {
                if self.tree.label(node).is_some_and(|l| !l.text().is_empty()) {
                    self.cursor = node;
                }
            }
        }

        Ok(BuiltTree {
            tree: self.tree,
            warnings: self.warnings,
        })
    }
}
