//! Placement hooks for the GPO locator-coded dump.

use std::collections::HashMap;

use super::config::{create_gpo_locator_rules, LocatorRules};
use super::footnotes::{parse_definition, scan_markers};
use super::hooks::PlacementHooks;
use super::types::{BuildContext, HookAction};
use crate::error::{ParserError, Result};
use crate::tree::NodeId;
use crate::types::Footnote;

/// Patches placement for locator-code quirks and binds footnotes.
///
/// State is per section: build a fresh value for every section parsed.
#[derive(Debug, Clone)]
pub struct GpoLocatorHooks {
    rules: LocatorRules,

    /// Locator code → stream index of the latest record with that code.
    codemap: HashMap<String, usize>,

    /// Footnote number → (stream index, byte offset) of its marker.
    markers: HashMap<String, (usize, usize)>,
}

impl GpoLocatorHooks {
    /// Create hooks with custom rules.
    #[must_use]
    pub fn new(rules: LocatorRules) -> Self {
        Self {
            rules,
            codemap: HashMap::new(),
            markers: HashMap::new(),
        }
    }

    /// Node placed for the latest record carrying `code`.
    fn latest_node(&self, context: &BuildContext<'_>, code: &str) -> Option<NodeId> {
        self.codemap
            .get(code)
            .and_then(|index| context.node_for(*index))
    }

    /// Attach the current record as a sibling of `node`.
    fn attach_beside(context: &mut BuildContext<'_>, node: NodeId) -> NodeId {
        let parent = context
            .tree
            .parent(node)
            .unwrap_or_else(|| context.tree.root());
        context.tree.attach(parent, context.record)
    }

    /// Remember footnote markers in the current record's text.
    fn index_markers(&mut self, context: &BuildContext<'_>) {
        let Some(text) = context.record.text.as_deref() else {
            return;
        };
        for marker in scan_markers(text) {
            tracing::trace!(
                number = %marker.number,
                offset = marker.offset,
                index = context.index,
                "Found footnote marker"
            );
            self.markers.insert(marker.number, (context.index, marker.offset));
        }
    }

    fn bind_definition(&mut self, context: &mut BuildContext<'_>) {
        let Some(text) = context.record.text.as_deref() else {
            return;
        };

        let definition = match parse_definition(text) {
            Ok(definition) => definition,
            Err(e) => {
                tracing::warn!(index = context.index, error = %e, "Skipping footnote definition");
                context.warnings.push(format!("Line {}: {e}", context.index));
                return;
            }
        };

        let Some((marker_index, offset)) = self.markers.remove(&definition.number) else {
            tracing::debug!(number = %definition.number, "No marker for footnote, dropping");
            return;
        };

        let Some(owner) = context.node_for(marker_index) else {
            tracing::debug!(number = %definition.number, "Footnote marker line was not placed");
            return;
        };

        context.tree.add_footnote(
            owner,
            Footnote {
                number: definition.number,
                offset,
                text: definition.text,
            },
        );
    }
}

impl Default for GpoLocatorHooks {
    fn default() -> Self {
        Self::new(create_gpo_locator_rules())
    }
}

impl PlacementHooks for GpoLocatorHooks {
    fn before_place(&mut self, context: &mut BuildContext<'_>) -> Result<HookAction> {
        if let Some(code) = context.record.code() {
            self.codemap.insert(code.to_string(), context.index);

            if let Some(predecessor) = self.rules.continuation_of(code) {
                let node = self.latest_node(context, predecessor).ok_or_else(|| {
                    ParserError::MissingPredecessor {
                        code: code.to_string(),
                        predecessor: predecessor.to_string(),
                    }
                })?;
                let id = Self::attach_beside(context, node);
                self.index_markers(context);
                return Ok(HookAction::Attached(id));
            }

            if let Some(prerequisite) = self.rules.redirect_of(code) {
                let Some(node) = self.latest_node(context, prerequisite) else {
                    tracing::debug!(code, prerequisite, "Prerequisite not seen, dropping line");
                    return Ok(HookAction::Skip);
                };
                let id = Self::attach_beside(context, node);
                self.index_markers(context);
                return Ok(HookAction::Attached(id));
            }

            if self.rules.is_footnote_definition(code) {
                return Ok(HookAction::Skip);
            }
        }

        self.index_markers(context);
        Ok(HookAction::Place)
    }

    fn after_place(
        &mut self,
        context: &mut BuildContext<'_>,
        _placed: Option<NodeId>,
    ) -> Result<()> {
        if context
            .record
            .code()
            .is_some_and(|code| self.rules.is_footnote_definition(code))
        {
            self.bind_definition(context);
        }
        Ok(())
    }
}
