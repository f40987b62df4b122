//! Generic placement: decide where in the tree a line record belongs.

use crate::enumeration::Enumeration;
use crate::tree::{DocumentTree, NodeId};
use crate::types::LineRecord;

/// A glyph that opens either a roman or an alphabetic level, and the
/// label that would hold it if it were the next letter instead.
struct AmbiguousOpener {
    /// Label of the cursor node when the question arises.
    container: &'static str,
    /// The ambiguous opener itself.
    opener: &'static str,
    /// The alphabetic successor of the opener.
    alpha_next: &'static str,
}

const AMBIGUOUS_OPENERS: [AmbiguousOpener; 2] = [
    AmbiguousOpener {
        container: "h",
        opener: "i",
        alpha_next: "j",
    },
    AmbiguousOpener {
        container: "H",
        opener: "I",
        alpha_next: "J",
    },
];

/// Attach `record` at the position chosen by [`find_parent`].
pub fn place(
    tree: &mut DocumentTree,
    cursor: NodeId,
    record: &LineRecord,
    lookahead: Option<&LineRecord>,
) -> NodeId {
    let parent = find_parent(tree, cursor, record, lookahead);
    tree.attach(parent, record)
}

/// Choose the parent node for `record`, starting the search at `cursor`.
///
/// Unlabeled records always nest under the cursor. Labeled records nest
/// under the cursor when they open a new scheme or were already resolved
/// as nested, and become the cursor's sibling when they could follow the
/// cursor's label. Otherwise the search moves up one level and repeats;
/// the root accepts anything, so the search always terminates.
///
/// `lookahead` is the record after `record`, used only to tell a roman
/// `i`/`I` from an alphabetic one.
#[must_use]
pub fn find_parent(
    tree: &DocumentTree,
    cursor: NodeId,
    record: &LineRecord,
    lookahead: Option<&LineRecord>,
) -> NodeId {
    let Some(label) = record.label.as_ref() else {
        return cursor;
    };

    let mut cursor = cursor;
    loop {
        if tree.is_root(cursor) {
            return cursor;
        }

        // Only the root lacks a parent; fall back to it regardless
        let parent = tree.parent(cursor).unwrap_or_else(|| tree.root());

        if label.is_first_in_scheme() {
            return resolve_opener(tree, cursor, parent, label, lookahead);
        }

        if label.was_nested() {
            return cursor;
        }

        match tree.label(cursor) {
            None => return parent,
            Some(current) if label.could_be_next_after(current) => return parent,
            Some(current) => {
                tracing::trace!(
                    label = %label,
                    cursor = %current,
                    "Label does not follow cursor, moving up"
                );
                cursor = parent;
            }
        }
    }
}

/// Place a scheme opener: nested under the cursor, except for an `i`/`I`
/// under `h`/`H` that the next label shows to be a sibling.
fn resolve_opener(
    tree: &DocumentTree,
    cursor: NodeId,
    parent: NodeId,
    label: &Enumeration,
    lookahead: Option<&LineRecord>,
) -> NodeId {
    let Some(current) = tree.label(cursor) else {
        return cursor;
    };

    let Some(rule) = AMBIGUOUS_OPENERS
        .iter()
        .find(|r| r.opener == label.text() && r.container == current.text())
    else {
        return cursor;
    };

    let Some(next) = lookahead.and_then(|r| r.label.as_ref()) else {
        return cursor;
    };

    if next.could_be_next_after(label) || next.text() == rule.alpha_next {
        tracing::debug!(
            label = %label,
            next = %next,
            "Ambiguous opener resolved as sibling of {}",
            rule.container
        );
        parent
    } else {
        cursor
    }
}
