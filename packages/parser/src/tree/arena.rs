//! Arena-backed document tree.

use crate::enumeration::Enumeration;
use crate::types::{Footnote, LineRecord};

/// Index of a node in a [`DocumentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// What a node holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A structural unit: labeled subsection/paragraph/..., or an
    /// unlabeled wrapper for a plain text line. The root is unlabeled.
    Structural {
        label: Option<Enumeration>,
        footnotes: Vec<Footnote>,
    },
    /// A run of text. Normally a leaf.
    Text { content: String },
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Hierarchical section body.
///
/// Nodes live in one arena; parents and children refer to each other by
/// [`NodeId`]. Nodes are only ever added, so ids stay valid for the
/// lifetime of the tree.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    nodes: Vec<NodeData>,
}

impl DocumentTree {
    /// Create a tree holding only the unlabeled root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Structural {
                    label: None,
                    footnotes: Vec::new(),
                },
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn is_root(&self, id: NodeId) -> bool {
        id.0 == 0
    }

    /// Parent of a node; `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Children of a node in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    /// Label of a structural node.
    #[must_use]
    pub fn label(&self, id: NodeId) -> Option<&Enumeration> {
        match self.kind(id) {
            Some(NodeKind::Structural { label, .. }) => label.as_ref(),
            _ => None,
        }
    }

    /// Footnotes bound to a node. Text nodes never own footnotes.
    #[must_use]
    pub fn footnotes(&self, id: NodeId) -> &[Footnote] {
        match self.kind(id) {
            Some(NodeKind::Structural { footnotes, .. }) => footnotes.as_slice(),
            _ => &[],
        }
    }

    /// Number of nodes, including the root and text nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a node for `record` under `parent` without judging fit.
    ///
    /// The new structural node carries the record's label; a non-empty
    /// record text becomes its first child.
    pub fn attach(&mut self, parent: NodeId, record: &LineRecord) -> NodeId {
        let id = self.push(
            parent,
            NodeKind::Structural {
                label: record.label.clone(),
                footnotes: Vec::new(),
            },
        );

        if let Some(text) = record.text.as_deref().filter(|t| !t.is_empty()) {
            self.push(
                id,
                NodeKind::Text {
                    content: text.to_string(),
                },
            );
        }

        id
    }

    /// Bind a footnote to a structural node.
    ///
    /// Returns `false` if the node is not structural.
    pub fn add_footnote(&mut self, id: NodeId, footnote: Footnote) -> bool {
        match self.nodes.get_mut(id.0).map(|n| &mut n.kind) {
            Some(NodeKind::Structural { footnotes, .. }) => {
                footnotes.push(footnote);
                true
            }
            _ => false,
        }
    }

    /// Label texts in pre-order.
    #[must_use]
    pub fn iter_labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if let Some(label) = self.label(id) {
                labels.push(label.text());
            }
            stack.extend(self.children(id).iter().rev());
        }
        labels
    }

    /// Depth of a node below the root.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}
