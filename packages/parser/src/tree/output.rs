//! Serializable and printable views of a [`DocumentTree`].

use serde::{Deserialize, Serialize};

use super::arena::{DocumentTree, NodeId, NodeKind};

/// Tree shape as written to section JSON files.
///
/// Footnotes are not part of this form; callers that want them read them
/// from the in-memory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputNode {
    /// `{"type": "node", "enum": <label or null>, "sub": [...]}`
    #[serde(rename = "node")]
    Node {
        #[serde(rename = "enum")]
        label: Option<String>,
        sub: Vec<OutputNode>,
    },
    /// `{"type": "textnode", "content": <string>, "sub": [...]}`
    #[serde(rename = "textnode")]
    TextNode { content: String, sub: Vec<OutputNode> },
}

impl OutputNode {
    /// Child nodes.
    #[must_use]
    pub fn sub(&self) -> &[OutputNode] {
        match self {
            Self::Node { sub, .. } | Self::TextNode { sub, .. } => sub.as_slice(),
        }
    }

    /// Number of nodes in this subtree, itself included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.sub().iter().map(OutputNode::node_count).sum::<usize>()
    }

    /// Labels in pre-order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Self::Node {
                label: Some(label), ..
            } = node
            {
                out.push(label.as_str());
            }
        });
        out
    }

    /// Text contents in pre-order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Self::TextNode { content, .. } = node {
                out.push(content.as_str());
            }
        });
        out
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a OutputNode)) {
        visit(self);
        for child in self.sub() {
            child.walk(visit);
        }
    }
}

impl DocumentTree {
    /// Convert the tree to its serializable form, starting at the root.
    #[must_use]
    pub fn to_output(&self) -> OutputNode {
        self.output_node(self.root())
    }

    fn output_node(&self, id: NodeId) -> OutputNode {
        let sub = self
            .children(id)
            .iter()
            .map(|child| self.output_node(*child))
            .collect();

        match self.kind(id) {
            Some(NodeKind::Text { content }) => OutputNode::TextNode {
                content: content.clone(),
                sub,
            },
            Some(NodeKind::Structural { label, .. }) => OutputNode::Node {
                label: label.as_ref().map(|l| l.text().to_string()),
                sub,
            },
            None => OutputNode::Node { label: None, sub },
        }
    }

    /// Render the tree as an indented plain-text outline.
    ///
    /// Labeled nodes print as `(label) text`, two spaces deeper than their
    /// parent. Footnotes follow their node as `NOTE: <number> <offset> <text>`.
    #[must_use]
    pub fn render_outline(&self) -> String {
        let mut lines = Vec::new();
        self.render_children(self.root(), 0, &mut lines);
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn render_children(&self, id: NodeId, depth: usize, lines: &mut Vec<String>) {
        for child in self.children(id) {
            self.render_node(*child, depth, lines);
        }
    }

    fn render_node(&self, id: NodeId, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self.kind(id) {
            Some(NodeKind::Text { content }) => {
                lines.push(format!("{indent}{content}"));
                self.render_children(id, depth + 1, lines);
            }
            Some(NodeKind::Structural {
                label: Some(label),
                footnotes,
            }) => {
                let children = self.children(id);
                // A leading text child prints on the label's own line
                let (line, rest) = match children.split_first() {
                    Some((first, rest)) => match self.kind(*first) {
                        Some(NodeKind::Text { content }) if self.children(*first).is_empty() => {
                            (format!("{indent}({label}) {content}"), rest)
                        }
                        _ => (format!("{indent}({label})"), children),
                    },
                    None => (format!("{indent}({label})"), children),
                };
                lines.push(line);
                for note in footnotes {
                    lines.push(format!(
                        "{indent}NOTE: {} {} {}",
                        note.number, note.offset, note.text
                    ));
                }
                for child in rest {
                    self.render_node(*child, depth + 1, lines);
                }
            }
            Some(NodeKind::Structural {
                label: None,
                footnotes,
            }) => {
                self.render_children(id, depth, lines);
                for note in footnotes {
                    lines.push(format!(
                        "{indent}NOTE: {} {} {}",
                        note.number, note.offset, note.text
                    ));
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::Enumeration;
    use crate::types::{Footnote, LineRecord};
    use pretty_assertions::assert_eq;

    fn sample_tree() -> DocumentTree {
        let mut tree = DocumentTree::new();
        let root = tree.root();
        let a = tree.attach(root, &LineRecord::labeled(Enumeration::parse("a"), "In general."));
        tree.attach(a, &LineRecord::labeled(Enumeration::parse("1"), "first"));
        tree.attach(a, &LineRecord::plain("trailing text"));
        tree.attach(root, &LineRecord::labeled(Enumeration::parse("b"), "Exception."));
        tree
    }

    #[test]
    fn test_to_output_json_shape() {
        let tree = DocumentTree::new();
        let json = serde_json::to_value(tree.to_output()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "node", "enum": null, "sub": []})
        );
    }

    #[test]
    fn test_to_output_nested() {
        let output = sample_tree().to_output();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["sub"][0]["type"], "node");
        assert_eq!(json["sub"][0]["enum"], "a");
        assert_eq!(json["sub"][0]["sub"][0]["type"], "textnode");
        assert_eq!(json["sub"][0]["sub"][0]["content"], "In general.");
        assert_eq!(json["sub"][0]["sub"][1]["enum"], "1");
        assert_eq!(json["sub"][0]["sub"][2]["enum"], serde_json::Value::Null);
        assert_eq!(json["sub"][1]["enum"], "b");
    }

    #[test]
    fn test_output_round_trip() {
        let tree = sample_tree();
        let output = tree.to_output();
        let json = serde_json::to_string(&output).unwrap();
        let reread: OutputNode = serde_json::from_str(&json).unwrap();

        assert_eq!(reread, output);
        assert_eq!(reread.node_count(), tree.node_count());
        assert_eq!(reread.labels(), tree.iter_labels());
        assert_eq!(
            reread.texts(),
            vec!["In general.", "first", "trailing text", "Exception."]
        );
    }

    #[test]
    fn test_render_outline() {
        let mut tree = sample_tree();
        let first = tree.children(tree.root())[0];
        tree.add_footnote(
            first,
            Footnote {
                number: "1".to_string(),
                offset: 3,
                text: "So in original.".to_string(),
            },
        );

        let expected = "\
(a) In general.
NOTE: 1 3 So in original.
  (1) first
  trailing text
(b) Exception.
";
        assert_eq!(tree.render_outline(), expected);
    }

    #[test]
    fn test_render_outline_empty() {
        assert_eq!(DocumentTree::new().render_outline(), "");
    }
}
