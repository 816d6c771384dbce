//! Read-only page snapshot model.
//!
//! A [`PageSnapshot`] is an id-indexed arena of element and text nodes
//! deserialized from a JSON export of a document tree. It exposes only the
//! traversal queries the extraction heuristics need (by-tag iteration in
//! document order, deep text content, ancestor and sibling walks) and no
//! mutation API, so the heuristics can be exercised against synthetic
//! trees without a rendering engine.

mod node;
mod raw;

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;

use std::path::Path;

use thiserror::Error;

pub use node::{NodeAttributes, NodeId, PageNode, TEXT_TAG};
pub use raw::{RawNode, RawSnapshot};

/// Errors while loading or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An immutable document tree captured from a page.
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    /// Page URL, if the exporter recorded one.
    pub url: String,
    /// Page title, if the exporter recorded one.
    pub title: String,
    /// All nodes in pre-order; index 0 is the root.
    nodes: Vec<PageNode>,
}

impl PageSnapshot {
    /// Decode a snapshot from its JSON export format.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Read and decode a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the arena from the nested export format.
    pub fn from_raw(raw: RawSnapshot) -> Self {
        let mut snapshot = Self {
            url: raw.url,
            title: raw.title,
            nodes: Vec::new(),
        };
        snapshot.push_raw(raw.root, None);
        snapshot
    }

    fn push_raw(&mut self, raw: RawNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        match raw {
            RawNode::Text { text } => {
                self.nodes.push(PageNode::text(id, parent, text));
            }
            RawNode::Element {
                tag,
                attrs,
                children,
            } => {
                self.nodes
                    .push(PageNode::element(id, parent, tag.to_lowercase(), attrs));
                for child in children {
                    let child_id = self.push_raw(child, Some(id));
                    self.nodes[id.0].children.push(child_id);
                }
            }
        }
        id
    }

    /// Number of nodes in the snapshot.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the snapshot holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> &PageNode {
        &self.nodes[id.0]
    }

    /// All nodes in document (pre-)order.
    pub fn iter(&self) -> impl Iterator<Item = &PageNode> {
        self.nodes.iter()
    }

    /// All element nodes in document order.
    pub fn elements(&self) -> impl Iterator<Item = &PageNode> {
        self.nodes.iter().filter(|n| n.is_element())
    }

    /// Element nodes with the given (lowercase) tag, in document order.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a PageNode> {
        self.elements().filter(move |n| n.tag == tag)
    }

    /// First element whose `id` attribute equals `value`.
    pub fn element_by_attr_id(&self, value: &str) -> Option<&PageNode> {
        self.elements()
            .find(|n| n.attrs.id.as_deref() == Some(value))
    }

    /// Concatenated text of all text nodes under `id`, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        if node.is_text() {
            out.push_str(&node.text);
            return;
        }
        for &child in &node.children {
            self.collect_text(child, out);
        }
    }

    /// Parent of a node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Siblings before `id` under the same parent, nearest first.
    pub fn preceding_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.parent(id) else {
            return Vec::new();
        };
        let siblings = &self.node(parent).children;
        let position = siblings.iter().position(|&s| s == id).unwrap_or(0);
        siblings[..position].iter().rev().copied().collect()
    }

    /// Siblings after `id` under the same parent, nearest first.
    pub fn following_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.parent(id) else {
            return Vec::new();
        };
        let siblings = &self.node(parent).children;
        let position = match siblings.iter().position(|&s| s == id) {
            Some(p) => p,
            None => return Vec::new(),
        };
        siblings[position + 1..].to_vec()
    }

    /// First descendant of `id` (document order) with the given tag.
    pub fn descendant_by_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        for &child in &self.node(id).children {
            if self.node(child).tag == tag {
                return Some(child);
            }
            if let Some(found) = self.descendant_by_tag(child, tag) {
                return Some(found);
            }
        }
        None
    }
}
