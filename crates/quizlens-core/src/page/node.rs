//! Node types for the snapshot arena.

use serde::{Deserialize, Serialize};

/// Synthetic tag used for text nodes.
pub const TEXT_TAG: &str = "#text";

/// Index of a node within its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attributes the extraction heuristics care about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, rename = "for", skip_serializing_if = "Option::is_none")]
    pub r#for: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// One node of a page snapshot.
#[derive(Debug, Clone)]
pub struct PageNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Lowercase tag name; [`TEXT_TAG`] for text nodes.
    pub tag: String,
    pub attrs: NodeAttributes,
    /// Payload of a text node; empty for elements.
    pub text: String,
}

impl PageNode {
    pub(crate) fn text(id: NodeId, parent: Option<NodeId>, text: String) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            tag: TEXT_TAG.to_string(),
            attrs: NodeAttributes::default(),
            text,
        }
    }

    pub(crate) fn element(
        id: NodeId,
        parent: Option<NodeId>,
        tag: String,
        attrs: NodeAttributes,
    ) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            tag,
            attrs,
            text: String::new(),
        }
    }

    /// This node's id within its snapshot.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    pub fn is_element(&self) -> bool {
        !self.is_text()
    }

    /// True for `h1` through `h6`.
    pub fn is_heading(&self) -> bool {
        matches!(self.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    }

    /// True for `<input type="radio">`.
    pub fn is_radio(&self) -> bool {
        self.tag == "input"
            && self
                .attrs
                .r#type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case("radio"))
    }
}
