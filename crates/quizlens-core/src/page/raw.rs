//! Nested JSON export format for page snapshots.
//!
//! The exporter (a browser helper, out of scope here) walks the document
//! and emits one nested object per node. Elements carry a `tag`, optional
//! `attrs` and `children`; text nodes carry only `text`.

use serde::{Deserialize, Serialize};

use super::node::NodeAttributes;

/// One node of the nested export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    Text {
        text: String,
    },
    Element {
        tag: String,
        #[serde(default)]
        attrs: NodeAttributes,
        #[serde(default)]
        children: Vec<RawNode>,
    },
}

/// Root of the export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub title: String,

    pub root: RawNode,
}
