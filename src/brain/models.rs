//! Visualization graph models
//!
//! Types handed to the rendering layer. `GraphLink` endpoints start as raw
//! note ids; a layout engine may replace them with resolved nodes in place,
//! so [`EndpointRef`] models both states explicitly instead of leaving
//! consumers to probe field shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship role of a node relative to the focus note.
///
/// Mutually exclusive: a note appearing in more than one role is resolved by
/// precedence (focus > parent > child > sibling, first assignment wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeGroup {
    Focus,
    Parent,
    Child,
    Sibling,
}

impl fmt::Display for NodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus => write!(f, "focus"),
            Self::Parent => write!(f, "parent"),
            Self::Child => write!(f, "child"),
            Self::Sibling => write!(f, "sibling"),
        }
    }
}

/// Edge role relative to the focus note. This is not the server's open
/// `NoteLink.kind` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Parent,
    Child,
    Sibling,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent => write!(f, "parent"),
            Self::Child => write!(f, "child"),
            Self::Sibling => write!(f, "sibling"),
        }
    }
}

/// A renderable node derived from a note summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub title: String,
    pub group: NodeGroup,
    /// Layout-assigned position; `None` until the layout engine runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// A link endpoint: a raw note id before layout resolution, or the resolved
/// node afterwards. The two are interchangeable on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointRef {
    Id(String),
    Node(Box<GraphNode>),
}

impl EndpointRef {
    /// The note id behind this endpoint, resolved or not.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Node(node) => &node.id,
        }
    }
}

/// A renderable edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: EndpointRef,
    pub target: EndpointRef,
    pub kind: LinkKind,
}

/// The projected graph: what the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrainGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}
