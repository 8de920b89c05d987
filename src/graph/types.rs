//! Core type definitions for the graph store

use super::store::GraphError;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Insertion-ordered set of node ids, de-duplicated by identity
pub type NodeSet = IndexSet<NodeId, FxBuildHasher>;

/// Caller-provided node identity
///
/// Ids are opaque to the store. Different node types may use different
/// representations (URLs for events and companies, integers for people),
/// so an id is either text or an integer. `Text("1")` and `Integer(1)` are
/// distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(untagged)]
pub enum NodeId {
    Text(String),
    Integer(i64),
}

impl NodeId {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NodeId::Text(s) => Some(s),
            NodeId::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NodeId::Integer(i) => Some(*i),
            NodeId::Text(_) => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Text(s) => write!(f, "{}", s),
            NodeId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Text(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Text(s)
    }
}

impl From<&String> for NodeId {
    fn from(s: &String) -> Self {
        NodeId::Text(s.clone())
    }
}

impl From<i64> for NodeId {
    fn from(i: i64) -> Self {
        NodeId::Integer(i)
    }
}

impl From<i32> for NodeId {
    fn from(i: i32) -> Self {
        NodeId::Integer(i as i64)
    }
}

impl From<u32> for NodeId {
    fn from(i: u32) -> Self {
        NodeId::Integer(i as i64)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

/// Store-assigned identifier for an edge record
///
/// Edges have no caller identity: two `add_edge` calls for the same pair
/// and label produce two records with different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// Node type, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    People,
    Company,
    Event,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [NodeType::People, NodeType::Company, NodeType::Event];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::People => "people",
            NodeType::Company => "company",
            NodeType::Event => "event",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(NodeType::People),
            "company" => Ok(NodeType::Company),
            "event" => Ok(NodeType::Event),
            other => Err(GraphError::InvalidType(other.to_string())),
        }
    }
}

/// Edge label, a closed set. Edges carry no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLabel {
    WorksAt,
    Attends,
}

impl EdgeLabel {
    pub const ALL: [EdgeLabel; 2] = [EdgeLabel::WorksAt, EdgeLabel::Attends];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeLabel::WorksAt => "works_at",
            EdgeLabel::Attends => "attends",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeLabel {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "works_at" => Ok(EdgeLabel::WorksAt),
            "attends" => Ok(EdgeLabel::Attends),
            other => Err(GraphError::InvalidLabel(other.to_string())),
        }
    }
}
