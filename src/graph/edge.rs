//! Edge implementation for the heterogeneous graph
//!
//! Edges are undirected: the endpoint order records how the edge was added
//! and nothing more.

use super::property::{Predicate, PropertyMap, PropertyValue};
use super::types::{EdgeId, EdgeLabel, NodeId};
use serde::{Deserialize, Serialize};

/// A labeled, attributed edge between two nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Store-assigned identifier for this edge record
    pub id: EdgeId,

    /// The two endpoints, in the order given to `add_edge`
    pub endpoints: (NodeId, NodeId),

    /// Relation label
    pub label: EdgeLabel,

    /// Attributes associated with this edge
    pub attributes: PropertyMap,
}

impl Edge {
    /// Create a new edge with no attributes
    pub fn new(id: EdgeId, first: NodeId, second: NodeId, label: EdgeLabel) -> Self {
        Edge {
            id,
            endpoints: (first, second),
            label,
            attributes: PropertyMap::new(),
        }
    }

    pub(crate) fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get an attribute value
    pub fn get_attribute(&self, key: &str) -> Option<&PropertyValue> {
        self.attributes.get(key)
    }

    /// Get number of attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Check if this edge connects two specific nodes (in either orientation)
    pub fn connects(&self, node1: &NodeId, node2: &NodeId) -> bool {
        (self.endpoints.0 == *node1 && self.endpoints.1 == *node2)
            || (self.endpoints.0 == *node2 && self.endpoints.1 == *node1)
    }

    /// Check if the node is one of the endpoints
    pub fn touches(&self, node: &NodeId) -> bool {
        self.endpoints.0 == *node || self.endpoints.1 == *node
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    pub fn other_endpoint(&self, node: &NodeId) -> Option<&NodeId> {
        if self.endpoints.0 == *node {
            Some(&self.endpoints.1)
        } else if self.endpoints.1 == *node {
            Some(&self.endpoints.0)
        } else {
            None
        }
    }

    /// Both endpoints, in insertion order
    pub fn endpoint_ids(&self) -> [&NodeId; 2] {
        [&self.endpoints.0, &self.endpoints.1]
    }

    /// Label matches and, unless the predicate is empty, every condition
    /// holds on the edge attributes
    pub fn matches(&self, label: EdgeLabel, predicate: &Predicate) -> bool {
        self.label == label && (predicate.is_empty() || predicate.matches(&self.attributes))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
