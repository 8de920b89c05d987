//! Node implementation for the heterogeneous graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, NodeId, NodeType};
use serde::{Deserialize, Serialize};

/// A node in the graph
///
/// Nodes have:
/// - A caller-provided id, unique within the store
/// - Exactly one type
/// - Attributes (key-value pairs)
/// - The ids of every incident edge, in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Type of this node
    pub node_type: NodeType,

    /// Attributes associated with this node
    pub attributes: PropertyMap,

    /// Incident edges. Every edge is listed by both of its endpoints.
    pub adjacency: Vec<EdgeId>,
}

impl Node {
    /// Create a new node with no attributes and no edges
    pub fn new(id: impl Into<NodeId>, node_type: NodeType) -> Self {
        Node {
            id: id.into(),
            node_type,
            attributes: PropertyMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Set an attribute value, returning the previous one
    pub(crate) fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Get an attribute value
    pub fn get_attribute(&self, key: &str) -> Option<&PropertyValue> {
        self.attributes.get(key)
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Get number of attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Number of incident edge records, duplicates included
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_type(&self, node_type: NodeType) -> bool {
        self.node_type == node_type
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
