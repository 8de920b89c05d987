//! In-memory graph storage implementation
//!
//! The store owns every node and edge. It is append-only: nodes and edges
//! are created by explicit add operations and never removed, while attribute
//! values may be overwritten in place.
//!
//! Every edge is registered in the adjacency list of both endpoints, so a
//! traversal can start from either side without a reverse index.

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyValue;
use super::types::{EdgeId, EdgeLabel, NodeId, NodeSet, NodeType};
use crate::config::GraphConfig;
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} already exists")]
    DuplicateId(NodeId),

    #[error("Invalid node type: {0}")]
    InvalidType(String),

    #[error("Invalid edge label: {0}")]
    InvalidLabel(String),

    #[error("Node {0} not found")]
    MissingNode(NodeId),

    #[error("Edge {first} --[{label}]-- {second} not found")]
    EdgeNotFound {
        first: NodeId,
        second: NodeId,
        label: EdgeLabel,
    },

    #[error("Cannot filter edges between {source_type} and {target_type}: no relation closes over the remaining type")]
    UnsupportedRelation {
        source_type: NodeType,
        target_type: NodeType,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Summary counts over the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: HashMap<NodeType, usize>,
    pub edges_by_label: HashMap<EdgeLabel, usize>,
    /// Edge records beyond the first for the same unordered pair and label
    pub duplicate_edges: usize,
}

/// In-memory graph storage
///
/// - nodes: NodeId -> Node, in insertion order
/// - edges: arena indexed by EdgeId
/// - type_index: NodeType -> node ids, in insertion order
/// - label_index: (NodeId, EdgeLabel) -> incident edge ids (optional, see
///   `GraphConfig::index_edges_by_label`)
///
/// The store does no internal locking. Reads through `&GraphStore` may run
/// on many threads at once; mutation needs `&mut GraphStore`, so an embedding
/// application finishes ingestion first or wraps the store in a
/// reader-writer lock.
#[derive(Debug)]
pub struct GraphStore {
    /// Node storage
    nodes: IndexMap<NodeId, Node, FxBuildHasher>,

    /// Edge storage (arena)
    edges: Vec<Edge>,

    /// Type index for fast lookups
    type_index: HashMap<NodeType, NodeSet>,

    /// Incident edges per node, grouped by label
    label_index: Option<FxHashMap<(NodeId, EdgeLabel), Vec<EdgeId>>>,

    config: GraphConfig,
}

impl GraphStore {
    /// Create a new empty graph store with the default config
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph store
    pub fn with_config(config: GraphConfig) -> Self {
        let label_index = config.index_edges_by_label.then(FxHashMap::default);
        GraphStore {
            nodes: IndexMap::with_capacity_and_hasher(config.node_capacity, FxBuildHasher),
            edges: Vec::with_capacity(config.edge_capacity),
            type_index: HashMap::new(),
            label_index,
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Create a node
    ///
    /// Fails with `DuplicateId` if the id is already taken. Node types are a
    /// closed enum, so an unknown type name is rejected earlier, when it is
    /// parsed into a `NodeType`.
    pub fn add_node(&mut self, id: impl Into<NodeId>, node_type: NodeType) -> GraphResult<&Node> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateId(id));
        }

        debug!("add_node {} ({})", id, node_type);
        self.type_index
            .entry(node_type)
            .or_default()
            .insert(id.clone());

        let (idx, _) = self.nodes.insert_full(id.clone(), Node::new(id, node_type));
        Ok(&self.nodes[idx])
    }

    /// Create an edge between two existing nodes
    ///
    /// No self-loop, direction or duplicate checks are made: calling this
    /// twice for the same pair and label creates two edge records.
    pub fn add_edge(
        &mut self,
        id1: impl Into<NodeId>,
        id2: impl Into<NodeId>,
        label: EdgeLabel,
    ) -> GraphResult<&Edge> {
        let id1 = id1.into();
        let id2 = id2.into();

        // Validate nodes exist
        if !self.has_node(&id1) {
            return Err(GraphError::MissingNode(id1));
        }
        if !self.has_node(&id2) {
            return Err(GraphError::MissingNode(id2));
        }

        let edge_id = EdgeId::new(self.edges.len() as u64);
        debug!("add_edge {} {} --[{}]-- {}", edge_id, id1, label, id2);

        // Update adjacency lists; a self-loop is listed twice, once per endpoint
        for endpoint in [&id1, &id2] {
            if let Some(node) = self.nodes.get_mut(endpoint) {
                node.adjacency.push(edge_id);
            }
            if let Some(index) = self.label_index.as_mut() {
                trace!("label_index push {} under ({}, {})", edge_id, endpoint, label);
                index
                    .entry((endpoint.clone(), label))
                    .or_default()
                    .push(edge_id);
            }
        }

        self.edges.push(Edge::new(edge_id, id1, id2, label));
        Ok(&self.edges[edge_id.index()])
    }

    /// Set (or overwrite) a node attribute
    pub fn set_node_attribute(
        &mut self,
        id: &NodeId,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> GraphResult<()> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::MissingNode(id.clone()))?;
        let key = key.into();
        debug!("set_node_attribute {}.{}", id, key);
        node.set_attribute(key, value);
        Ok(())
    }

    /// Set (or overwrite) an edge attribute
    ///
    /// The edge is located by scanning `id1`'s adjacency for the first edge
    /// with `label` joining `id1` and `id2` in either orientation. When
    /// duplicate records exist only the earliest is updated.
    pub fn set_edge_attribute(
        &mut self,
        id1: &NodeId,
        id2: &NodeId,
        label: EdgeLabel,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> GraphResult<()> {
        let node = self
            .nodes
            .get(id1)
            .ok_or_else(|| GraphError::MissingNode(id1.clone()))?;

        let edge_id = node
            .adjacency
            .iter()
            .copied()
            .find(|edge_id| {
                let edge = &self.edges[edge_id.index()];
                edge.label == label && edge.connects(id1, id2)
            })
            .ok_or_else(|| GraphError::EdgeNotFound {
                first: id1.clone(),
                second: id2.clone(),
                label,
            })?;

        let key = key.into();
        debug!("set_edge_attribute {}.{}", edge_id, key);
        self.edges[edge_id.index()].set_attribute(key, value);
        Ok(())
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a node by ID, failing with `MissingNode` if absent
    pub fn require_node(&self, id: &NodeId) -> GraphResult<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::MissingNode(id.clone()))
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get an edge record by ID
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Edges of `id` carrying `label`, in adjacency order
    pub fn incident_edges(&self, id: &NodeId, label: EdgeLabel) -> GraphResult<Vec<&Edge>> {
        let node = self.require_node(id)?;

        let edges = match &self.label_index {
            Some(index) => index
                .get(&(id.clone(), label))
                .map(|edge_ids| edge_ids.iter().map(|e| &self.edges[e.index()]).collect())
                .unwrap_or_default(),
            None => node
                .adjacency
                .iter()
                .map(|e| &self.edges[e.index()])
                .filter(|edge| edge.label == label)
                .collect(),
        };
        Ok(edges)
    }

    /// Every edge record with `label` joining `a` and `b`, either orientation
    ///
    /// Fails with `MissingNode` if `a` is absent. An absent `b` just
    /// matches nothing.
    pub fn edges_between(&self, a: &NodeId, b: &NodeId, label: EdgeLabel) -> GraphResult<Vec<&Edge>> {
        Ok(self
            .incident_edges(a, label)?
            .into_iter()
            .filter(|e| e.connects(a, b))
            .collect())
    }

    /// Get all nodes of a type, in insertion order
    pub fn nodes_of_type(&self, node_type: NodeType) -> Vec<&Node> {
        self.type_index
            .get(&node_type)
            .map(|ids| ids.iter().filter_map(|id| self.nodes.get(id)).collect())
            .unwrap_or_default()
    }

    /// Get all nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all edge records, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Get all node ids as a set
    pub fn node_ids(&self) -> NodeSet {
        self.nodes.keys().cloned().collect()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edge records
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            ..Default::default()
        };

        for (node_type, ids) in &self.type_index {
            stats.nodes_by_type.insert(*node_type, ids.len());
        }

        let mut seen: FxHashMap<(NodeId, NodeId, EdgeLabel), usize> = FxHashMap::default();
        for edge in &self.edges {
            *stats.edges_by_label.entry(edge.label).or_default() += 1;

            let (a, b) = &edge.endpoints;
            let key = if a <= b {
                (a.clone(), b.clone(), edge.label)
            } else {
                (b.clone(), a.clone(), edge.label)
            };
            let count = seen.entry(key).or_default();
            if *count > 0 {
                stats.duplicate_edges += 1;
            }
            *count += 1;
        }

        stats
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    #[test]
    fn test_add_and_get_node() {
        let mut store = GraphStore::new();
        let node = store.add_node("e1", NodeType::Event).unwrap();
        assert_eq!(node.id, id("e1"));
        assert_eq!(node.node_type, NodeType::Event);

        assert_eq!(store.node_count(), 1);
        assert!(store.has_node(&id("e1")));
        assert!(store.get_node(&id("e2")).is_none());
    }

    #[test]
    fn test_duplicate_node_id() {
        let mut store = GraphStore::new();
        store.add_node("c1", NodeType::Company).unwrap();

        // Same id, any type
        let result = store.add_node("c1", NodeType::Event);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateId(id("c1")));
        assert_eq!(store.node_count(), 1);
        assert_eq!(store.get_node(&id("c1")).unwrap().node_type, NodeType::Company);
    }

    #[test]
    fn test_text_and_integer_ids_coexist() {
        let mut store = GraphStore::new();
        store.add_node(1, NodeType::People).unwrap();
        store.add_node("1", NodeType::Company).unwrap();
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut store = GraphStore::new();
        store.add_node("c1", NodeType::Company).unwrap();
        store.add_node("e1", NodeType::Event).unwrap();

        let edge_id = store.add_edge("c1", "e1", EdgeLabel::Attends).unwrap().id;

        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.get_node(&id("c1")).unwrap().adjacency, vec![edge_id]);
        assert_eq!(store.get_node(&id("e1")).unwrap().adjacency, vec![edge_id]);

        let edge = store.get_edge(edge_id).unwrap();
        assert_eq!(edge.endpoints, (id("c1"), id("e1")));
        assert_eq!(edge.label, EdgeLabel::Attends);
    }

    #[test]
    fn test_add_edge_missing_node() {
        let mut store = GraphStore::new();
        store.add_node("c1", NodeType::Company).unwrap();

        let result = store.add_edge("c1", "ghost", EdgeLabel::Attends);
        assert_eq!(result.unwrap_err(), GraphError::MissingNode(id("ghost")));

        let result = store.add_edge("ghost", "c1", EdgeLabel::Attends);
        assert_eq!(result.unwrap_err(), GraphError::MissingNode(id("ghost")));

        assert_eq!(store.edge_count(), 0);
        assert!(store.get_node(&id("c1")).unwrap().adjacency.is_empty());
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut store = GraphStore::new();
        store.add_node(1, NodeType::People).unwrap();
        store.add_node("c1", NodeType::Company).unwrap();

        let first = store.add_edge(1, "c1", EdgeLabel::WorksAt).unwrap().id;
        let second = store.add_edge("c1", 1, EdgeLabel::WorksAt).unwrap().id;

        assert_ne!(first, second);
        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.get_node(&NodeId::from(1)).unwrap().degree(), 2);
        assert_eq!(
            store.edges_between(&id("c1"), &NodeId::from(1), EdgeLabel::WorksAt).unwrap().len(),
            2
        );
        assert_eq!(store.statistics().duplicate_edges, 1);
    }

    #[test]
    fn test_edges_between_missing_node() {
        let mut store = GraphStore::new();
        store.add_node("c1", NodeType::Company).unwrap();

        assert_eq!(
            store.edges_between(&id("ghost"), &id("c1"), EdgeLabel::Attends),
            Err(GraphError::MissingNode(id("ghost")))
        );
        assert_eq!(
            store.edges_between(&id("c1"), &id("ghost"), EdgeLabel::Attends),
            Ok(Vec::new())
        );
    }

    #[test]
    fn test_set_node_attribute() {
        let mut store = GraphStore::new();
        store.add_node("e1", NodeType::Event).unwrap();

        store.set_node_attribute(&id("e1"), "country", "USA").unwrap();
        store.set_node_attribute(&id("e1"), "country", "UK").unwrap();

        let node = store.get_node(&id("e1")).unwrap();
        assert_eq!(node.get_attribute("country").unwrap().as_text(), Some("UK"));

        let result = store.set_node_attribute(&id("e9"), "country", "USA");
        assert_eq!(result, Err(GraphError::MissingNode(id("e9"))));
    }

    #[test]
    fn test_set_edge_attribute_either_orientation() {
        let mut store = GraphStore::new();
        store.add_node("c1", NodeType::Company).unwrap();
        store.add_node("e1", NodeType::Event).unwrap();
        let edge_id = store.add_edge("c1", "e1", EdgeLabel::Attends).unwrap().id;

        store
            .set_edge_attribute(&id("c1"), &id("e1"), EdgeLabel::Attends, "role", "Sponsor")
            .unwrap();
        store
            .set_edge_attribute(&id("e1"), &id("c1"), EdgeLabel::Attends, "booth", 12i64)
            .unwrap();

        let edge = store.get_edge(edge_id).unwrap();
        assert_eq!(edge.get_attribute("role").unwrap().as_text(), Some("Sponsor"));
        assert_eq!(edge.get_attribute("booth").unwrap().as_integer(), Some(12));
    }

    #[test]
    fn test_set_edge_attribute_not_found() {
        let mut store = GraphStore::new();
        store.add_node("c1", NodeType::Company).unwrap();
        store.add_node("e1", NodeType::Event).unwrap();
        store.add_node(1, NodeType::People).unwrap();
        store.add_edge("c1", "e1", EdgeLabel::Attends).unwrap();

        // Wrong label
        let result = store.set_edge_attribute(&id("c1"), &id("e1"), EdgeLabel::WorksAt, "k", "v");
        assert_eq!(
            result,
            Err(GraphError::EdgeNotFound {
                first: id("c1"),
                second: id("e1"),
                label: EdgeLabel::WorksAt,
            })
        );

        // No edge between the pair
        let result = store.set_edge_attribute(&NodeId::from(1), &id("c1"), EdgeLabel::WorksAt, "k", "v");
        assert!(matches!(result, Err(GraphError::EdgeNotFound { .. })));

        // Unknown first endpoint
        let result = store.set_edge_attribute(&id("zz"), &id("c1"), EdgeLabel::Attends, "k", "v");
        assert_eq!(result, Err(GraphError::MissingNode(id("zz"))));
    }

    #[test]
    fn test_set_edge_attribute_updates_earliest_duplicate() {
        let mut store = GraphStore::new();
        store.add_node("c1", NodeType::Company).unwrap();
        store.add_node("e1", NodeType::Event).unwrap();
        let first = store.add_edge("c1", "e1", EdgeLabel::Attends).unwrap().id;
        let second = store.add_edge("c1", "e1", EdgeLabel::Attends).unwrap().id;

        store
            .set_edge_attribute(&id("e1"), &id("c1"), EdgeLabel::Attends, "role", "Sponsor")
            .unwrap();

        assert!(store.get_edge(first).unwrap().get_attribute("role").is_some());
        assert!(store.get_edge(second).unwrap().get_attribute("role").is_none());
    }

    #[test]
    fn test_incident_edges_with_and_without_label_index() {
        for indexed in [true, false] {
            let config = GraphConfig {
                index_edges_by_label: indexed,
                ..Default::default()
            };
            let mut store = GraphStore::with_config(config);
            store.add_node("c1", NodeType::Company).unwrap();
            store.add_node("e1", NodeType::Event).unwrap();
            store.add_node("e2", NodeType::Event).unwrap();
            store.add_node(1, NodeType::People).unwrap();

            store.add_edge("c1", "e1", EdgeLabel::Attends).unwrap();
            store.add_edge(1, "c1", EdgeLabel::WorksAt).unwrap();
            store.add_edge("e2", "c1", EdgeLabel::Attends).unwrap();

            let attends: Vec<EdgeId> = store
                .incident_edges(&id("c1"), EdgeLabel::Attends)
                .unwrap()
                .iter()
                .map(|e| e.id)
                .collect();
            assert_eq!(attends, vec![EdgeId::new(0), EdgeId::new(2)]);

            let works_at = store.incident_edges(&id("c1"), EdgeLabel::WorksAt).unwrap();
            assert_eq!(works_at.len(), 1);

            assert!(store.incident_edges(&id("e2"), EdgeLabel::WorksAt).unwrap().is_empty());
            assert_eq!(
                store.incident_edges(&id("none"), EdgeLabel::WorksAt).unwrap_err(),
                GraphError::MissingNode(id("none"))
            );
        }
    }

    #[test]
    fn test_self_loop_listed_twice() {
        let mut store = GraphStore::new();
        store.add_node("c1", NodeType::Company).unwrap();
        store.add_edge("c1", "c1", EdgeLabel::Attends).unwrap();

        assert_eq!(store.get_node(&id("c1")).unwrap().degree(), 2);
        assert_eq!(store.incident_edges(&id("c1"), EdgeLabel::Attends).unwrap().len(), 2);
    }

    #[test]
    fn test_type_index() {
        let mut store = GraphStore::new();
        store.add_node("e1", NodeType::Event).unwrap();
        store.add_node("c1", NodeType::Company).unwrap();
        store.add_node("e2", NodeType::Event).unwrap();

        let events: Vec<&NodeId> = store.nodes_of_type(NodeType::Event).iter().map(|n| &n.id).collect();
        assert_eq!(events, vec![&id("e1"), &id("e2")]);
        assert_eq!(store.nodes_of_type(NodeType::Company).len(), 1);
        assert!(store.nodes_of_type(NodeType::People).is_empty());
    }

    #[test]
    fn test_statistics() {
        let mut store = GraphStore::new();
        store.add_node("e1", NodeType::Event).unwrap();
        store.add_node("c1", NodeType::Company).unwrap();
        store.add_node(1, NodeType::People).unwrap();
        store.add_edge("c1", "e1", EdgeLabel::Attends).unwrap();
        store.add_edge(1, "c1", EdgeLabel::WorksAt).unwrap();

        let stats = store.statistics();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.nodes_by_type.get(&NodeType::Event), Some(&1));
        assert_eq!(stats.edges_by_label.get(&EdgeLabel::WorksAt), Some(&1));
        assert_eq!(stats.duplicate_edges, 0);
    }

    #[test]
    fn test_node_order_is_insertion_order() {
        let mut store = GraphStore::new();
        for name in ["b", "a", "c"] {
            store.add_node(name, NodeType::Event).unwrap();
        }
        let ids: Vec<String> = store.nodes().map(|n| n.id.to_string()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(store.node_ids().len(), 3);
    }
}
