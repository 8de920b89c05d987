//! Adjacency traversal
//!
//! Every edge is listed by both of its endpoints, so scanning a node's
//! adjacency always sees the node itself as one endpoint. Neighbors are the
//! endpoints of the wanted type that are *not* the origin; without that
//! exclusion a node would be its own neighbor whenever its type is the
//! wanted type.

use crate::graph::{EdgeLabel, GraphResult, GraphStore, NodeId, NodeSet, NodeType, Predicate};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct NeighborFilter<'g> {
    store: &'g GraphStore,
}

impl<'g> NeighborFilter<'g> {
    pub fn new(store: &'g GraphStore) -> Self {
        Self { store }
    }

    /// Neighbors of `id` of type `wanted` over `label` edges whose
    /// attributes satisfy `edge_predicate` (any edge when it is empty)
    ///
    /// One entry per accepted edge: duplicate edge records yield duplicate
    /// entries. Fails with `MissingNode` if `id` is absent.
    pub fn neighbors(
        &self,
        id: &NodeId,
        wanted: NodeType,
        label: EdgeLabel,
        edge_predicate: &Predicate,
    ) -> GraphResult<Vec<NodeId>> {
        let mut result = Vec::new();

        for edge in self.store.incident_edges(id, label)? {
            if !edge.matches(label, edge_predicate) {
                continue;
            }
            for endpoint in edge.endpoint_ids() {
                if endpoint == id {
                    continue;
                }
                let is_wanted = self
                    .store
                    .get_node(endpoint)
                    .is_some_and(|node| node.is_type(wanted));
                if is_wanted {
                    result.push(endpoint.clone());
                }
            }
        }

        Ok(result)
    }

    /// Union of `neighbors` over every id, de-duplicated by node id
    ///
    /// Fails on the first absent id; no partial result is returned.
    pub fn neighbors_of_set(
        &self,
        ids: &NodeSet,
        wanted: NodeType,
        label: EdgeLabel,
        edge_predicate: &Predicate,
    ) -> GraphResult<NodeSet> {
        let mut result = NodeSet::default();
        for id in ids {
            result.extend(self.neighbors(id, wanted, label, edge_predicate)?);
        }

        debug!(
            "neighbors of {} nodes -> {} over {} {}: {} found",
            ids.len(),
            wanted,
            label,
            edge_predicate,
            result.len()
        );
        Ok(result)
    }
}
