//! Schema-driven filtering anchored on an edge
//!
//! Nodes of the source and target types that have a matching edge to some
//! universe member are kept when they belong to the universe themselves.
//! Those matches are then closed over the remaining type by one more hop,
//! and that closure is not bounded by the universe.

use super::neighbor::NeighborFilter;
use crate::graph::{EdgeLabel, GraphResult, GraphStore, NodeSet, NodeType, Predicate};
use crate::schema::Schema;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct GlobalEdgeFilterer<'g> {
    neighbors: NeighborFilter<'g>,
    schema: Schema,
}

impl<'g> GlobalEdgeFilterer<'g> {
    pub fn new(store: &'g GraphStore) -> Self {
        Self {
            neighbors: NeighborFilter::new(store),
            schema: Schema::new(),
        }
    }

    /// Filter `universe` on `label` edges satisfying `edge_predicate`
    ///
    /// Fails with `UnsupportedRelation` unless company is one of
    /// `source_type` and `target_type`. The label itself is not checked
    /// against the type pair.
    pub fn filter(
        &self,
        source_type: NodeType,
        target_type: NodeType,
        label: EdgeLabel,
        edge_predicate: &Predicate,
        universe: &NodeSet,
    ) -> GraphResult<NodeSet> {
        let remaining = self.schema.remaining(source_type, target_type)?;

        let mut matched = self.matching_in_universe(source_type, label, edge_predicate, universe)?;
        let targets = self.matching_in_universe(target_type, label, edge_predicate, universe)?;
        matched.extend(targets);

        let closure = self.neighbors.neighbors_of_set(
            &matched,
            remaining.node_type,
            remaining.label,
            &Predicate::new(),
        )?;

        debug!(
            "global edge filter {} --[{} {}]-- {}: {} matched, {} {} reached",
            source_type,
            label,
            edge_predicate,
            target_type,
            matched.len(),
            closure.len(),
            remaining.node_type
        );

        let mut result = matched;
        result.extend(closure);
        Ok(result)
    }

    /// Nodes of `node_type` with a matching edge into the universe, kept
    /// only if they are universe members
    fn matching_in_universe(
        &self,
        node_type: NodeType,
        label: EdgeLabel,
        edge_predicate: &Predicate,
        universe: &NodeSet,
    ) -> GraphResult<NodeSet> {
        let found = self
            .neighbors
            .neighbors_of_set(universe, node_type, label, edge_predicate)?;
        Ok(found.into_iter().filter(|id| universe.contains(id)).collect())
    }
}
