//! Schema-driven node filtering across all three types
//!
//! Starting from the pivot-type nodes of the universe that satisfy the
//! predicate, each schema walk is followed hop by hop, and every node met on
//! the way joins the result. Expansion is *not* bounded by the universe; the
//! union is intersected with the universe only at the end, so the result is
//! always a subset of it.

use super::attribute::AttributeFilter;
use super::neighbor::NeighborFilter;
use crate::graph::{GraphResult, GraphStore, NodeSet, NodeType, Predicate};
use crate::schema::Schema;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct GlobalNodeFilterer<'g> {
    attributes: AttributeFilter<'g>,
    neighbors: NeighborFilter<'g>,
    schema: Schema,
}

impl<'g> GlobalNodeFilterer<'g> {
    pub fn new(store: &'g GraphStore) -> Self {
        Self {
            attributes: AttributeFilter::new(store),
            neighbors: NeighborFilter::new(store),
            schema: Schema::new(),
        }
    }

    /// Nodes of `universe` matching `pivot`/`predicate`, plus every node of
    /// `universe` reachable from a match along the schema walks of `pivot`
    ///
    /// With an empty predicate every universe id counts as a match (the
    /// attribute filter passes its candidates through untouched).
    pub fn filter(
        &self,
        pivot: NodeType,
        predicate: &Predicate,
        universe: &NodeSet,
    ) -> GraphResult<NodeSet> {
        let base = self
            .attributes
            .filter_by_node_conditions(universe, pivot, predicate)?;

        let mut reached = base.clone();
        let any_edge = Predicate::new();
        for path in self.schema.expansion_paths(pivot) {
            let mut frontier = base.clone();
            for hop in path {
                frontier = self
                    .neighbors
                    .neighbors_of_set(&frontier, hop.node_type, hop.label, &any_edge)?;
                reached.extend(frontier.iter().cloned());
            }
        }

        let result: NodeSet = reached
            .into_iter()
            .filter(|id| universe.contains(id))
            .collect();

        debug!(
            "global node filter {} {}: {} direct, {} in universe of {}",
            pivot,
            predicate,
            base.len(),
            result.len(),
            universe.len()
        );
        Ok(result)
    }
}
