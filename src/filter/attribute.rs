//! Attribute predicate evaluation over a candidate set

use crate::graph::{GraphResult, GraphStore, NodeSet, NodeType, Predicate};
use tracing::debug;

/// Keeps the candidates of one type whose attributes satisfy a predicate
#[derive(Debug, Clone, Copy)]
pub struct AttributeFilter<'g> {
    store: &'g GraphStore,
}

impl<'g> AttributeFilter<'g> {
    pub fn new(store: &'g GraphStore) -> Self {
        Self { store }
    }

    /// Filter `candidates` down to nodes of `node_type` matching `predicate`
    ///
    /// An empty predicate returns the candidates unchanged: no type check
    /// and no existence check is made. Otherwise every candidate must exist
    /// in the store, or the call fails with `MissingNode`.
    pub fn filter_by_node_conditions(
        &self,
        candidates: &NodeSet,
        node_type: NodeType,
        predicate: &Predicate,
    ) -> GraphResult<NodeSet> {
        if predicate.is_empty() {
            return Ok(candidates.clone());
        }

        let mut result = NodeSet::default();
        for id in candidates {
            let node = self.store.require_node(id)?;
            if node.is_type(node_type) && predicate.matches(&node.attributes) {
                result.insert(id.clone());
            }
        }

        debug!(
            "attribute filter {} {}: {} of {} candidates",
            node_type,
            predicate,
            result.len(),
            candidates.len()
        );
        Ok(result)
    }
}
