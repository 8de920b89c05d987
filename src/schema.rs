//! The fixed relation schema
//!
//! Two relations connect the three node types:
//!
//! ```text
//! people --works_at-- company --attends-- event
//! ```
//!
//! Both global filterers are driven by lookups into this table instead of
//! per-type branching. Company takes part in every relation; it is the hub
//! through which people and events reach each other.

use crate::graph::{EdgeLabel, GraphError, GraphResult, NodeType};

/// An unordered pair of node types joined by a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub a: NodeType,
    pub b: NodeType,
    pub label: EdgeLabel,
}

impl Relation {
    pub const fn new(a: NodeType, b: NodeType, label: EdgeLabel) -> Self {
        Self { a, b, label }
    }

    pub fn involves(&self, node_type: NodeType) -> bool {
        self.a == node_type || self.b == node_type
    }

    /// The type on the other side of `node_type`, if it takes part
    pub fn partner(&self, node_type: NodeType) -> Option<NodeType> {
        if self.a == node_type {
            Some(self.b)
        } else if self.b == node_type {
            Some(self.a)
        } else {
            None
        }
    }

    pub fn joins(&self, x: NodeType, y: NodeType) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

const RELATIONS: [Relation; 2] = [
    Relation::new(NodeType::People, NodeType::Company, EdgeLabel::WorksAt),
    Relation::new(NodeType::Company, NodeType::Event, EdgeLabel::Attends),
];

/// One hop of a schema walk: move to nodes of `node_type` over `label` edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub node_type: NodeType,
    pub label: EdgeLabel,
}

/// Lookup table over the fixed relations
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    relations: &'static [Relation],
}

impl Default for Schema {
    fn default() -> Self {
        Self { relations: &RELATIONS }
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relations(&self) -> &[Relation] {
        self.relations
    }

    /// Label joining two types, if the schema relates them
    pub fn relation_between(&self, x: NodeType, y: NodeType) -> Option<EdgeLabel> {
        self.relations
            .iter()
            .find(|r| r.joins(x, y))
            .map(|r| r.label)
    }

    /// Types related to `node_type`, in table order
    pub fn partners(&self, node_type: NodeType) -> Vec<Hop> {
        self.relations
            .iter()
            .filter_map(|r| {
                r.partner(node_type).map(|partner| Hop {
                    node_type: partner,
                    label: r.label,
                })
            })
            .collect()
    }

    /// The type taking part in every relation (company)
    pub fn hub(&self) -> Option<NodeType> {
        NodeType::ALL
            .into_iter()
            .find(|t| self.relations.iter().all(|r| r.involves(*t)))
    }

    /// Maximal simple walks through the type graph starting at `pivot`
    ///
    /// - event: company, then people
    /// - people: company, then event
    /// - company: people; and separately event
    ///
    /// Each walk is applied in sequence; walks never return to a type they
    /// have already visited, so the pivot type is never re-entered.
    pub fn expansion_paths(&self, pivot: NodeType) -> Vec<Vec<Hop>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        self.walk(pivot, &mut vec![pivot], &mut current, &mut paths);
        paths
    }

    fn walk(
        &self,
        at: NodeType,
        visited: &mut Vec<NodeType>,
        current: &mut Vec<Hop>,
        paths: &mut Vec<Vec<Hop>>,
    ) {
        let next: Vec<Hop> = self
            .partners(at)
            .into_iter()
            .filter(|hop| !visited.contains(&hop.node_type))
            .collect();

        if next.is_empty() {
            if !current.is_empty() {
                paths.push(current.clone());
            }
            return;
        }

        for hop in next {
            visited.push(hop.node_type);
            current.push(hop);
            self.walk(hop.node_type, visited, current, paths);
            current.pop();
            visited.pop();
        }
    }

    /// The type closing an edge filter between `source` and `target`, and
    /// the label reaching it
    ///
    /// The hub must be one of the two types, since the schema has no direct
    /// relation that bypasses it. The remaining type is the first of the
    /// hub's partners, in table order, that is neither `source` nor `target`.
    pub fn remaining(&self, source: NodeType, target: NodeType) -> GraphResult<Hop> {
        let unsupported = || GraphError::UnsupportedRelation {
            source_type: source,
            target_type: target,
        };

        let hub = self.hub().ok_or_else(unsupported)?;
        if source != hub && target != hub {
            return Err(unsupported());
        }

        self.partners(hub)
            .into_iter()
            .find(|hop| hop.node_type != source && hop.node_type != target)
            .ok_or_else(unsupported)
    }
}
