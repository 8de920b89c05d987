//! Set filtering over the graph store
//!
//! - `AttributeFilter`: equality predicates over node attributes
//! - `NeighborFilter`: one-hop traversal along labeled edges
//! - `GlobalNodeFilterer`: pivot-type matches plus schema-reachable nodes,
//!   bounded by a universe
//! - `GlobalEdgeFilterer`: edge-anchored matches plus a closure over the
//!   remaining type
//!
//! Filterers borrow the store immutably and never mutate it. Each call runs
//! to completion; any error aborts the whole call with no partial result.

pub mod attribute;
pub mod global_edge;
pub mod global_node;
pub mod neighbor;

pub use attribute::AttributeFilter;
pub use global_edge::GlobalEdgeFilterer;
pub use global_node::GlobalNodeFilterer;
pub use neighbor::NeighborFilter;
