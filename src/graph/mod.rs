//! Core graph store implementation
//!
//! This module implements the heterogeneous graph data model:
//! - Nodes of three fixed types, with caller-provided ids and attributes
//! - Undirected labeled edges with attributes, listed by both endpoints
//! - Multiple edge records between the same nodes
//! - In-memory, append-only storage with a type index and an optional
//!   per-node label index

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use property::{Predicate, PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore};
pub use types::{EdgeId, EdgeLabel, NodeId, NodeSet, NodeType};
