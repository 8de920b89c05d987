//! Hetgraph
//!
//! An in-memory heterogeneous graph store with schema-aware, multi-hop set
//! filtering over people, companies and events.
//!
//! # Architecture
//!
//! - `graph`: nodes, edges, attribute values and the append-only store
//! - `schema`: the fixed relation table
//!   (people --works_at-- company --attends-- event)
//! - `filter`: attribute, neighbor, global node and global edge filtering
//! - `config`: store tuning, loadable from YAML
//!
//! The store performs no I/O and no internal locking. Filtering borrows the
//! store immutably, so any number of filter calls may run concurrently once
//! ingestion is done.
//!
//! ## Example Usage
//!
//! ```rust
//! use hetgraph::{EdgeLabel, GlobalNodeFilterer, GraphStore, NodeId, NodeSet, NodeType, Predicate};
//!
//! let mut store = GraphStore::new();
//! store.add_node("e1", NodeType::Event).unwrap();
//! store.add_node("e2", NodeType::Event).unwrap();
//! store.add_node("c1", NodeType::Company).unwrap();
//! store.set_node_attribute(&"e1".into(), "country", "USA").unwrap();
//! store.set_node_attribute(&"e2".into(), "country", "UK").unwrap();
//! store.add_edge("c1", "e1", EdgeLabel::Attends).unwrap();
//!
//! let universe: NodeSet = ["e1", "e2", "c1"].into_iter().map(NodeId::from).collect();
//! let result = GlobalNodeFilterer::new(&store)
//!     .filter(NodeType::Event, &Predicate::new().with("country", "USA"), &universe)
//!     .unwrap();
//!
//! assert_eq!(result.len(), 2);
//! assert!(result.contains(&NodeId::from("e1")));
//! assert!(result.contains(&NodeId::from("c1")));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod filter;
pub mod graph;
pub mod schema;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, GraphConfig};

pub use filter::{AttributeFilter, GlobalEdgeFilterer, GlobalNodeFilterer, NeighborFilter};

pub use graph::{
    Edge, EdgeId, EdgeLabel, GraphError, GraphResult, GraphStatistics, GraphStore, Node, NodeId,
    NodeSet, NodeType, Predicate, PropertyMap, PropertyValue,
};

pub use schema::{Hop, Relation, Schema};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
