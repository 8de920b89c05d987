//! Sample network demo
//!
//! Builds a small conference network (events, the companies attending them,
//! the people working at those companies) and runs two chained filters.
//! The network is the same fixture the integration tests use.
//!
//! Run with: cargo run --example sample_network
//! Set RUST_LOG=debug to see each filter step.

#[path = "../tests/common/mod.rs"]
mod common;

use hetgraph::{
    EdgeLabel, GlobalEdgeFilterer, GlobalNodeFilterer, GraphStore, NodeSet, NodeType, Predicate,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Hetgraph v{}", hetgraph::version());
    println!("==========================================");

    let store = common::sample_network();
    let stats = store.statistics();
    info!("Loaded {} nodes and {} edges", stats.node_count, stats.edge_count);

    let everything = store.node_ids();

    // Demo 1: node filtering, narrowed twice
    let node_filter = GlobalNodeFilterer::new(&store);
    let usa_events = node_filter.filter(
        NodeType::Event,
        &Predicate::new().with("event_country", "USA"),
        &everything,
    )?;
    print_nodes(&store, "Events in USA, with their companies and staff", &usa_events);

    let techco = node_filter.filter(
        NodeType::Company,
        &Predicate::new().with("company_name", "TechCo"),
        &usa_events,
    )?;
    print_nodes(&store, "... of which TechCo", &techco);

    // Demo 2: edge filtering, narrowed twice
    let edge_filter = GlobalEdgeFilterer::new(&store);
    let sponsors = edge_filter.filter(
        NodeType::Company,
        NodeType::Event,
        EdgeLabel::Attends,
        &Predicate::new().with("company_relation_to_event", "Sponsor"),
        &everything,
    )?;
    print_nodes(&store, "Sponsoring companies, their events and staff", &sponsors);

    let engineers = edge_filter.filter(
        NodeType::People,
        NodeType::Company,
        EdgeLabel::WorksAt,
        &Predicate::new().with("person_department", "Engineering"),
        &sponsors,
    )?;
    print_nodes(&store, "... of which engineering staff", &engineers);

    Ok(())
}

fn print_nodes(store: &GraphStore, title: &str, ids: &NodeSet) {
    println!("\n=== {} ({} nodes) ===", title, ids.len());
    for id in ids {
        if let Some(node) = store.get_node(id) {
            let mut attributes: Vec<String> = node
                .attributes
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            attributes.sort();
            println!("  {:<8} {:<16} {{{}}}", node.node_type.as_str(), node.id.to_string(), attributes.join(", "));
        }
    }
}
