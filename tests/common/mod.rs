//! Shared fixture: a conference network of five events, five companies and
//! twenty people.
//!
//! Event and company ids are URLs, people ids are integers 1..=20. Employee
//! details live on the `works_at` edges, attendance roles on `attends` edges.

#![allow(dead_code)]

use chrono::NaiveDate;
use hetgraph::{EdgeLabel, GraphConfig, GraphStore, NodeId, NodeSet, NodeType};

pub const EVENTS: [(&str, &str, &str, &str, &str, &str); 5] = [
    ("event1.com", "Tech Summit 2024", "2024-10-15", "San Francisco", "USA", "Technology"),
    ("event2.com", "Green Energy Expo", "2024-11-22", "Berlin", "Germany", "Energy"),
    ("event3.com", "Global Finance Forum", "2024-09-05", "New York", "USA", "Finance"),
    ("event4.com", "AI Revolution Conference", "2024-12-01", "Tokyo", "Japan", "Technology"),
    ("event5.com", "Healthcare Innovation Summit", "2024-08-18", "London", "UK", "Healthcare"),
];

pub const COMPANIES: [(&str, &str, &str, &str, &str); 5] = [
    ("techco.com", "TechCo", "Technology", "$500M", "USA"),
    ("greenergy.com", "GreenErgy", "Energy", "$200M", "Germany"),
    ("megabank.com", "MegaBank", "Finance", "$2B", "USA"),
    ("aiinnovate.com", "AI Innovate", "Technology", "$100M", "Japan"),
    ("healthtech.com", "HealthTech", "Healthcare", "$300M", "UK"),
];

pub const ATTENDANCE: [(&str, &str, &str); 7] = [
    ("techco.com", "event1.com", "Sponsor"),
    ("aiinnovate.com", "event1.com", "Attendee"),
    ("greenergy.com", "event2.com", "Exhibitor"),
    ("megabank.com", "event3.com", "Sponsor"),
    ("aiinnovate.com", "event4.com", "Keynote Speaker"),
    ("healthtech.com", "event5.com", "Sponsor"),
    ("techco.com", "event5.com", "Attendee"),
];

const FIRST_NAMES: [&str; 20] = [
    "John", "Emma", "Michael", "Sophia", "Lars", "Greta", "Hans", "Ingrid", "David", "Sarah",
    "Robert", "Jennifer", "Takashi", "Yuki", "Hiroshi", "Aiko", "James", "Elizabeth", "William",
    "Olivia",
];

const DEPARTMENTS: [&str; 5] = ["Engineering", "Marketing", "Sales", "HR", "Operations"];

pub fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

pub fn person(n: i64) -> NodeId {
    NodeId::from(n)
}

pub fn set_of(ids: impl IntoIterator<Item = NodeId>) -> NodeSet {
    ids.into_iter().collect()
}

/// Company of person `n` (four people per company, in `COMPANIES` order)
pub fn employer(n: i64) -> &'static str {
    COMPANIES[((n - 1) / 4) as usize].0
}

pub fn department(n: i64) -> &'static str {
    DEPARTMENTS[((n - 1) % 5) as usize]
}

pub fn sample_network() -> GraphStore {
    sample_network_with(GraphConfig::default())
}

pub fn sample_network_with(config: GraphConfig) -> GraphStore {
    let mut store = GraphStore::with_config(config);

    for (url, name, start, city, country, industry) in EVENTS {
        let event = id(url);
        store.add_node(url, NodeType::Event).unwrap();
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        store.set_node_attribute(&event, "event_name", name).unwrap();
        store.set_node_attribute(&event, "event_start_date", start).unwrap();
        store.set_node_attribute(&event, "event_city", city).unwrap();
        store.set_node_attribute(&event, "event_country", country).unwrap();
        store.set_node_attribute(&event, "event_industry", industry).unwrap();
    }

    for (url, name, industry, revenue, country) in COMPANIES {
        let company = id(url);
        store.add_node(url, NodeType::Company).unwrap();
        store.set_node_attribute(&company, "company_name", name).unwrap();
        store.set_node_attribute(&company, "company_industry", industry).unwrap();
        store.set_node_attribute(&company, "company_revenue", revenue).unwrap();
        store.set_node_attribute(&company, "company_country", country).unwrap();
    }

    for (company, event, role) in ATTENDANCE {
        store.add_edge(company, event, EdgeLabel::Attends).unwrap();
        store
            .set_edge_attribute(&id(company), &id(event), EdgeLabel::Attends, "company_relation_to_event", role)
            .unwrap();
    }

    for n in 1..=20i64 {
        let company = employer(n);
        let first_name = FIRST_NAMES[(n - 1) as usize];
        store.add_node(n, NodeType::People).unwrap();
        store.add_edge(n, company, EdgeLabel::WorksAt).unwrap();
        for (key, value) in [("person_first_name", first_name), ("person_department", department(n))] {
            store
                .set_edge_attribute(&person(n), &id(company), EdgeLabel::WorksAt, key, value)
                .unwrap();
        }
    }

    store
}
