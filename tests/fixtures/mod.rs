// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for resource-resolver
//!
//! Deterministic collections for resolver tests. All ids are fixed constants
//! so failures are reproducible.

#![allow(dead_code)]

use std::sync::Arc;

use resource_resolver::adapters::InMemoryCollection;
use resource_resolver::domain::{ResourceRecord, ResourceType};
use resource_resolver::Resolver;

// Fixed test UUIDs
pub const NETWORK_ID_1: &str = "01934f4a-0001-7000-8000-000000000001";
pub const NETWORK_ID_2: &str = "01934f4a-0002-7000-8000-000000000002";
pub const NETWORK_ID_3: &str = "01934f4a-0003-7000-8000-000000000003";
pub const SUBNET_ID_1: &str = "01934f4a-1000-7000-8000-000000001000";

/// Network with a given id and name
pub fn network(id: &str, name: &str) -> ResourceRecord {
    ResourceRecord::with_id(id)
        .field("name", name)
        .field("admin_state_up", true)
        .field("status", "ACTIVE")
}

/// Collection with:
/// - `private` (unique name)
/// - two networks named `shared`
/// - a subnet named `private` (must never leak into network lookups)
pub fn populated_store() -> Arc<InMemoryCollection> {
    let networks = ResourceType::network();
    let subnets = ResourceType::subnet();

    Arc::new(
        InMemoryCollection::new()
            .with_record(&networks, network(NETWORK_ID_1, "private"))
            .with_record(&networks, network(NETWORK_ID_2, "shared"))
            .with_record(&networks, network(NETWORK_ID_3, "shared"))
            .with_record(
                &subnets,
                ResourceRecord::with_id(SUBNET_ID_1).field("name", "private"),
            ),
    )
}

/// Resolver sharing the store, so tests can inspect its query log
pub fn resolver_over(
    store: &Arc<InMemoryCollection>,
) -> Resolver<Arc<InMemoryCollection>> {
    Resolver::new(Arc::clone(store))
}

/// Filter keys of the queries the store has served, in order
pub fn filter_keys(store: &InMemoryCollection) -> Vec<String> {
    store
        .queries()
        .iter()
        .filter_map(|q| q.filter_key().map(str::to_string))
        .collect()
}
