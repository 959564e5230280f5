// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Lookup Order and Outcomes
//!
//! Collections are generated from a tiny name alphabet so that duplicate
//! names (and, occasionally, duplicate ids) are common. Each resolution is
//! compared against a direct model of the algorithm, including the exact
//! sequence of filter keys sent to the collection.

use proptest::prelude::*;
use std::sync::Arc;

use resource_resolver::adapters::InMemoryCollection;
use resource_resolver::domain::{ResourceRecord, ResourceType};
use resource_resolver::{Resolver, ResolverError};

// ============================================================================
// Model
// ============================================================================

/// Expected outcome of one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
enum Expected {
    Found(String),
    NotFound,
    Ambiguous(usize),
}

/// Direct model: returns the expected outcome and filter keys issued
fn model(entries: &[(String, String)], candidate: &str) -> (Expected, Vec<&'static str>) {
    let by_id: Vec<_> = entries.iter().filter(|(id, _)| id == candidate).collect();
    if by_id.len() == 1 {
        return (Expected::Found(by_id[0].0.clone()), vec!["id"]);
    }

    let by_name: Vec<_> = entries.iter().filter(|(_, name)| name == candidate).collect();
    let expected = match by_name.len() {
        0 => Expected::NotFound,
        1 => Expected::Found(by_name[0].0.clone()),
        n => Expected::Ambiguous(n),
    };
    (expected, vec!["id", "name"])
}

fn observe(result: Result<resource_resolver::ResourceId, ResolverError>) -> Expected {
    match result {
        Ok(id) => Expected::Found(id.into_inner()),
        Err(ResolverError::NotFound { .. }) => Expected::NotFound,
        Err(ResolverError::AmbiguousName { count, .. }) => Expected::Ambiguous(count),
        Err(other) => panic!("unexpected error: {:?}", other),
    }
}

fn store_from(entries: &[(String, String)]) -> Arc<InMemoryCollection> {
    let network = ResourceType::network();
    let store = InMemoryCollection::new();
    for (id, name) in entries {
        store.insert(&network, ResourceRecord::with_id(id.clone()).field("name", name.clone()));
    }
    Arc::new(store)
}

fn filter_keys(store: &InMemoryCollection) -> Vec<String> {
    store
        .queries()
        .iter()
        .filter_map(|q| q.filter_key().map(str::to_string))
        .collect()
}

// ============================================================================
// Strategies
// ============================================================================

/// Entries with ids `id-0..id-5` and names drawn from a small set; a name may
/// also equal some id to exercise the id-then-name fallback.
fn arb_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (0u8..6, prop_oneof![Just("alpha"), Just("beta"), Just("gamma"), Just("id-1"), Just("id-2")]),
        0..8,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(n, name)| (format!("id-{}", n), name.to_string()))
            .collect::<Vec<_>>()
    })
}

fn arb_candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alpha".to_string()),
        Just("beta".to_string()),
        Just("delta".to_string()),
        (0u8..7).prop_map(|n| format!("id-{}", n)),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Outcome and query order always match the model
    #[test]
    fn prop_resolution_matches_model(entries in arb_entries(), candidate in arb_candidate()) {
        let store = store_from(&entries);
        let resolver = Resolver::new(Arc::clone(&store));

        let result = tokio_test::block_on(resolver.resolve(&ResourceType::network(), &candidate));
        let (expected, keys) = model(&entries, &candidate);

        prop_assert_eq!(observe(result), expected);
        prop_assert_eq!(filter_keys(&store), keys);
    }

    /// At most two queries per call, and the name query never comes first
    #[test]
    fn prop_id_query_always_first(entries in arb_entries(), candidate in arb_candidate()) {
        let store = store_from(&entries);
        let resolver = Resolver::new(Arc::clone(&store));

        let _ = tokio_test::block_on(resolver.resolve(&ResourceType::network(), &candidate));
        let keys = filter_keys(&store);

        prop_assert!(!keys.is_empty() && keys.len() <= 2);
        prop_assert_eq!(keys[0].as_str(), "id");
    }

    /// Repeating a call repeats its queries and its outcome
    #[test]
    fn prop_no_caching(entries in arb_entries(), candidate in arb_candidate()) {
        let store = store_from(&entries);
        let resolver = Resolver::new(Arc::clone(&store));
        let network = ResourceType::network();

        let first = observe(tokio_test::block_on(resolver.resolve(&network, &candidate)));
        let after_first = store.query_count();
        let second = observe(tokio_test::block_on(resolver.resolve(&network, &candidate)));

        prop_assert_eq!(first, second);
        prop_assert_eq!(store.query_count(), after_first * 2);
    }
}
