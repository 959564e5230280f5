// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory collection adapter
//!
//! Evaluates the same equality filters the REST endpoint would, over records
//! held in process. Every query it serves is appended to a log so callers can
//! assert how many queries a resolution issued and in what order.
//!
//! Failures can be queued with [`InMemoryCollection::fail_next`]; the next
//! query pops the error and returns it instead of consulting the records.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::collection::CollectionQuery;
use crate::domain::{QueryFilters, ResourceRecord, ResourceType};
use crate::errors::TransportError;

/// A query served by [`InMemoryCollection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub resource: ResourceType,
    pub filters: QueryFilters,
}

impl RecordedQuery {
    /// Name of the filtered attribute (`id` or `name` for resolver queries)
    pub fn filter_key(&self) -> Option<&str> {
        self.filters.filters().first().map(|(k, _)| k.as_str())
    }
}

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<ResourceType, Vec<ResourceRecord>>,
    log: Vec<RecordedQuery>,
    failures: VecDeque<TransportError>,
}

/// Collection store backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryCollection {
    inner: Mutex<Inner>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_record(self, resource: &ResourceType, record: ResourceRecord) -> Self {
        self.insert(resource, record);
        self
    }

    pub fn insert(&self, resource: &ResourceType, record: ResourceRecord) {
        self.lock()
            .collections
            .entry(resource.clone())
            .or_default()
            .push(record);
    }

    /// Queue a failure for the next query
    pub fn fail_next(&self, error: TransportError) {
        self.lock().failures.push_back(error);
    }

    /// Queries served so far, oldest first
    pub fn queries(&self) -> Vec<RecordedQuery> {
        self.lock().log.clone()
    }

    pub fn query_count(&self) -> usize {
        self.lock().log.len()
    }

    pub fn clear_log(&self) {
        self.lock().log.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave Inner half-updated.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CollectionQuery for InMemoryCollection {
    async fn query(
        &self,
        resource: &ResourceType,
        filters: &QueryFilters,
    ) -> Result<Vec<ResourceRecord>, TransportError> {
        let mut inner = self.lock();
        inner.log.push(RecordedQuery {
            resource: resource.clone(),
            filters: filters.clone(),
        });

        if let Some(err) = inner.failures.pop_front() {
            debug!("Returning queued failure for {}: {}", resource, err);
            return Err(err);
        }

        let matches: Vec<ResourceRecord> = inner
            .collections
            .get(resource)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| filters.filters().iter().all(|(k, v)| r.matches(k, v)))
                    .map(|r| r.project(filters.fields()))
                    .collect()
            })
            .unwrap_or_default();

        debug!(
            "In-memory query on {} with {:?} matched {} record(s)",
            resource.collection_path(),
            filters.filters(),
            matches.len()
        );
        Ok(matches)
    }
}
