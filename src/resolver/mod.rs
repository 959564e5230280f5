// Copyright (c) 2025 - Cowboy AI, Inc.
//! Name-or-ID Resolver
//!
//! Maps a user-supplied token, which may be either a resource's id or its
//! name, to exactly one canonical id.
//!
//! # Algorithm
//!
//! 1. Query the collection with `fields=id&id=<candidate>`. One match wins.
//! 2. Otherwise query with `fields=id&name=<candidate>`:
//!    - no match → [`ResolverError::NotFound`] (404)
//!    - one match → its id
//!    - several → [`ResolverError::AmbiguousName`]
//!
//! Queries run strictly one after another; the name query is only issued
//! when the id query did not produce a unique match. Nothing is cached: every
//! call issues its own queries.
//!
//! # Example
//!
//! ```rust
//! use resource_resolver::adapters::InMemoryCollection;
//! use resource_resolver::domain::{ResourceRecord, ResourceType};
//! use resource_resolver::resolver::Resolver;
//!
//! # tokio_test::block_on(async {
//! let network = ResourceType::network();
//! let store = InMemoryCollection::new()
//!     .with_record(&network, ResourceRecord::with_id("c2f2").field("name", "private"));
//!
//! let resolver = Resolver::new(store);
//! assert_eq!(resolver.resolve(&network, "private").await.unwrap(), "c2f2");
//! assert_eq!(resolver.resolve(&network, "c2f2").await.unwrap(), "c2f2");
//! assert!(resolver.resolve(&network, "public").await.unwrap_err().is_not_found());
//! # });
//! ```

pub mod lookup;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::collection::CollectionQuery;
use crate::domain::{ResourceId, ResourceType};
use crate::errors::{ResolverError, ResolverResult, TransportError};

pub use lookup::{classify, LookupPhase, MatchOutcome};

/// When to run the id-filter query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdLookupPolicy {
    /// Always query by id first, whatever the candidate looks like
    #[default]
    Always,

    /// Query by id only when the candidate parses as a UUID
    UuidOnly,
}

/// Resolver tuning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    #[serde(default)]
    pub id_lookup: IdLookupPolicy,
}

/// Resolves names or ids against an injected [`CollectionQuery`]
#[derive(Debug)]
pub struct Resolver<C> {
    collection: C,
    settings: ResolverSettings,
}

impl<C: CollectionQuery> Resolver<C> {
    pub fn new(collection: C) -> Self {
        Self::with_settings(collection, ResolverSettings::default())
    }

    pub fn with_settings(collection: C, settings: ResolverSettings) -> Self {
        Self {
            collection,
            settings,
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Resolve `candidate` to the id of exactly one `resource`
    pub async fn resolve(
        &self,
        resource: &ResourceType,
        candidate: &str,
    ) -> ResolverResult<ResourceId> {
        let mut phase = self.initial_phase(candidate);

        while let Some(filters) = phase.filters(candidate) {
            debug!(
                "Resolving {} '{}': {:?} with {:?}",
                resource,
                candidate,
                phase,
                filters.filters()
            );

            let matches = self.collection.query(resource, &filters).await?;
            let outcome = classify(&matches)
                .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

            if let (LookupPhase::IdLookup, MatchOutcome::Multiple(count)) = (&phase, &outcome) {
                warn!(
                    "{} {} entries share id '{}', falling back to name lookup",
                    count, resource, candidate
                );
            }

            phase = phase.advance(outcome);
        }

        match phase {
            LookupPhase::Found(id) => {
                debug!("Resolved {} '{}' to {}", resource, candidate, id);
                Ok(id)
            }
            LookupPhase::NotFound => Err(ResolverError::NotFound {
                resource: resource.to_string(),
                candidate: candidate.to_string(),
            }),
            LookupPhase::Ambiguous(count) => Err(ResolverError::AmbiguousName {
                resource: resource.to_string(),
                candidate: candidate.to_string(),
                count,
            }),
            LookupPhase::IdLookup | LookupPhase::NameLookup => {
                unreachable!("lookup loop exits only on terminal phases")
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but validates a raw resource type key
    pub async fn resolve_str(
        &self,
        resource: &str,
        candidate: &str,
    ) -> ResolverResult<ResourceId> {
        let resource = ResourceType::new(resource)?;
        self.resolve(&resource, candidate).await
    }

    /// Resolve several candidates in order, stopping at the first failure
    pub async fn resolve_all<I, S>(
        &self,
        resource: &ResourceType,
        candidates: I,
    ) -> ResolverResult<Vec<ResourceId>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for candidate in candidates {
            resolved.push(self.resolve(resource, candidate.as_ref()).await?);
        }
        Ok(resolved)
    }

    fn initial_phase(&self, candidate: &str) -> LookupPhase {
        match self.settings.id_lookup {
            IdLookupPolicy::Always => LookupPhase::IdLookup,
            IdLookupPolicy::UuidOnly if Uuid::parse_str(candidate).is_ok() => {
                LookupPhase::IdLookup
            }
            IdLookupPolicy::UuidOnly => {
                debug!("'{}' is not a UUID, skipping id lookup", candidate);
                LookupPhase::NameLookup
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCollection;
    use crate::domain::ResourceRecord;

    const NET_ID: &str = "c2f2a2b6-9f0e-4d8e-9a61-3f7d4c8b1e20";

    fn resolver() -> Resolver<InMemoryCollection> {
        let network = ResourceType::network();
        Resolver::new(
            InMemoryCollection::new()
                .with_record(&network, ResourceRecord::with_id(NET_ID).field("name", "private")),
        )
    }

    #[tokio::test]
    async fn test_resolve_by_id_issues_one_query() {
        let resolver = resolver();
        let id = resolver.resolve(&ResourceType::network(), NET_ID).await.unwrap();

        assert_eq!(id, NET_ID);
        assert_eq!(resolver.collection().query_count(), 1);
    }

    #[tokio::test]
    async fn test_resolve_by_name_issues_two_queries() {
        let resolver = resolver();
        let id = resolver.resolve(&ResourceType::network(), "private").await.unwrap();

        assert_eq!(id, NET_ID);
        assert_eq!(resolver.collection().query_count(), 2);
    }

    #[tokio::test]
    async fn test_resolve_str_rejects_bad_type() {
        let err = resolver().resolve_str("Net Work", "private").await.unwrap_err();
        assert!(matches!(err, ResolverError::InvalidResourceType(_)));
    }

    #[tokio::test]
    async fn test_uuid_only_skips_id_query_for_names() {
        let network = ResourceType::network();
        let store = InMemoryCollection::new()
            .with_record(&network, ResourceRecord::with_id(NET_ID).field("name", "private"));
        let resolver = Resolver::with_settings(
            store,
            ResolverSettings {
                id_lookup: IdLookupPolicy::UuidOnly,
            },
        );

        assert_eq!(resolver.resolve(&network, "private").await.unwrap(), NET_ID);
        assert_eq!(resolver.collection().query_count(), 1);

        assert_eq!(resolver.resolve(&network, NET_ID).await.unwrap(), NET_ID);
        assert_eq!(resolver.collection().query_count(), 2);
    }

    #[test]
    fn test_settings_deserialize() {
        let settings: ResolverSettings =
            serde_json::from_str(r#"{"id_lookup": "uuid_only"}"#).unwrap();
        assert_eq!(settings.id_lookup, IdLookupPolicy::UuidOnly);

        let settings: ResolverSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ResolverSettings::default());
    }
}
