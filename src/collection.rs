// Copyright (c) 2025 - Cowboy AI, Inc.
//! Collection Query - the resolver's view of a REST collection
//!
//! The resolver only needs one capability from the outside world: list the
//! entries of a collection that match a set of equality filters.
//!
//! ```text
//! Resolver ──query(type, filters)──> CollectionQuery ──GET──> /networks?fields=id&name=x
//!     ▲                                     │
//!     └──────── Vec<ResourceRecord> ◄───────┘
//! ```
//!
//! Implementations are injected into [`crate::resolver::Resolver::new`], so a
//! test substitutes an in-memory collection for the HTTP client without
//! touching global state.
//!
//! # Example Implementation
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_resolver::collection::CollectionQuery;
//! use resource_resolver::domain::{QueryFilters, ResourceRecord, ResourceType};
//! use resource_resolver::errors::TransportError;
//!
//! struct EmptyCollection;
//!
//! #[async_trait]
//! impl CollectionQuery for EmptyCollection {
//!     async fn query(
//!         &self,
//!         _resource: &ResourceType,
//!         _filters: &QueryFilters,
//!     ) -> Result<Vec<ResourceRecord>, TransportError> {
//!         Ok(Vec::new())
//!     }
//! }
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{QueryFilters, ResourceRecord, ResourceType};
use crate::errors::TransportError;

/// Read-only query access to resource collections
///
/// Implementations must:
/// - AND all filters together
/// - return entries in the order the backend produced them
/// - report every failure as a [`TransportError`]; an empty result is `Ok`
#[async_trait]
pub trait CollectionQuery: Send + Sync {
    /// List entries of the `resource` collection matching `filters`
    async fn query(
        &self,
        resource: &ResourceType,
        filters: &QueryFilters,
    ) -> Result<Vec<ResourceRecord>, TransportError>;
}

#[async_trait]
impl<T: CollectionQuery + ?Sized> CollectionQuery for Arc<T> {
    async fn query(
        &self,
        resource: &ResourceType,
        filters: &QueryFilters,
    ) -> Result<Vec<ResourceRecord>, TransportError> {
        (**self).query(resource, filters).await
    }
}

