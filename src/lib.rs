// Copyright (c) 2025 - Cowboy AI, Inc.
//! Name-or-ID resolution for REST resource collections
//!
//! This crate turns a user-supplied token that may be either a resource id or
//! a resource name into exactly one canonical id, by querying the resource's
//! collection endpoint first by id and then by name.

pub mod adapters;
pub mod collection;
pub mod domain;
pub mod errors;
pub mod resolver;

// Re-export commonly used types
pub use collection::CollectionQuery;
pub use domain::{QueryFilters, ResourceId, ResourceRecord, ResourceType};
pub use errors::{ResolverError, ResolverResult, TransportError};
pub use resolver::{IdLookupPolicy, Resolver, ResolverSettings};
