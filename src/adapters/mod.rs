// Copyright (c) 2025 - Cowboy AI, Inc.

//! Collection adapter implementations
//!
//! Concrete implementations of the [`CollectionQuery`](crate::collection::CollectionQuery)
//! trait: a REST client for real endpoints and an in-memory store for tests
//! and offline use.

pub mod memory;

pub use memory::{InMemoryCollection, RecordedQuery};

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{ClientConfig, HttpCollectionClient};
