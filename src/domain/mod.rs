// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resolution Domain Models
//!
//! Value objects shared by the resolver and its collection collaborators.
//!
//! - [`ResourceType`] - validated singular type key with collection naming
//! - [`ResourceRecord`] - loosely-typed collection entry with typed accessors
//! - [`ResourceId`] - canonical identifier returned by a resolution
//! - [`QueryFilters`] - requested fields plus equality filters

pub mod query;
pub mod record;
pub mod resource_type;

pub use query::QueryFilters;
pub use record::{RecordError, ResourceId, ResourceRecord};
pub use resource_type::{ResourceType, ResourceTypeError};
