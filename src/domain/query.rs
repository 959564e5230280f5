// Copyright (c) 2025 - Cowboy AI, Inc.
//! Collection query filters
//!
//! A query names the fields to return and a list of equality filters. Filters
//! are ANDed by the endpoint. Order is preserved so the encoded query string
//! is stable: `fields=id&name=myname`.

use serde::{Deserialize, Serialize};

/// Fields and equality filters for one collection query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilters {
    fields: Vec<String>,
    filters: Vec<(String, String)>,
}

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// `fields=id&id=<candidate>`
    pub fn id_equals(candidate: &str) -> Self {
        Self::new().field("id").filter("id", candidate)
    }

    /// `fields=id&name=<candidate>`
    pub fn name_equals(candidate: &str) -> Self {
        Self::new().field("id").filter("name", candidate)
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    /// Value of the first filter on `key`
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Key/value pairs in wire order: requested fields first, then filters
    pub fn to_pairs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(|f| ("fields", f.as_str()))
            .chain(self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .collect()
    }
}
