// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource records and resolved identifiers
//!
//! Collection endpoints return loosely-shaped JSON objects. A
//! [`ResourceRecord`] keeps the object as-is and offers typed accessors that
//! fail with a classified [`RecordError`] instead of panicking on a missing
//! field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Record field access error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record is missing field '{0}'")]
    MissingField(String),

    #[error("Record field '{field}' is not a {expected}")]
    WrongType { field: String, expected: &'static str },

    #[error("Record is not a JSON object")]
    NotAnObject,
}

/// One entry of a collection response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRecord(Map<String, Value>);

impl ResourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record holding only an `id`
    pub fn with_id(id: impl Into<String>) -> Self {
        Self::new().field("id", id.into())
    }

    /// Builder-style field setter
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Result<&str, RecordError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Err(RecordError::MissingField(field.to_string())),
            Some(value) => value.as_str().ok_or_else(|| RecordError::WrongType {
                field: field.to_string(),
                expected: "string",
            }),
        }
    }

    pub fn id(&self) -> Result<&str, RecordError> {
        self.get_str("id")
    }

    pub fn name(&self) -> Result<&str, RecordError> {
        self.get_str("name")
    }

    /// True when `field` is present and equal to `expected` as a string
    pub fn matches(&self, field: &str, expected: &str) -> bool {
        self.get_str(field).map(|v| v == expected).unwrap_or(false)
    }

    /// Copy of the record limited to the requested fields
    pub fn project(&self, fields: &[String]) -> Self {
        if fields.is_empty() {
            return self.clone();
        }
        Self(
            self.0
                .iter()
                .filter(|(k, _)| fields.iter().any(|f| f == *k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl TryFrom<Value> for ResourceRecord {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(RecordError::NotAnObject),
        }
    }
}

/// Canonical identifier produced by a successful resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ResourceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ResourceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
