// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Type Value Object
//!
//! A resource type names one collection on the REST endpoint. From the
//! singular key (`network`) we derive the plural (`networks`), the JSON key of
//! a list response (`security_groups`) and the URL path (`/security-groups`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Resource type validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceTypeError {
    #[error("Resource type is empty")]
    Empty,

    #[error("Resource type must start with a lowercase letter: {0}")]
    InvalidStart(String),

    #[error("Invalid character in resource type {0}: {1:?}")]
    InvalidCharacter(String, char),
}

/// Singular resource type key, e.g. `network` or `security_group`
///
/// # Invariants
/// - Non-empty
/// - Starts with a lowercase ASCII letter
/// - Only lowercase ASCII letters, digits, `_` and `-`
///
/// # Examples
///
/// ```rust
/// use resource_resolver::domain::ResourceType;
///
/// let rt = ResourceType::new("security_group").unwrap();
/// assert_eq!(rt.collection_key(), "security_groups");
/// assert_eq!(rt.collection_path(), "/security-groups");
///
/// assert!(ResourceType::new("").is_err());
/// assert!(ResourceType::new("Network").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceType(String);

impl ResourceType {
    pub fn new(name: impl Into<String>) -> Result<Self, ResourceTypeError> {
        let name = name.into();

        let first = name.chars().next().ok_or(ResourceTypeError::Empty)?;
        if !first.is_ascii_lowercase() {
            return Err(ResourceTypeError::InvalidStart(name));
        }

        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-'))
        {
            return Err(ResourceTypeError::InvalidCharacter(name, bad));
        }

        Ok(Self(name))
    }

    pub fn network() -> Self {
        Self("network".to_string())
    }

    pub fn subnet() -> Self {
        Self("subnet".to_string())
    }

    pub fn port() -> Self {
        Self("port".to_string())
    }

    pub fn router() -> Self {
        Self("router".to_string())
    }

    pub fn floating_ip() -> Self {
        Self("floatingip".to_string())
    }

    pub fn security_group() -> Self {
        Self("security_group".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Plural form of the type name
    ///
    /// Consonant + `y` becomes `ies` (`policy` → `policies`), names ending in
    /// `s` or `x` take `es`, everything else takes `s`.
    pub fn plural(&self) -> String {
        let name = self.0.as_str();
        let mut chars = name.chars().rev();
        match (chars.next(), chars.next()) {
            (Some('y'), Some(prev)) if !is_vowel(prev) => {
                format!("{}ies", &name[..name.len() - 1])
            }
            (Some('s'), _) | (Some('x'), _) => format!("{}es", name),
            _ => format!("{}s", name),
        }
    }

    /// Top-level key of a list response body
    pub fn collection_key(&self) -> String {
        self.plural().replace('-', "_")
    }

    /// URL path of the collection, relative to the endpoint
    pub fn collection_path(&self) -> String {
        format!("/{}", self.plural().replace('_', "-"))
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResourceType {
    type Err = ResourceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ResourceType {
    type Error = ResourceTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceType> for String {
    fn from(value: ResourceType) -> Self {
        value.0
    }
}
