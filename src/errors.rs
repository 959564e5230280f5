// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for resource resolution

use thiserror::Error;

use crate::domain::ResourceTypeError;

/// Errors raised by a collection query collaborator
///
/// The resolver never interprets these; they are surfaced to the caller
/// wrapped once in [`ResolverError::Transport`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Request could not be sent or no response was received
    #[error("Request error: {0}")]
    Request(String),

    /// Endpoint answered with a non-200 status
    #[error("Collection endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not have the expected collection shape
    #[error("Malformed collection response: {0}")]
    MalformedResponse(String),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TransportError {
    /// HTTP status carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors that can occur while resolving a name or id
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Neither the id filter nor the name filter matched anything
    #[error("Unable to find {resource} with name or id '{candidate}'")]
    NotFound { resource: String, candidate: String },

    /// More than one resource carries the requested name
    #[error(
        "Multiple {resource} matches found for name '{candidate}', \
         use an ID to be more specific ({count} matches)"
    )]
    AmbiguousName {
        resource: String,
        candidate: String,
        count: usize,
    },

    /// Resource type string cannot be mapped to a collection
    #[error("Invalid resource type: {0}")]
    InvalidResourceType(#[from] ResourceTypeError),

    /// Failure reported by the collection query collaborator
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ResolverError {
    /// HTTP-equivalent status code
    ///
    /// `NotFound` is 404 and `AmbiguousName` is 409. Transport errors report
    /// the status the endpoint returned, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ResolverError::NotFound { .. } => Some(404),
            ResolverError::AmbiguousName { .. } => Some(409),
            ResolverError::InvalidResourceType(_) => Some(400),
            ResolverError::Transport(err) => err.status_code(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolverError::NotFound { .. })
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, ResolverError::AmbiguousName { .. })
    }
}

/// Result type for resolver operations
pub type ResolverResult<T> = Result<T, ResolverError>;

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::MalformedResponse(err.to_string())
    }
}
