// Copyright (c) 2025 - Cowboy AI, Inc.

//! REST Collection Adapter
//!
//! Implements [`CollectionQuery`] against a networking-style REST API where
//! every resource type is exposed as a list endpoint that accepts equality
//! filters as query parameters:
//!
//! ```text
//! GET {endpoint_url}/networks?fields=id&name=private
//! X-Auth-Token: <token>
//!
//! 200 OK
//! {"networks": [{"id": "c2f2..."}]}
//! ```
//!
//! Only HTTP 200 is treated as a result. Any other status is returned as
//! [`TransportError::Status`] with the response body, uninterpreted.
//!
//! # Example
//!
//! ```rust,no_run
//! use resource_resolver::adapters::{ClientConfig, HttpCollectionClient};
//! use resource_resolver::domain::ResourceType;
//! use resource_resolver::resolver::Resolver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig {
//!         endpoint_url: "http://localhost:9696/v2.0".to_string(),
//!         auth_token: "your-token-here".to_string(),
//!         timeout_secs: 30,
//!     };
//!
//!     let resolver = Resolver::new(HttpCollectionClient::new(config)?);
//!     let id = resolver.resolve(&ResourceType::network(), "private").await?;
//!     println!("{}", id);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::collection::CollectionQuery;
use crate::domain::{QueryFilters, ResourceRecord, ResourceType};
use crate::errors::TransportError;

/// Header carrying the pre-issued authentication token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Configuration for the REST collection client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Versioned API root, e.g. "http://localhost:9696/v2.0"
    pub endpoint_url: String,

    /// Token sent in the `X-Auth-Token` header
    pub auth_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:9696/v2.0".to_string(),
            auth_token: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// - `RESOLVER_ENDPOINT_URL` (optional, defaults to localhost)
    /// - `RESOLVER_AUTH_TOKEN` (required)
    /// - `RESOLVER_TIMEOUT_SECS` (optional)
    pub fn from_env() -> Result<Self, TransportError> {
        let defaults = Self::default();

        let endpoint_url =
            std::env::var("RESOLVER_ENDPOINT_URL").unwrap_or(defaults.endpoint_url);

        let auth_token = std::env::var("RESOLVER_AUTH_TOKEN").map_err(|_| {
            TransportError::Configuration("RESOLVER_AUTH_TOKEN not set".to_string())
        })?;

        let timeout_secs = match std::env::var("RESOLVER_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|e| {
                TransportError::Configuration(format!(
                    "Invalid RESOLVER_TIMEOUT_SECS '{}': {}",
                    raw, e
                ))
            })?,
            Err(_) => defaults.timeout_secs,
        };

        Ok(Self {
            endpoint_url,
            auth_token,
            timeout_secs,
        })
    }
}

/// HTTP implementation of [`CollectionQuery`]
pub struct HttpCollectionClient {
    config: ClientConfig,
    client: Client,
}

impl HttpCollectionClient {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        info!("Creating collection client for {}", config.endpoint_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = HeaderMap::new();
                let mut token = HeaderValue::from_str(&config.auth_token).map_err(|e| {
                    TransportError::Configuration(format!("Invalid auth token: {}", e))
                })?;
                token.set_sensitive(true);
                headers.insert(AUTH_TOKEN_HEADER, token);
                headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
                headers
            })
            .build()
            .map_err(|e| {
                TransportError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full request URL for a collection query
    pub fn request_url(&self, resource: &ResourceType, filters: &QueryFilters) -> String {
        let base = self.config.endpoint_url.trim_end_matches('/');
        let query = encode_query(filters);
        if query.is_empty() {
            format!("{}{}", base, resource.collection_path())
        } else {
            format!("{}{}?{}", base, resource.collection_path(), query)
        }
    }
}

/// Percent-encode filters as `k=v` pairs joined by `&`
pub fn encode_query(filters: &QueryFilters) -> String {
    filters
        .to_pairs()
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Extract the entries under `resource`'s collection key
pub fn parse_collection(
    resource: &ResourceType,
    body: &str,
) -> Result<Vec<ResourceRecord>, TransportError> {
    let key = resource.collection_key();
    let mut value: Value = serde_json::from_str(body)?;

    let entries = match value.get_mut(&key).map(Value::take) {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(TransportError::MalformedResponse(format!(
                "'{}' is not an array",
                key
            )))
        }
        None => {
            return Err(TransportError::MalformedResponse(format!(
                "missing top-level key '{}'",
                key
            )))
        }
    };

    entries
        .into_iter()
        .map(|entry| {
            let record = ResourceRecord::try_from(entry)
                .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
            record
                .id()
                .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
            Ok(record)
        })
        .collect()
}

#[async_trait]
impl CollectionQuery for HttpCollectionClient {
    async fn query(
        &self,
        resource: &ResourceType,
        filters: &QueryFilters,
    ) -> Result<Vec<ResourceRecord>, TransportError> {
        let url = self.request_url(resource, filters);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let records = parse_collection(resource, &body)?;
        debug!("{} returned {} record(s)", resource.collection_path(), records.len());
        Ok(records)
    }
}
