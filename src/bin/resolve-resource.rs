// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resolve a resource name or id from the command line
//!
//! Prints the canonical id of the single matching resource on stdout.
//!
//! Run with: cargo run --bin resolve-resource -- network private
//!
//! Prerequisites:
//! 1. API endpoint reachable (via RESOLVER_ENDPOINT_URL environment variable)
//! 2. Auth token set (via RESOLVER_AUTH_TOKEN environment variable)

use anyhow::{Context, Result};
use clap::Parser;
use resource_resolver::{
    adapters::{ClientConfig, HttpCollectionClient},
    IdLookupPolicy, Resolver, ResolverSettings,
};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "resolve-resource", about = "Resolve a resource name or id to its id")]
struct Args {
    /// Resource type, e.g. network, subnet, security_group
    resource_type: String,

    /// Name or id to resolve
    candidate: String,

    /// Only try the id lookup when the candidate is a UUID
    #[arg(long)]
    uuid_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let config = ClientConfig::from_env()
        .context("Failed to load client configuration. Set RESOLVER_AUTH_TOKEN")?;
    info!("Endpoint: {}", config.endpoint_url);

    let client = HttpCollectionClient::new(config).context("Failed to create API client")?;

    let settings = ResolverSettings {
        id_lookup: if args.uuid_only {
            IdLookupPolicy::UuidOnly
        } else {
            IdLookupPolicy::Always
        },
    };
    let resolver = Resolver::with_settings(client, settings);

    let id = resolver
        .resolve_str(&args.resource_type, &args.candidate)
        .await
        .with_context(|| {
            format!(
                "Failed to resolve {} '{}'",
                args.resource_type, args.candidate
            )
        })?;

    println!("{}", id);
    Ok(())
}
