use std::io;

use smmv2::{Identifier, ProviderClient};
use tracing_subscriber::EnvFilter;

/// Read a required environment variable.
pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// Install a log subscriber (`RUST_LOG=smmv2=debug` shows requests) and build
/// a client from `SMM_API_URL` / `SMM_API_KEY`.
pub fn init() -> Result<ProviderClient, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let endpoint = required_env("SMM_API_URL")?;
    let api_key = required_env("SMM_API_KEY")?;
    Ok(ProviderClient::new(endpoint, api_key)?)
}

/// Parse a comma-separated id list from an environment variable.
#[allow(dead_code)]
pub fn ids_from_env(name: &str) -> Result<Vec<Identifier>, io::Error> {
    Ok(required_env(name)?
        .split(',')
        .filter(|id| !id.trim().is_empty())
        .map(Identifier::from_wire)
        .collect())
}
