//! Shared HTTP client construction policy.
//!
//! The listing fetch and every detail fetch go through one `reqwest::Client`
//! so they share timeout, user-agent, and compression settings along with the
//! connection pool.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::config::ScraperConfig;
use crate::user_agent;

/// HTTP client construction failed.
#[derive(Debug, Error)]
#[error("HTTP client construction failed: {source}\n  Suggestion: Check proxy environment variables and TLS configuration")]
pub struct ClientBuildError {
    #[from]
    source: reqwest::Error,
}

/// Builds the pipeline HTTP client from `config`.
///
/// Both timeouts are always set, so a detail page that never answers turns
/// into a per-record fetch error instead of holding the batch join forever.
///
/// # Errors
///
/// Returns [`ClientBuildError`] when `reqwest` cannot build the client.
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, ClientBuildError> {
    debug!(
        connect_timeout_secs = config.connect_timeout_secs,
        read_timeout_secs = config.read_timeout_secs,
        "building HTTP client"
    );

    let client = Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.read_timeout_secs))
        .user_agent(user_agent::default_user_agent())
        .gzip(true)
        .build()?;

    Ok(client)
}
