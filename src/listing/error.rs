//! Error types for listing extraction.

use thiserror::Error;

use crate::http_client::ClientBuildError;

/// Errors that abort a whole listing batch.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The listing page could not be fetched (transport error, timeout, non-2xx)
    #[error("could not fetch listing page '{url}': {reason}\n  Suggestion: {suggestion}")]
    FetchFailed {
        /// The listing page URL
        url: String,
        /// Transport or status message
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// The shared HTTP client could not be built
    #[error(transparent)]
    Client(#[from] ClientBuildError),
}

impl ListingError {
    /// Creates a `FetchFailed` error.
    #[must_use]
    pub fn fetch_failed(url: &str, reason: &str) -> Self {
        Self::FetchFailed {
            url: url.to_string(),
            reason: reason.to_string(),
            suggestion: "Check network connectivity and the --base-origin / --listing-path values"
                .to_string(),
        }
    }
}
