//! Error types for detail page resolution.
//!
//! Messages follow the What/Why/Fix pattern used across the project. Every
//! variant is per-record: the listing extractor logs it and substitutes the
//! unresolved sentinel, so none of these ever abort a batch.

use thiserror::Error;

/// Errors that can occur while resolving one detail page.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The detail page could not be fetched (transport error, timeout, non-2xx)
    #[error("could not fetch detail page '{url}': {reason}\n  Suggestion: {suggestion}")]
    FetchFailed {
        /// The detail page URL
        url: String,
        /// Transport or status message
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// The detail page has no usable `#pdf` embed
    #[error("no embedded document reference on detail page '{url}'\n  Suggestion: {suggestion}")]
    MissingEmbed {
        /// The detail page URL
        url: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl ResolveError {
    /// Creates a `FetchFailed` error.
    #[must_use]
    pub fn fetch_failed(url: &str, reason: &str) -> Self {
        Self::FetchFailed {
            url: url.to_string(),
            reason: reason.to_string(),
            suggestion: "Check that the mirror is reachable and the paper page exists".to_string(),
        }
    }

    /// Creates a `MissingEmbed` error.
    #[must_use]
    pub fn missing_embed(url: &str) -> Self {
        Self::MissingEmbed {
            url: url.to_string(),
            suggestion: "The paper may not be available on this mirror; try another origin"
                .to_string(),
        }
    }

    /// Short machine-readable reason code (`fetch_error` or `missing_embed`).
    #[must_use]
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::FetchFailed { .. } => "fetch_error",
            Self::MissingEmbed { .. } => "missing_embed",
        }
    }

    /// The failure detail: the transport message for fetch errors, the detail
    /// page URL for missing embeds.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::FetchFailed { reason, .. } => reason,
            Self::MissingEmbed { url, .. } => url,
        }
    }
}
