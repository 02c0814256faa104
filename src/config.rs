//! Scraper configuration: base origin, listing path, and HTTP timeouts.
//!
//! The base origin is passed explicitly into both the listing extractor and the
//! detail resolver so that tests can point the whole pipeline at a mock origin.

use thiserror::Error;
use url::Url;

/// Default origin the listing and detail pages are served from.
pub const DEFAULT_BASE_ORIGIN: &str = "https://sci-hub.se";

/// Default path of the listing page under the base origin.
pub const DEFAULT_LISTING_PATH: &str = "/stats";

/// Default TCP connect timeout for every request.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default whole-request timeout for every request.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Errors produced while building a [`ScraperConfig`].
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The base origin is not an absolute http(s) URL
    #[error("invalid base origin '{value}': {reason}\n  Suggestion: {suggestion}")]
    InvalidBaseOrigin {
        /// The rejected value
        value: String,
        /// Why it was rejected
        reason: String,
        /// How to fix it
        suggestion: String,
    },
}

impl ConfigError {
    fn invalid_base_origin(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidBaseOrigin {
            value: value.to_string(),
            reason: reason.into(),
            suggestion: "Use a scheme and host only, e.g. https://sci-hub.se".to_string(),
        }
    }
}

/// Configuration shared by the listing extractor and the detail resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    base_origin: String,
    /// Path of the listing page, appended to the base origin.
    pub listing_path: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub read_timeout_secs: u64,
}

impl ScraperConfig {
    /// Creates a config for `base_origin` with default path and timeouts.
    ///
    /// A single trailing `/` is trimmed so that origin-relative links such as
    /// `/stats` concatenate cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseOrigin`] when the value does not parse
    /// as an absolute `http`/`https` URL with a host.
    pub fn new(base_origin: &str) -> Result<Self, ConfigError> {
        let trimmed = base_origin.trim();
        let url = Url::parse(trimmed)
            .map_err(|e| ConfigError::invalid_base_origin(base_origin, e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid_base_origin(
                base_origin,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::invalid_base_origin(base_origin, "missing host"));
        }

        Ok(Self {
            base_origin: trimmed.strip_suffix('/').unwrap_or(trimmed).to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        })
    }

    /// Overrides the listing page path.
    #[must_use]
    pub fn with_listing_path(mut self, listing_path: impl Into<String>) -> Self {
        self.listing_path = listing_path.into();
        self
    }

    /// Overrides both HTTP timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        self.connect_timeout_secs = connect_timeout_secs;
        self.read_timeout_secs = read_timeout_secs;
        self
    }

    /// Returns the base origin (no trailing slash).
    #[must_use]
    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    /// Returns the absolute listing page URL.
    #[must_use]
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.base_origin, self.listing_path)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }
}
