//! Listing extraction: fetch the statistics page, parse it, resolve every record.
//!
//! # Pipeline
//!
//! 1. GET `base_origin + listing_path` (failure aborts the batch)
//! 2. Parse every `#papers .paper` marker into a [`PaperRecord`], in order
//! 3. Resolve all detail pages concurrently through a [`Resolver`]
//! 4. Join, then return every record with `resolved_link` set to a URL or
//!    [`UNRESOLVED_LINK`]
//!
//! Per-record failures are logged and absorbed; only the listing fetch can fail
//! the batch.

mod error;
mod parser;

pub use error::ListingError;
pub use parser::parse_listing;

use std::sync::Arc;

use futures_util::future::join_all;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::ScraperConfig;
use crate::http_client::build_http_client;
use crate::resolver::{DetailPageResolver, Resolver};

/// Sentinel written to `resolved_link` when no document link could be resolved.
pub const UNRESOLVED_LINK: &str = "404";

/// One row of the listing page.
///
/// Text fields are always present; an empty string means the element was
/// missing from the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Listing link path without its leading `/`.
    pub doi: String,
    /// Listing timestamp text.
    pub datetime: String,
    pub title: String,
    pub journal: String,
    pub author: String,
    pub year: String,
    /// Absolute detail page URL; empty when the listing link was absent.
    #[serde(skip)]
    pub detail_url: String,
    /// `None` while pending, then the document URL or [`UNRESOLVED_LINK`].
    #[serde(rename = "pdfLink")]
    pub resolved_link: Option<String>,
}

impl PaperRecord {
    /// Returns true once resolution produced a real link (not the sentinel).
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved_link
            .as_deref()
            .is_some_and(|link| link != UNRESOLVED_LINK)
    }
}

/// Fetches the listing page and resolves every record's document link.
pub struct ListingExtractor {
    client: Client,
    config: ScraperConfig,
    resolver: Arc<dyn Resolver>,
}

impl ListingExtractor {
    /// Creates an extractor whose detail resolver shares its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Client`] when HTTP client construction fails.
    pub fn new(config: ScraperConfig) -> Result<Self, ListingError> {
        let client = build_http_client(&config)?;
        let resolver = DetailPageResolver::with_client(client.clone(), config.base_origin());
        Ok(Self {
            client,
            config,
            resolver: Arc::new(resolver),
        })
    }

    /// Creates an extractor with a custom resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Client`] when HTTP client construction fails.
    pub fn with_resolver(
        config: ScraperConfig,
        resolver: Arc<dyn Resolver>,
    ) -> Result<Self, ListingError> {
        Ok(Self {
            client: build_http_client(&config)?,
            config,
            resolver,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Runs one full batch: fetch, parse, resolve all, join.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::FetchFailed`] when the listing page cannot be
    /// fetched. Detail page failures never surface here; they become
    /// [`UNRESOLVED_LINK`] on the affected record.
    #[instrument(skip(self), fields(listing_url = %self.config.listing_url()))]
    pub async fn extract_listing(&self) -> Result<Vec<PaperRecord>, ListingError> {
        let html = self.fetch_listing_page().await?;
        let mut records = parse_listing(&html, self.config.base_origin());
        info!(count = records.len(), "parsed listing page");

        self.resolve_all(&mut records).await;

        let resolved = records.iter().filter(|r| r.is_resolved()).count();
        info!(
            total = records.len(),
            resolved,
            unresolved = records.len() - resolved,
            "resolved document links"
        );

        Ok(records)
    }

    /// Resolves every record concurrently and waits for all of them.
    ///
    /// Each future owns the `&mut` to its own record, so the write-once
    /// `resolved_link` needs no locking. One failure never cancels the others.
    pub async fn resolve_all(&self, records: &mut [PaperRecord]) {
        let resolver = self.resolver.as_ref();
        join_all(records.iter_mut().enumerate().map(|(index, record)| async move {
            let link = match resolver.resolve(&record.detail_url).await {
                Ok(resolved) => {
                    debug!(index, doi = %record.doi, url = %resolved.url, "resolved record");
                    resolved.url
                }
                Err(error) => {
                    warn!(
                        index,
                        doi = %record.doi,
                        resolver = resolver.name(),
                        reason = error.reason_code(),
                        detail = error.detail(),
                        "could not resolve document link; marking unresolved"
                    );
                    UNRESOLVED_LINK.to_string()
                }
            };
            record.resolved_link = Some(link);
        }))
        .await;
    }

    async fn fetch_listing_page(&self) -> Result<String, ListingError> {
        let url = self.config.listing_url();
        let response = self
            .client
            .get(&url)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| ListingError::fetch_failed(&url, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::fetch_failed(
                &url,
                &format!("listing page returned HTTP {}", status.as_u16()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| ListingError::fetch_failed(&url, &e.to_string()))
    }
}

impl std::fmt::Debug for ListingExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingExtractor")
            .field("config", &self.config)
            .field("resolver", &self.resolver.name())
            .finish_non_exhaustive()
    }
}
