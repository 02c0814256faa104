//! Detail page resolver: one GET, one `#pdf` lookup, one normalization.

use std::sync::LazyLock;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use scraper::{Html, Selector};
use tracing::debug;

use crate::config::ScraperConfig;
use crate::http_client::{ClientBuildError, build_http_client};
use crate::normalize::normalize_link;
use crate::selector::compile_static_selector;

use super::{ResolveError, ResolvedLink, Resolver};

static PDF_EMBED_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("#pdf"));

/// Resolves detail pages served under a fixed base origin.
pub struct DetailPageResolver {
    client: Client,
    base_origin: String,
}

impl DetailPageResolver {
    /// Creates a resolver with its own client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when HTTP client construction fails.
    pub fn new(config: &ScraperConfig) -> Result<Self, ClientBuildError> {
        Ok(Self::with_client(build_http_client(config)?, config.base_origin()))
    }

    /// Creates a resolver that shares an existing client.
    #[must_use]
    pub fn with_client(client: Client, base_origin: impl Into<String>) -> Self {
        Self {
            client,
            base_origin: base_origin.into(),
        }
    }

    /// Returns the origin relative embed references are joined onto.
    #[must_use]
    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    async fn fetch_detail_page(&self, detail_url: &str) -> Result<String, ResolveError> {
        let response = self
            .client
            .get(detail_url)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| ResolveError::fetch_failed(detail_url, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::fetch_failed(
                detail_url,
                &format!("detail page returned HTTP {}", status.as_u16()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| ResolveError::fetch_failed(detail_url, &e.to_string()))
    }
}

impl std::fmt::Debug for DetailPageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailPageResolver")
            .field("base_origin", &self.base_origin)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Resolver for DetailPageResolver {
    fn name(&self) -> &'static str {
        "detail_page"
    }

    #[tracing::instrument(skip(self), fields(resolver = "detail_page"))]
    async fn resolve(&self, detail_url: &str) -> Result<ResolvedLink, ResolveError> {
        if detail_url.is_empty() {
            return Err(ResolveError::fetch_failed(
                detail_url,
                "record has no detail page link",
            ));
        }

        let html = self.fetch_detail_page(detail_url).await?;

        let Some(src) = extract_embed_src(&html) else {
            return Err(ResolveError::missing_embed(detail_url));
        };

        let url = normalize_link(&src, &self.base_origin);
        debug!(raw = %src, resolved = %url, "resolved embedded document reference");
        Ok(ResolvedLink::new(url))
    }
}

/// Returns the trimmed `src` of the element with id `pdf`, if present and non-empty.
#[must_use]
pub fn extract_embed_src(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&PDF_EMBED_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string)
}
