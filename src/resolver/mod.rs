//! Detail page resolution: turn a per-paper detail page into a direct PDF link.
//!
//! # Architecture
//!
//! - [`Resolver`] - Async trait the listing extractor fans out over
//! - [`DetailPageResolver`] - Fetches a detail page and reads its `#pdf` embed
//! - [`ResolvedLink`] - Successful outcome carrying the absolute document URL
//! - [`ResolveError`] - Per-record failure (`fetch_error` or `missing_embed`)
//!
//! # Example
//!
//! ```no_run
//! use paperstats_core::ScraperConfig;
//! use paperstats_core::resolver::{DetailPageResolver, Resolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = DetailPageResolver::new(&ScraperConfig::default())?;
//! let resolved = resolver.resolve("https://sci-hub.se/10.1000/xyz123").await?;
//! println!("PDF: {}", resolved.url);
//! # Ok(())
//! # }
//! ```

mod detail;
mod error;

pub use detail::{DetailPageResolver, extract_embed_src};
pub use error::ResolveError;

use async_trait::async_trait;

/// A successfully resolved document link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Absolute URL of the downloadable document.
    pub url: String,
}

impl ResolvedLink {
    /// Creates a resolved link.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Resolves a detail page URL into a direct document link.
///
/// # Object Safety
///
/// This trait uses `async_trait` so the listing extractor can hold an
/// `Arc<dyn Resolver>`; Rust 2024 native async traits are not object-safe.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Returns the resolver's name, used in logs.
    fn name(&self) -> &str;

    /// Resolves `detail_url` with a single attempt.
    async fn resolve(&self, detail_url: &str) -> Result<ResolvedLink, ResolveError>;
}
