//! Paperstats Core Library
//!
//! Fetches a paper statistics listing page, parses it into structured records,
//! and resolves each record's detail page into a direct PDF link.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - Base origin, listing path, and HTTP timeouts
//! - [`normalize`] - Raw embed reference to absolute URL
//! - [`resolver`] - Detail page resolution (`#pdf` embed lookup)
//! - [`listing`] - Listing fetch, parse, and concurrent resolution
//! - [`server`] - HTTP API over the pipeline

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod http_client;
pub mod listing;
pub mod normalize;
pub mod resolver;
pub mod server;

mod selector;
mod user_agent;

// Re-export commonly used types
pub use config::{ConfigError, ScraperConfig};
pub use http_client::{ClientBuildError, build_http_client};
pub use listing::{ListingError, ListingExtractor, PaperRecord, UNRESOLVED_LINK, parse_listing};
pub use normalize::normalize_link;
pub use resolver::{DetailPageResolver, ResolveError, ResolvedLink, Resolver};
