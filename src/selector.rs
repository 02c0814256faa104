//! Static CSS selector helper shared by the listing and detail parsers.

use scraper::Selector;

/// Compiles a selector at static init; panics on invalid pattern.
pub(crate) fn compile_static_selector(pattern: &str) -> Selector {
    Selector::parse(pattern).unwrap_or_else(|e| panic!("invalid static selector '{pattern}': {e}"))
}
