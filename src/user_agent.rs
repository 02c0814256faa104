//! Shared User-Agent string for listing and detail page requests.

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/fierce/paperstats";

/// Default User-Agent for every request the pipeline issues.
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("paperstats/{version} (research-tool; +{PROJECT_UA_URL})")
}
