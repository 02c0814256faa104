//! Link normalization for embedded document references.

/// Turns a raw `src`/`href` value into an absolute URL.
///
/// - `//host/path` becomes `https://host/path`
/// - anything starting with `http` is returned unchanged
/// - everything else is appended to `base_origin` as-is
///
/// The join is plain string concatenation: no path-segment resolution and no
/// slash deduplication. Callers must not pass an empty `raw_ref`.
#[must_use]
pub fn normalize_link(raw_ref: &str, base_origin: &str) -> String {
    if raw_ref.starts_with("//") {
        format!("https:{raw_ref}")
    } else if raw_ref.starts_with("http") {
        raw_ref.to_string()
    } else {
        format!("{base_origin}{raw_ref}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://papers.example";

    #[test]
    fn test_normalize_protocol_relative_gets_https_scheme() {
        assert_eq!(
            normalize_link("//cdn.example/doc1.pdf", ORIGIN),
            "https://cdn.example/doc1.pdf"
        );
        assert_eq!(normalize_link("//", ORIGIN), "https://");
    }

    #[test]
    fn test_normalize_absolute_urls_unchanged() {
        assert_eq!(
            normalize_link("https://other.example/a.pdf", ORIGIN),
            "https://other.example/a.pdf"
        );
        assert_eq!(
            normalize_link("http://other.example/a.pdf#view=FitH", ORIGIN),
            "http://other.example/a.pdf#view=FitH"
        );
    }

    #[test]
    fn test_normalize_is_idempotent_on_absolute_output() {
        for raw in ["//cdn.example/x.pdf", "/downloads/x.pdf", "https://a.example/x"] {
            let once = normalize_link(raw, ORIGIN);
            assert_eq!(normalize_link(&once, ORIGIN), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_normalize_relative_is_plain_concatenation() {
        assert_eq!(
            normalize_link("/downloads/2024/doc.pdf", ORIGIN),
            "https://papers.example/downloads/2024/doc.pdf"
        );
        // no slash deduplication, no segment resolution
        assert_eq!(
            normalize_link("/a/../b.pdf", "https://papers.example/"),
            "https://papers.example//a/../b.pdf"
        );
        assert_eq!(
            normalize_link("doc.pdf", ORIGIN),
            "https://papers.exampledoc.pdf"
        );
    }

    #[test]
    fn test_normalize_http_prefix_match_is_literal() {
        // "http" prefix check also covers scheme-less names starting with "http"
        assert_eq!(normalize_link("httpdocs/a.pdf", ORIGIN), "httpdocs/a.pdf");
    }
}
