//! URL helpers shared by extraction and the CLI.

use url::Url;

/// Check if a URL is something the extractor should keep
///
/// Filters out fragment-only hrefs, javascript:/mailto:/data: pseudo-links,
/// and anything that is not plain http(s).
#[must_use]
pub fn is_scrapable_url(url: &str) -> bool {
    if url.is_empty() || url.starts_with('#') {
        return false;
    }

    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Extract the lowercased host of an absolute URL, if it has one
#[must_use]
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_pseudo_schemes_and_fragments() {
        assert!(!is_scrapable_url("javascript:void(0)"));
        assert!(!is_scrapable_url("mailto:seo@example.com"));
        assert!(!is_scrapable_url("data:text/html,hi"));
        assert!(!is_scrapable_url("#results"));
        assert!(!is_scrapable_url(""));
    }

    #[test]
    fn accepts_http_and_https_only() {
        assert!(is_scrapable_url("https://example.com/page"));
        assert!(is_scrapable_url("http://example.com"));
        assert!(!is_scrapable_url("ftp://example.com/file"));
        assert!(!is_scrapable_url("not a url"));
    }

    #[test]
    fn host_is_lowercased() {
        assert_eq!(host_of("https://EXAMPLE.com/x"), Some("example.com".into()));
        assert_eq!(host_of("/relative/only"), None);
    }
}
