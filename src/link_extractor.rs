//! Outbound-link extraction from a settled tool page.
//!
//! Extraction is a pure function over the HTML snapshot and the page URL so
//! the filtering rules stay testable without a browser. Relative hrefs are
//! resolved with standard URL join semantics against the page URL; links
//! that resolve back onto the tool's own host are not backlinks and are
//! dropped here, never post-filtered.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

use crate::utils::url_utils::is_scrapable_url;

/// Snapshot the page and extract candidate backlinks.
///
/// A page whose content cannot be read yields an empty list rather than an
/// error; by this point the tool either produced links or it didn't.
pub async fn collect_backlinks(page: &chromiumoxide::Page) -> Vec<String> {
    let page_url = match page.url().await {
        Ok(Some(url)) => url,
        Ok(None) => "about:blank".to_string(),
        Err(e) => {
            log::debug!("Could not read page URL: {e}");
            "about:blank".to_string()
        }
    };

    let html = match page.content().await {
        Ok(html) => html,
        Err(e) => {
            log::debug!("Could not snapshot page content: {e}");
            return Vec::new();
        }
    };

    extract_backlinks(&html, &page_url)
}

/// Extract external links from an HTML document.
///
/// Keeps http(s) anchors whose resolved host exists and differs from the
/// page's own host, deduplicated in first-seen order.
#[must_use]
pub fn extract_backlinks(html: &str, page_url: &str) -> Vec<String> {
    let base = Url::parse(page_url).ok();
    let page_host = base
        .as_ref()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase));

    let document = Html::parse_document(html);
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            continue;
        }

        let resolved = match Url::parse(href) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let Some(base) = base.as_ref() else {
                    continue;
                };
                match base.join(href) {
                    Ok(url) => url,
                    Err(_) => continue,
                }
            }
            Err(_) => continue,
        };

        if !is_scrapable_url(resolved.as_str()) {
            continue;
        }

        let Some(host) = resolved.host_str().map(str::to_ascii_lowercase) else {
            continue;
        };
        if page_host.as_deref() == Some(host.as_str()) {
            continue;
        }

        let url_string = resolved.to_string();
        if seen.insert(url_string.clone()) {
            found.push(url_string);
        }
    }

    found
}
