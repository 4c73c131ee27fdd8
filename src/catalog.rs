//! Builtin catalog of backlink-generator tool endpoints.
//!
//! The catalog is a fixed, ordered list. Several entries are duplicated in
//! the raw list (the sites get shuffled around between curation passes), so
//! construction dedupes by exact URL string while preserving first-seen
//! order. Scheme variants of the same host are deliberately kept distinct.

use std::collections::HashSet;

/// Raw endpoint list, in submission order. Duplicates are tolerated here
/// and removed when the catalog is built.
const BUILTIN_TOOL_URLS: &[&str] = &[
    "https://searchenginereports.net/backlink-maker",
    "http://www.indexkings.com/",
    "https://www.backlinkr.net/",
    "http://www.imtalk.org/cmps_index.php?pageid=IMT-Website-Submitter",
    "http://sitowebinfo.com/back/",
    "https://useme.org/",
    "http://247backlinks.info/",
    "http://real-backlinks.com/en",
    "http://www.freebacklinkbuilder.net/",
    "https://smallseotools.com/backlink-maker/",
    "https://w3seo.info/backlink-maker",
    "https://sitechecker.pro/backlinks-generator/",
    "https://seo1seotools.com/",
    "https://free-backlinks.org/",
    "http://ping-my-url.net/",
    "https://freebacklinks.info/",
    "http://ping-my-url.com/beta.html",
    "http://free-backlinks.info/",
    "https://free-backlinks.net/free-backlink-generator.html",
    "http://sitowebinfo.com/back/",
    "http://buy-backlinks.info/free-backlinks/",
    "https://seo1seotools.com/free-backlink-generator.html",
    "http://freebacklinkgenerator.net/free-backlink-generator.html",
    "https://buy-backlinks.net/free-backlink-generator.html",
    "https://addurl.official.my/",
    "http://100downloads.xyz/edugov/",
    "https://smartseotools.org/backlink-maker",
    "https://sitowebinfo.com/back/",
    "http://connectionbuilder.co.uk/",
    "https://www.duplichecker.com/backlink-maker.php",
    "https://seowagon.com/backlink-maker",
    "http://bulklink.org/",
    "https://www.coderduck.com/backlink-maker",
    "https://www.xwebtools.com/backlink-generator/",
    "https://www.w3era.com/tool/backlink-maker/",
];

/// Ordered, deduplicated set of tool endpoints for one run.
///
/// Immutable once built; the orchestrator iterates it in order.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<String>,
}

impl ToolCatalog {
    /// Build the catalog from the builtin endpoint list.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_urls(BUILTIN_TOOL_URLS.iter().map(|s| (*s).to_string()))
    }

    /// Build a catalog from arbitrary endpoint URLs, deduplicating by exact
    /// string while preserving first occurrence order.
    pub fn from_urls<I>(urls: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut tools = Vec::new();
        for url in urls {
            if seen.insert(url.clone()) {
                tools.push(url);
            }
        }
        Self { tools }
    }

    /// Iterate endpoints in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
