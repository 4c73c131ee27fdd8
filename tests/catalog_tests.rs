//! Tests for catalog construction and ordering guarantees

use backlink_runner::ToolCatalog;

#[test]
fn builtin_catalog_is_nonempty_and_unique() {
    let catalog = ToolCatalog::builtin();
    assert!(!catalog.is_empty());

    let urls: Vec<&str> = catalog.iter().collect();
    let mut deduped = urls.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(
        urls.len(),
        deduped.len(),
        "builtin catalog must not contain duplicate endpoints"
    );
}

#[test]
fn builtin_catalog_starts_with_primary_tool() {
    let catalog = ToolCatalog::builtin();
    assert_eq!(
        catalog.iter().next(),
        Some("https://searchenginereports.net/backlink-maker")
    );
}

#[test]
fn dedup_preserves_first_occurrence_order() {
    let catalog = ToolCatalog::from_urls(
        [
            "https://a.example/",
            "https://b.example/",
            "https://a.example/",
            "https://c.example/",
            "https://b.example/",
        ]
        .map(String::from),
    );

    let urls: Vec<&str> = catalog.iter().collect();
    assert_eq!(
        urls,
        vec!["https://a.example/", "https://b.example/", "https://c.example/"]
    );
    assert_eq!(catalog.len(), 3);
}

#[test]
fn scheme_variants_stay_distinct() {
    let catalog = ToolCatalog::from_urls(
        ["http://site.example/back/", "https://site.example/back/"].map(String::from),
    );
    assert_eq!(catalog.len(), 2);
}

#[test]
fn empty_input_builds_empty_catalog() {
    let catalog = ToolCatalog::from_urls(std::iter::empty());
    assert!(catalog.is_empty());
    assert_eq!(catalog.iter().count(), 0);
}
