//! Tests for record types and backlink deduplication

use backlink_runner::{dedupe_by_backlink, BacklinkRecord, SubmissionTask};

fn record(tool: &str, backlink: &str) -> BacklinkRecord {
    SubmissionTask::new("https://example.com", "rust seo", tool).record(backlink)
}

#[test]
fn task_stamps_records_with_its_context() {
    let task = SubmissionTask::new("https://example.com", "kw1 kw2", "https://tool.example/");
    let record = task.record("https://other.com/page");

    assert_eq!(record.target_url, "https://example.com");
    assert_eq!(record.keywords, "kw1 kw2");
    assert_eq!(record.tool_url, "https://tool.example/");
    assert_eq!(record.backlink_url, "https://other.com/page");
}

#[test]
fn dedup_keys_on_backlink_url_only() {
    let records = vec![
        record("https://tool-a.example/", "https://other.com/x"),
        record("https://tool-b.example/", "https://other.com/x"),
        record("https://tool-b.example/", "https://other.com/y"),
    ];

    let unique = dedupe_by_backlink(records);
    assert_eq!(unique.len(), 2);
    // first producer wins
    assert_eq!(unique[0].tool_url, "https://tool-a.example/");
    assert_eq!(unique[0].backlink_url, "https://other.com/x");
    assert_eq!(unique[1].backlink_url, "https://other.com/y");
}

#[test]
fn dedup_is_idempotent() {
    let records = vec![
        record("https://tool-a.example/", "https://other.com/x"),
        record("https://tool-a.example/", "https://other.com/x"),
        record("https://tool-a.example/", "https://other.com/y"),
    ];

    let once = dedupe_by_backlink(records);
    let twice = dedupe_by_backlink(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn dedup_of_empty_input_is_empty() {
    assert!(dedupe_by_backlink(Vec::new()).is_empty());
}

#[test]
fn records_round_trip_through_json() {
    let original = record("https://tool.example/", "https://other.com/x");
    let json = serde_json::to_string(&original).unwrap();
    let parsed: BacklinkRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(original, parsed);
}
