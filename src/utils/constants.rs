//! Shared configuration constants for backlink-runner
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default per-tool timeout: 45 seconds
///
/// Upper bound for the complete interaction with one backlink tool page:
/// navigation, field probing, submission, and the settle wait. Generous
/// because several of the catalog tools are slow shared-hosting pages.
pub const DEFAULT_PER_TOOL_TIMEOUT_SECS: u64 = 45;

/// Grace delay after the page is considered settled: 1 second
///
/// Even once the document is complete and network activity has gone quiet,
/// result tables on these tools are often appended by a final script tick.
pub const SETTLE_GRACE_MS: u64 = 1_000;

/// Interval between settle polls
pub const SETTLE_POLL_INTERVAL_MS: u64 = 250;

/// Default delay between simulated keystrokes when filling fields: 10ms
///
/// Small enough to keep a full catalog run fast, large enough that input
/// event handlers on the tool pages fire per character.
pub const DEFAULT_TYPE_DELAY_MS: u64 = 10;

/// Attribute/label hints identifying a target-URL input field, tried in order
pub const URL_FIELD_HINTS: [&str; 4] = ["url", "website", "site", "link"];

/// Attribute/label hints identifying a keyword input field, tried in order
pub const KEYWORD_FIELD_HINTS: [&str; 4] = ["keyword", "keywords", "tags", "anchor"];

/// Button/link labels that plausibly trigger form submission, in priority order
pub const SUBMIT_LABEL_KEYWORDS: [&str; 10] = [
    "submit", "generate", "create", "make", "build", "start", "go", "check", "search", "run",
];

/// Chrome user agent string for stealth mode
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Chrome releases new stable versions ~every 4 weeks.
/// Update quarterly to stay within reasonable version window.
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
