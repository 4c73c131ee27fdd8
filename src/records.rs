//! Result records produced by a run.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// One submission step: a target handed to one tool endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionTask {
    /// URL being promoted
    pub target_url: String,
    /// Keywords string as entered by the caller (may be empty)
    pub keywords: String,
    /// Tool endpoint receiving the submission
    pub tool_url: String,
}

impl SubmissionTask {
    pub fn new(
        target_url: impl Into<String>,
        keywords: impl Into<String>,
        tool_url: impl Into<String>,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            keywords: keywords.into(),
            tool_url: tool_url.into(),
        }
    }

    /// Attach one extracted backlink to this task.
    #[must_use]
    pub fn record(&self, backlink_url: impl Into<String>) -> BacklinkRecord {
        BacklinkRecord {
            target_url: self.target_url.clone(),
            keywords: self.keywords.clone(),
            tool_url: self.tool_url.clone(),
            backlink_url: backlink_url.into(),
        }
    }
}

/// One reported backlink: which tool produced which external link for
/// which target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BacklinkRecord {
    pub target_url: String,
    pub keywords: String,
    pub tool_url: String,
    pub backlink_url: String,
}

/// Deduplicate records by `backlink_url` only, keeping the first producer
/// of each link and the original order.
#[must_use]
pub fn dedupe_by_backlink(records: Vec<BacklinkRecord>) -> Vec<BacklinkRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.backlink_url.clone()))
        .collect()
}

/// Aggregate counters for one `run_for_target` pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Records collected before deduplication
    pub raw_records: usize,
    /// Records surviving deduplication
    pub unique_records: usize,
    /// Tools the orchestrator attempted
    pub tools_attempted: usize,
    /// Tools that failed and were skipped
    pub tools_failed: usize,
    /// Wall-clock duration of the pass
    #[serde(skip)]
    pub elapsed: Duration,
}
