//! Per-tool error taxonomy.
//!
//! A failed tool never aborts the batch; it is reported through this enum
//! so callers and tests can tell what went wrong instead of reading a
//! silent skip.

/// Why one tool submission was abandoned
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Could not open or close an isolated page for the tool
    #[error("Page session failed for {tool_url}: {source}")]
    PageSession {
        tool_url: String,
        source: anyhow::Error,
    },

    /// Navigation to the tool endpoint failed or timed out
    #[error("Navigation to {tool_url} failed: {source}")]
    Navigation {
        tool_url: String,
        source: anyhow::Error,
    },

    /// Filling a located field failed
    #[error("Field interaction on {tool_url} failed: {source}")]
    FieldInteraction {
        tool_url: String,
        source: anyhow::Error,
    },

    /// The whole per-tool interaction exceeded its deadline
    #[error("Tool {tool_url} exceeded {timeout_secs}s deadline")]
    Deadline { tool_url: String, timeout_secs: u64 },
}

impl ToolError {
    /// Endpoint this error belongs to
    #[must_use]
    pub fn tool_url(&self) -> &str {
        match self {
            Self::PageSession { tool_url, .. }
            | Self::Navigation { tool_url, .. }
            | Self::FieldInteraction { tool_url, .. }
            | Self::Deadline { tool_url, .. } => tool_url,
        }
    }
}
