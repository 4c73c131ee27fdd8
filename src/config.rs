//! Run configuration with a validating fluent builder.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_PER_TOOL_TIMEOUT_SECS, DEFAULT_TYPE_DELAY_MS};

/// Timeouts shorter than this leave no room for navigation plus the fixed
/// settle grace, so `build()` rejects them.
const MIN_PER_TOOL_TIMEOUT_SECS: u64 = 5;

/// Configuration for one runner instance.
///
/// Construct via [`RunConfig::builder`]. All fields have defaults, so
/// `RunConfig::default()` is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    headless: bool,
    per_tool_timeout_secs: u64,
    type_delay_ms: u64,
    chrome_data_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            headless: true,
            per_tool_timeout_secs: DEFAULT_PER_TOOL_TIMEOUT_SECS,
            type_delay_ms: DEFAULT_TYPE_DELAY_MS,
            chrome_data_dir: None,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Whether the browser launches without a visible window
    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    /// Upper bound on the complete interaction with one tool page
    #[must_use]
    pub fn per_tool_timeout_secs(&self) -> u64 {
        self.per_tool_timeout_secs
    }

    /// Delay between simulated keystrokes while filling fields
    #[must_use]
    pub fn type_delay_ms(&self) -> u64 {
        self.type_delay_ms
    }

    /// Optional override for the Chrome user data directory
    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }
}

/// Fluent builder for [`RunConfig`].
#[derive(Debug, Default, Clone)]
pub struct RunConfigBuilder {
    headless: Option<bool>,
    per_tool_timeout_secs: Option<u64>,
    type_delay_ms: Option<u64>,
    chrome_data_dir: Option<PathBuf>,
}

impl RunConfigBuilder {
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = Some(headless);
        self
    }

    #[must_use]
    pub fn per_tool_timeout_secs(mut self, secs: u64) -> Self {
        self.per_tool_timeout_secs = Some(secs);
        self
    }

    #[must_use]
    pub fn type_delay_ms(mut self, ms: u64) -> Self {
        self.type_delay_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn chrome_data_dir(mut self, dir: PathBuf) -> Self {
        self.chrome_data_dir = Some(dir);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<RunConfig> {
        let defaults = RunConfig::default();

        let per_tool_timeout_secs = self
            .per_tool_timeout_secs
            .unwrap_or(defaults.per_tool_timeout_secs);
        if per_tool_timeout_secs < MIN_PER_TOOL_TIMEOUT_SECS {
            return Err(anyhow::anyhow!(
                "per_tool_timeout_secs must be at least {MIN_PER_TOOL_TIMEOUT_SECS}, got {per_tool_timeout_secs}"
            ));
        }

        Ok(RunConfig {
            headless: self.headless.unwrap_or(defaults.headless),
            per_tool_timeout_secs,
            type_delay_ms: self.type_delay_ms.unwrap_or(defaults.type_delay_ms),
            chrome_data_dir: self.chrome_data_dir,
        })
    }
}
