//! Tool orchestration.
//!
//! One `BacklinkRunner` owns the browser, its CDP handler task, and the
//! user data directory for the lifetime of a run. Each catalog tool gets an
//! isolated page; whatever happens on that page, the page is closed and the
//! batch moves on to the next tool.

pub mod errors;
pub mod page_timeout;

use anyhow::{Context, Result};
use chromiumoxide::{Browser, Page};
use rand::Rng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::browser_setup;
use crate::catalog::ToolCatalog;
use crate::config::RunConfig;
use crate::form_probe;
use crate::link_extractor;
use crate::records::{BacklinkRecord, RunSummary, SubmissionTask, dedupe_by_backlink};
use crate::settle;
use crate::utils::constants::{KEYWORD_FIELD_HINTS, URL_FIELD_HINTS};
use errors::ToolError;
use page_timeout::with_page_timeout;

/// Outcome of teardown; failures are reported, never raised.
#[derive(Debug, Clone)]
pub enum CleanupResult {
    /// All teardown steps succeeded
    Success,
    /// Some steps failed, with error details
    PartialFailure(Vec<String>),
}

/// Records plus run counters for one target.
#[derive(Debug)]
pub struct RunOutcome {
    /// Deduplicated records in first-seen order
    pub records: Vec<BacklinkRecord>,
    pub summary: RunSummary,
}

/// Drives the full catalog of backlink tools for submitted targets.
pub struct BacklinkRunner {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: PathBuf,
    catalog: ToolCatalog,
    config: RunConfig,
}

impl BacklinkRunner {
    /// Launch a browser and prepare the builtin catalog.
    ///
    /// Launch failure is fatal; there is nothing useful a runner without a
    /// browser could do.
    pub async fn launch(config: RunConfig) -> Result<Self> {
        let (browser, handler, user_data_dir) =
            browser_setup::launch_browser(config.headless(), config.chrome_data_dir().cloned())
                .await
                .context("Failed to launch browser for backlink run")?;

        Ok(Self {
            browser,
            handler,
            user_data_dir,
            catalog: ToolCatalog::builtin(),
            config,
        })
    }

    /// Replace the builtin catalog, mainly for embedders and tests.
    #[must_use]
    pub fn with_catalog(mut self, catalog: ToolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Submit one target to every tool in the catalog.
    ///
    /// Tools are visited sequentially in catalog order. A failing tool is
    /// logged and skipped; an empty result set is a normal outcome.
    pub async fn run_for_target(&self, target_url: &str, keywords: &str) -> RunOutcome {
        let started = Instant::now();
        let mut raw_records = Vec::new();
        let mut tools_failed = 0usize;

        info!(
            "Submitting {} to {} tools (keywords: {:?})",
            target_url,
            self.catalog.len(),
            keywords
        );

        for tool_url in self.catalog.iter() {
            let task = SubmissionTask::new(target_url, keywords, tool_url);
            match self.run_single_tool(&task).await {
                Ok(records) => {
                    debug!("{tool_url} produced {} links", records.len());
                    raw_records.extend(records);
                }
                Err(e) => {
                    warn!("Skipping tool: {e}");
                    tools_failed += 1;
                }
            }
        }

        let raw_count = raw_records.len();
        let records = dedupe_by_backlink(raw_records);

        let summary = RunSummary {
            raw_records: raw_count,
            unique_records: records.len(),
            tools_attempted: self.catalog.len(),
            tools_failed,
            elapsed: started.elapsed(),
        };

        info!(
            "Run for {} finished: {} unique links from {} raw, {}/{} tools failed, {:.1}s",
            target_url,
            summary.unique_records,
            summary.raw_records,
            summary.tools_failed,
            summary.tools_attempted,
            summary.elapsed.as_secs_f64()
        );

        RunOutcome { records, summary }
    }

    /// Run one tool on an isolated page, closing the page on every exit
    /// path.
    async fn run_single_tool(&self, task: &SubmissionTask) -> Result<Vec<BacklinkRecord>, ToolError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| ToolError::PageSession {
                tool_url: task.tool_url.clone(),
                source: anyhow::anyhow!("{e}"),
            })?;

        if let Err(e) = browser_setup::apply_stealth_measures(&page).await {
            debug!("Stealth injection failed on {}: {e}", task.tool_url);
        }

        let result = self.drive_tool(&page, task).await;

        if let Err(e) = page.close().await {
            debug!("Failed to close page for {}: {e}", task.tool_url);
        }

        result
    }

    async fn drive_tool(
        &self,
        page: &Page,
        task: &SubmissionTask,
    ) -> Result<Vec<BacklinkRecord>, ToolError> {
        let timeout_secs = self.config.per_tool_timeout_secs();

        with_page_timeout(
            async {
                page.goto(task.tool_url.as_str())
                    .await
                    .map_err(|e| anyhow::anyhow!("{e}"))
            },
            timeout_secs,
            "navigation",
        )
        .await
        .map_err(|e| ToolError::Navigation {
            tool_url: task.tool_url.clone(),
            source: e,
        })?;

        if let Err(e) = with_page_timeout(
            async {
                page.wait_for_navigation()
                    .await
                    .map_err(|e| anyhow::anyhow!("{e}"))
            },
            timeout_secs,
            "navigation wait",
        )
        .await
        {
            // Pages that never fire the load event can still carry a usable
            // form; probing decides, not the load signal.
            debug!("Navigation wait on {} incomplete: {e}", task.tool_url);
        }

        match tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            self.fill_and_submit(page, task),
        )
        .await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(ToolError::FieldInteraction {
                    tool_url: task.tool_url.clone(),
                    source: e,
                });
            }
            Err(_) => {
                return Err(ToolError::Deadline {
                    tool_url: task.tool_url.clone(),
                    timeout_secs,
                });
            }
        }

        settle::wait_for_settle(page, timeout_secs).await;

        let links = link_extractor::collect_backlinks(page).await;
        Ok(links.into_iter().map(|link| task.record(link)).collect())
    }

    /// Probe for fields, fill what exists, and fire a submission.
    async fn fill_and_submit(&self, page: &Page, task: &SubmissionTask) -> Result<()> {
        let type_delay = self.config.type_delay_ms();

        let url_field = form_probe::locate_field(page, &URL_FIELD_HINTS)
            .await
            .context("URL field probe failed")?;
        match &url_field {
            Some(field) => {
                form_probe::fill_field(field, &task.target_url, type_delay)
                    .await
                    .context("Failed to fill URL field")?;
            }
            None => debug!("No URL field found on {}", task.tool_url),
        }

        // Brief pause between fields, like a human tabbing through the form
        let pause_ms: u64 = { rand::rng().random_range(150..400) };
        tokio::time::sleep(Duration::from_millis(pause_ms)).await;

        let keyword_field = form_probe::locate_field(page, &KEYWORD_FIELD_HINTS)
            .await
            .context("Keyword field probe failed")?;
        if let Some(field) = &keyword_field
            && !task.keywords.is_empty()
        {
            form_probe::fill_field(field, &task.keywords, type_delay)
                .await
                .context("Failed to fill keyword field")?;
        }

        if !form_probe::try_submit(page).await {
            debug!("No submission action taken on {}", task.tool_url);
        }

        Ok(())
    }

    /// Tear down the browser, handler task, and user data directory.
    ///
    /// Every step is attempted regardless of earlier failures.
    pub async fn shutdown(mut self) -> CleanupResult {
        let mut errors = Vec::new();

        debug!("Closing browser");
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {e}");
            errors.push(format!("Browser close failed: {e}"));
        }

        debug!("Waiting for browser process to exit");
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {e}");
            errors.push(format!("Browser wait failed: {e}"));
        }

        self.handler.abort();

        debug!("Removing user data directory");
        if let Err(e) = std::fs::remove_dir_all(&self.user_data_dir) {
            warn!(
                "Failed to remove user data directory {}: {e}",
                self.user_data_dir.display()
            );
            errors.push(format!("Data directory cleanup failed: {e}"));
        }

        if errors.is_empty() {
            CleanupResult::Success
        } else {
            CleanupResult::PartialFailure(errors)
        }
    }
}
