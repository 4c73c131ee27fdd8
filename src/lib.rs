//! backlink-runner: automated submission of a target URL to free
//! backlink-generator web tools.
//!
//! The runner launches a stealth-configured Chromium, visits each tool in a
//! builtin catalog, heuristically finds the URL/keyword fields, submits the
//! form, waits for the page to settle, and scrapes the reported links into
//! [`records::BacklinkRecord`]s.
//!
//! ```no_run
//! use backlink_runner::{BacklinkRunner, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = RunConfig::builder().headless(true).build()?;
//!     let runner = BacklinkRunner::launch(config).await?;
//!
//!     let outcome = runner.run_for_target("https://example.com", "rust seo").await;
//!     println!("{} unique backlinks", outcome.records.len());
//!
//!     runner.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod browser_setup;
pub mod catalog;
pub mod config;
pub mod form_probe;
pub mod link_extractor;
pub mod records;
pub mod runner;
pub mod settle;
pub mod utils;

pub use catalog::ToolCatalog;
pub use config::{RunConfig, RunConfigBuilder};
pub use link_extractor::extract_backlinks;
pub use records::{BacklinkRecord, RunSummary, SubmissionTask, dedupe_by_backlink};
pub use runner::errors::ToolError;
pub use runner::{BacklinkRunner, CleanupResult, RunOutcome};
