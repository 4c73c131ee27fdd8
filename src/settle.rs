//! Post-submission settle wait.
//!
//! The catalog tools render their results with whatever script soup they
//! ship, so there is no reliable completion signal. This approximates
//! Playwright's network-idle wait by polling `document.readyState` together
//! with the performance resource-entry count: the page counts as settled
//! once the document is complete and no new resources have appeared across
//! two consecutive polls. Hitting the deadline is not an error; extraction
//! proceeds with whatever has rendered.

use chromiumoxide::Page;
use std::time::{Duration, Instant};

use crate::utils::constants::{SETTLE_GRACE_MS, SETTLE_POLL_INTERVAL_MS};

const SETTLE_PROBE_SCRIPT: &str = r#"
    (() => {
        return {
            readyState: document.readyState,
            resourceCount: performance.getEntriesByType('resource').length
        };
    })()
"#;

/// Wait for the page to go quiet, then one fixed grace delay.
///
/// Never fails. A page that keeps loading past `max_wait_secs` is simply
/// handed to extraction as-is, matching the give-up-and-scrape behavior
/// these tools need.
pub async fn wait_for_settle(page: &Page, max_wait_secs: u64) {
    let start = Instant::now();
    let max_wait = Duration::from_secs(max_wait_secs);
    let poll_interval = Duration::from_millis(SETTLE_POLL_INTERVAL_MS);

    log::debug!("Waiting for page to settle (max {max_wait_secs}s)");

    let mut last_resource_count: Option<u64> = None;

    loop {
        if start.elapsed() >= max_wait {
            log::warn!("Settle wait hit {max_wait_secs}s deadline, proceeding anyway");
            break;
        }

        match probe(page).await {
            Some((ready_state, resource_count)) => {
                let quiet = last_resource_count == Some(resource_count);
                if ready_state == "complete" && quiet {
                    log::debug!(
                        "Page settled after {:.2}s ({resource_count} resources)",
                        start.elapsed().as_secs_f64()
                    );
                    break;
                }
                last_resource_count = Some(resource_count);
            }
            None => {
                // Probe failures are expected mid-navigation; keep polling.
                last_resource_count = None;
            }
        }

        tokio::time::sleep(poll_interval).await;
    }

    // Result tables are often appended by a final script tick after the
    // network goes quiet.
    tokio::time::sleep(Duration::from_millis(SETTLE_GRACE_MS)).await;
}

async fn probe(page: &Page) -> Option<(String, u64)> {
    let result = match page.evaluate(SETTLE_PROBE_SCRIPT).await {
        Ok(result) => result,
        Err(e) => {
            log::debug!("Settle probe failed: {e}");
            return None;
        }
    };

    let value = match result.into_value::<serde_json::Value>() {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Settle probe returned no value: {e}");
            return None;
        }
    };

    let ready_state = value
        .get("readyState")
        .and_then(|v| v.as_str())
        .unwrap_or("loading")
        .to_string();
    let resource_count = value
        .get("resourceCount")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);

    Some((ready_state, resource_count))
}
