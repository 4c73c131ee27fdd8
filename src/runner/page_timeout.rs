//! Timeout wrapper for page operations.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;

/// Wrap an async page operation with an explicit timeout.
///
/// Chromium operations can hang indefinitely on wedged tool pages; this
/// bounds each one and reports the timeout distinctly from operation
/// failures.
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timeout after {timeout_secs} seconds"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completes_within_deadline() {
        let result = with_page_timeout(async { Ok(42) }, 5, "fast op").await;
        assert_eq!(result.ok(), Some(42));
    }

    #[tokio::test]
    async fn reports_timeout_with_operation_name() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        };
        let err = with_page_timeout(slow, 1, "navigation").await.unwrap_err();
        assert!(err.to_string().contains("navigation timeout after 1"));
    }
}
