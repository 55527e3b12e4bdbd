//! Timeout utilities for page operations
//!
//! Async timeout wrapper that keeps navigation and other browser operations
//! from hanging a tool call indefinitely.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;

/// Wrap an async page operation with an explicit timeout
///
/// Distinguishes a timeout from a failure of the operation itself in the
/// returned error message.
///
/// # Arguments
/// * `operation` - The async Future to execute with a timeout
/// * `timeout` - Upper bound for the operation
/// * `operation_name` - Human-readable name for error messages
pub async fn with_page_timeout<F, T>(operation: F, timeout: Duration, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timeout after {} seconds",
            timeout.as_secs_f64()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn timeout_is_reported_with_operation_name() {
        let result: Result<()> = with_page_timeout(
            async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            },
            Duration::from_millis(10),
            "Navigation",
        )
        .await;

        let err = result.expect_err("operation should time out");
        assert!(err.to_string().starts_with("Navigation timeout"));
    }

    #[tokio::test]
    async fn inner_error_is_passed_through() {
        let result: Result<()> = with_page_timeout(
            async { Err(anyhow::anyhow!("net::ERR_CONNECTION_REFUSED")) },
            Duration::from_secs(1),
            "Navigation",
        )
        .await;

        assert!(result.unwrap_err().to_string().contains("ERR_CONNECTION_REFUSED"));
    }
}
