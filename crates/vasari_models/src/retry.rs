//! Retry logic for completion calls.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};
use vasari_error::CompletionResult;

/// Retry configuration for completion calls.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, counting the first.
    pub max_attempts: usize,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Configuration with the given attempt budget and default backoff.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }
}

/// Retries an operation with exponential backoff.
///
/// Only errors whose kind is transient (see
/// [`vasari_error::CompletionErrorKind::is_retryable`]) are retried; all
/// others fail on the first attempt. The final error is returned once the
/// attempt budget is spent.
#[instrument(skip(operation))]
pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    mut operation: F,
) -> CompletionResult<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = CompletionResult<T>>,
{
    let mut attempt = 0;
    let mut backoff = config.initial_backoff;

    loop {
        attempt += 1;
        debug!(attempt, "Executing operation");

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if attempt >= config.max_attempts {
                    warn!(attempt, "All retry attempts exhausted");
                    return Err(err);
                }

                if !err.kind.is_retryable() {
                    warn!("Error is not retryable, failing immediately");
                    return Err(err);
                }

                debug!(backoff_ms = backoff.as_millis(), "Retrying after failure");
                sleep(backoff).await;

                // Exponential backoff with cap
                backoff = std::cmp::min(
                    Duration::from_secs_f64(backoff.as_secs_f64() * config.backoff_multiplier),
                    config.max_backoff,
                );
            }
        }
    }
}
