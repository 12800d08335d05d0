//! Retry logic for model requests

use super::types::ModelClient;
use crate::error::Text2SqlResult;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{instrument, warn};

/// Base delay of the first retry; doubles for each further attempt
const BASE_DELAY_MS: u64 = 500;
const MAX_DELAY_MS: u64 = 30_000;

impl ModelClient {
    /// Execute a request with retry logic and exponential backoff.
    ///
    /// Only errors classified as retryable (429, 5xx, timeouts, transport
    /// failures) are retried; anything else is returned immediately. With
    /// `max_retries = 0` the operation runs exactly once.
    #[instrument(skip(self, operation), fields(max_retries = self.config.max_retries))]
    pub(super) async fn execute_with_retry<T, F, Fut>(&self, operation: F) -> Text2SqlResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Text2SqlResult<T>>,
    {
        let max_retries = self.config.max_retries;
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 0 {
                        tracing::info!(attempt = attempt, "request succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(error) if !error.is_retryable() => {
                    tracing::warn!(error = %error, "non-retryable error");
                    return Err(error);
                }
                Err(error) if attempt >= max_retries => {
                    if max_retries > 0 {
                        tracing::error!(attempts = attempt + 1, "all retry attempts exhausted");
                    }
                    return Err(error);
                }
                Err(error) => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        "Request failed (attempt {}/{}): {}. Retrying in {:.2}s...",
                        attempt + 1,
                        max_retries + 1,
                        error,
                        delay.as_secs_f64()
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

/// Exponential backoff with up to 50% jitter
/// Exponential backoff with up to 50% jitter, never longer than 30 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let base_ms = BASE_DELAY_MS
        .saturating_mul(2_u64.saturating_pow(attempt))
        .min(MAX_DELAY_MS);
    let jitter_ms = rand::thread_rng().gen_range(0..=base_ms / 2);
    Duration::from_millis((base_ms + jitter_ms).min(MAX_DELAY_MS))
}
