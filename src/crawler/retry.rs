//! Generic retry loop with configurable backoff
//!
//! The retry policy is its own combinator so the transport stays a thin
//! request/classify layer and the loop can be tested deterministically with
//! tokio's paused clock.

use std::future::Future;
use std::time::Duration;

/// Backoff before the attempt after 0-indexed attempt `k`: `2^k * 1000` ms.
///
/// Uncapped and unjittered: attempt 0 fails -> wait 1s, attempt 1 -> 2s,
/// attempt 2 -> 4s, and so on.
pub fn exponential_backoff(attempt: u32) -> Duration {
    Duration::from_millis(2u64.pow(attempt) * 1000)
}

/// Runs `op` up to `1 + max_retries` times
///
/// After a failed attempt `k` (0-indexed), if `should_retry` accepts the
/// error and the attempt budget is not exhausted, sleeps for `delay_for(k)`
/// and tries again. The last observed error is returned on exhaustion; a
/// non-retryable error is returned immediately.
pub async fn retry_with_backoff<T, E, F, Fut>(
    max_retries: u32,
    delay_for: impl Fn(u32) -> Duration,
    should_retry: impl Fn(&E) -> bool,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= max_retries || !should_retry(&error) {
                    return Err(error);
                }
                let delay = delay_for(attempt);
                tracing::info!(
                    "Attempt {} failed: {}. Retrying in {:?}...",
                    attempt + 1,
                    error,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
