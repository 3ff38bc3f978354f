//! Bounded retry for idempotent requests.

use std::time::Duration;

use unilink_core::{Error, Result};

use crate::TRACING_TARGET;

/// Configuration for retry behavior on failed requests.
///
/// Only errors reporting [`Error::is_retryable`] are retried. The client
/// applies this policy to `GET` requests only.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (0 means no retries)
    pub max_attempts: u32,
    /// Initial backoff duration
    pub initial_backoff: Duration,
    /// Maximum backoff duration
    pub max_backoff: Duration,
    /// Backoff multiplier for exponential backoff
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration.
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff,
            ..Self::default()
        }
    }

    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 0,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            backoff_multiplier: 1.0,
        }
    }

    /// Set the maximum backoff duration.
    #[must_use]
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    /// Calculate the backoff duration for a given attempt number.
    fn calculate_backoff(&self, attempt: u32) -> Duration {
        let backoff_millis = (self.initial_backoff.as_millis() as f64)
            * self.backoff_multiplier.powi(attempt as i32);
        let backoff = Duration::from_millis(backoff_millis as u64);
        backoff.min(self.max_backoff)
    }

    /// Retry an async operation according to this configuration.
    pub async fn retry<F, Fut, T>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut last_error: Option<Error> = None;

        for attempt in 0..=self.max_attempts {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if !err.is_retryable() {
                        return Err(err);
                    }

                    if attempt < self.max_attempts {
                        let backoff = self.calculate_backoff(attempt);
                        tracing::debug!(
                            target: TRACING_TARGET,
                            error = %err,
                            attempt = attempt + 1,
                            max_attempts = self.max_attempts,
                            backoff_ms = backoff.as_millis(),
                            "Retrying request after backoff"
                        );
                        tokio::time::sleep(backoff).await;
                    }

                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            Error::network().with_message("All retry attempts exhausted with no error")
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn test_no_retry() {
        let config = RetryConfig::no_retry();
        assert_eq!(config.max_attempts, 0);
    }

    #[test]
    fn test_backoff_calculation() {
        let config = RetryConfig::default();
        assert_eq!(config.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(config.calculate_backoff(1), Duration::from_millis(200));
        assert_eq!(config.calculate_backoff(2), Duration::from_millis(400));
    }

    #[test]
    fn test_max_backoff() {
        let config = RetryConfig::default().with_max_backoff(Duration::from_millis(300));
        assert_eq!(config.calculate_backoff(2), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_success_after_retries() {
        let config = RetryConfig::default();
        let call_count = Arc::new(AtomicU32::new(0));

        let result = config
            .retry(|| {
                let count = call_count.clone();
                async move {
                    let current = count.fetch_add(1, Ordering::SeqCst) + 1;
                    if current < 3 {
                        Err(Error::http(503))
                    } else {
                        Ok(42)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_non_retryable_error() {
        let config = RetryConfig::default();
        let call_count = Arc::new(AtomicU32::new(0));

        let result = config
            .retry(|| {
                let count = call_count.clone();
                async move {
                    count.fetch_add(1, Ordering::SeqCst);
                    Err::<i32, _>(Error::http(404))
                }
            })
            .await;

        assert_eq!(result.unwrap_err().status(), Some(404));
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_exhausted_returns_last_error() {
        let config = RetryConfig::new(2, Duration::from_millis(10));
        let call_count = Arc::new(AtomicU32::new(0));

        let result = config
            .retry(|| {
                let count = call_count.clone();
                async move {
                    count.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(Error::timeout())
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }
}
