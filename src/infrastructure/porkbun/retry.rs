//! Retry policy applied to every outbound provider call.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

/// Longest single wait between two attempts.
const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Exponential backoff settings fixed at client construction.
///
/// After the first attempt, up to `max_retries` more are made, waiting
/// `backoff`, `2 * backoff`, `4 * backoff`, ... in between (capped at two
/// minutes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: usize, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// A policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Delays between attempts, one per retry.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        // ExponentialBackoff yields factor * base^n starting at n = 1, so halve
        // each step to start at exactly `backoff`.
        let factor = u64::try_from(self.backoff.as_millis()).unwrap_or(u64::MAX);
        ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(MAX_BACKOFF * 2)
            .map(|delay| delay / 2)
            .take(self.max_retries)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(1))
    }
}
