//! Duration helpers for the fetch budget.

use std::time::Duration;

use crate::constants::DEFAULT_FETCH_TIMEOUT_MS;

/// Milliseconds as a [`Duration`].
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// [`DEFAULT_FETCH_TIMEOUT_MS`] as a [`Duration`].
pub fn default_fetch_timeout() -> Duration {
    ms(DEFAULT_FETCH_TIMEOUT_MS)
}
