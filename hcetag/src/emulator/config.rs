//! Emulator configuration

use std::time::Duration;

use crate::constants::DEFAULT_LANGUAGE_CODE;
use crate::utils::default_fetch_timeout;

/// Runtime knobs for a [`TagEmulator`](crate::emulator::TagEmulator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Budget for the payload fetch during an application SELECT
    pub fetch_timeout: Duration,
    /// Language code written into text records
    pub language_code: String,
    /// Serve from the fast-path cache when it holds a file
    pub use_cache: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: default_fetch_timeout(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            use_cache: true,
        }
    }
}
