// hcetag/src/emulator/builder.rs
//! Builder for [`TagEmulator`](crate::emulator::TagEmulator).

use std::sync::Arc;
use std::time::Duration;

use crate::cache::PayloadCache;
use crate::emulator::config::EmulatorConfig;
use crate::emulator::dispatcher::TagEmulator;
use crate::source::PayloadSource;
use crate::{Error, Result};

/// Helper to construct a [`TagEmulator`] with optional configuration.
#[derive(Default)]
pub struct TagEmulatorBuilder {
    source: Option<Arc<dyn PayloadSource>>,
    cache: Option<Arc<PayloadCache>>,
    config: EmulatorConfig,
}

impl TagEmulatorBuilder {
    /// Builder with the default configuration and no source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the active payload comes from. Required.
    pub fn with_source(mut self, source: Arc<dyn PayloadSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Fast-path cache consulted before the source.
    pub fn with_cache(mut self, cache: Arc<PayloadCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: EmulatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Budget for the payload fetch on application SELECT.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch_timeout = timeout;
        self
    }

    /// Language code for text records. A cache passed to
    /// [`with_cache`](Self::with_cache) must use the same code.
    pub fn with_language_code(mut self, language_code: &str) -> Self {
        self.config.language_code = language_code.to_string();
        self
    }

    /// Returns `SourceNotConfigured` when no source was provided, and
    /// `LanguageMismatch` when the cache builds text records in another
    /// language than the configured one.
    pub fn build(self) -> Result<TagEmulator> {
        let source = self.source.ok_or(Error::SourceNotConfigured)?;
        if let Some(cache) = &self.cache {
            if cache.language_code() != self.config.language_code {
                return Err(Error::LanguageMismatch {
                    config: self.config.language_code,
                    cache: cache.language_code().to_string(),
                });
            }
        }
        Ok(TagEmulator::from_parts(source, self.cache, self.config))
    }
}
