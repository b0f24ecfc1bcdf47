// hcetag/src/cache/mod.rs
//! Fast-path cache of the serialized NDEF file.
//!
//! The host application writes here whenever its active payload changes;
//! the emulator reads on application SELECT and skips the slow fetch on a
//! hit. One writer, one reader at a time, lock-free publication through
//! `ArcSwapOption`. A read may see the previous value for one tap.

#[cfg(feature = "async")]
pub mod async_refresh;
pub mod refresher;

#[cfg(feature = "async")]
pub use async_refresh::spawn_async_refresher;
pub use refresher::spawn_cache_refresher;

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::constants::DEFAULT_LANGUAGE_CODE;
use crate::ndef;
use crate::types::ActivePayload;

/// Single-slot cell holding the pre-built NDEF file, or nothing.
#[derive(Debug)]
pub struct PayloadCache {
    slot: ArcSwapOption<Vec<u8>>,
    language_code: String,
}

impl Default for PayloadCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadCache {
    /// Cache that builds text records in the default language.
    pub fn new() -> Self {
        Self::with_language_code(DEFAULT_LANGUAGE_CODE)
    }

    /// Cache that builds text records in `language_code`.
    pub fn with_language_code(language_code: &str) -> Self {
        Self {
            slot: ArcSwapOption::from(None),
            language_code: language_code.to_string(),
        }
    }

    /// Serialize and publish the new active payload. `None` publishes the
    /// "no active card" file.
    pub fn update(&self, payload: Option<&ActivePayload>) {
        let file = ndef::ndef_file_for(payload, &self.language_code);
        log::debug!("payload cache updated ({} bytes)", file.len());
        self.slot.store(Some(Arc::new(file)));
    }

    /// Drop the cached file so that the next SELECT fetches from the source.
    pub fn clear(&self) {
        self.slot.store(None);
    }

    /// Language code used for the text records this cache builds.
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// The cached NDEF file, if one has been published.
    pub fn load(&self) -> Option<Arc<Vec<u8>>> {
        self.slot.load_full()
    }

    /// Whether a file has been published and not cleared since.
    pub fn is_populated(&self) -> bool {
        self.slot.load().is_some()
    }
}
