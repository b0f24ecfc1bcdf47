// hcetag/src/source/mod.rs
//! Access to the payload the data layer currently wants broadcast.
//!
//! The emulator asks for the active payload while a reader is waiting on
//! an application SELECT, so every fetch runs against a deadline through
//! a [`PayloadFetcher`].

#[cfg(feature = "async")]
pub mod async_source;
pub mod fetcher;
pub mod mock;
pub mod static_source;

#[cfg(feature = "async")]
pub use async_source::{AsyncPayloadSource, AsyncSourceBridge, fetch_active_payload_async};
pub use fetcher::PayloadFetcher;
pub use mock::MockSource;
pub use static_source::{FnSource, StaticSource};

use crate::types::ActivePayload;
use crate::{Error, Result};

/// Synchronous accessor implemented by the data layer.
///
/// `Ok(None)` means the store answered and there is no active card.
pub trait PayloadSource: Send + Sync {
    /// Current active payload, or `None` when nothing is active.
    fn active_payload(&self) -> Result<Option<ActivePayload>>;
}

/// Result of a bounded fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The store returned an active payload in time.
    Found(ActivePayload),
    /// The store answered: nothing is active.
    Empty,
    /// Timeout, store error, or the store call panicked.
    Unavailable(Error),
}

impl FetchOutcome {
    /// The fetched payload, if the store returned one.
    pub fn payload(&self) -> Option<&ActivePayload> {
        match self {
            FetchOutcome::Found(p) => Some(p),
            _ => None,
        }
    }
}
