// hcetag/src/source/async_source.rs
//! Async payload sources (feature `async`).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Handle;

use crate::source::{FetchOutcome, PayloadSource};
use crate::types::ActivePayload;
use crate::{Error, Result};

/// Async counterpart of [`PayloadSource`] for data layers built on tokio.
#[async_trait]
pub trait AsyncPayloadSource: Send + Sync {
    async fn active_payload(&self) -> Result<Option<ActivePayload>>;
}

/// Fetch from an async source under a tokio deadline.
pub async fn fetch_active_payload_async<S>(source: &S, timeout: Duration) -> FetchOutcome
where
    S: AsyncPayloadSource + ?Sized,
{
    match tokio::time::timeout(timeout, source.active_payload()).await {
        Ok(Ok(Some(payload))) => FetchOutcome::Found(payload),
        Ok(Ok(None)) => FetchOutcome::Empty,
        Ok(Err(e)) => FetchOutcome::Unavailable(e),
        Err(_) => FetchOutcome::Unavailable(Error::Timeout),
    }
}

/// Exposes an async source through the blocking [`PayloadSource`] trait.
///
/// The emulator calls sources from its own fetch worker thread, never
/// from inside the runtime, so blocking on the handle is safe there.
pub struct AsyncSourceBridge {
    handle: Handle,
    inner: Arc<dyn AsyncPayloadSource>,
}

impl AsyncSourceBridge {
    /// Bridge blocking on `handle`.
    pub fn new(handle: Handle, inner: Arc<dyn AsyncPayloadSource>) -> Self {
        Self { handle, inner }
    }
}

impl PayloadSource for AsyncSourceBridge {
    fn active_payload(&self) -> Result<Option<ActivePayload>> {
        let inner = Arc::clone(&self.inner);
        self.handle.block_on(async move { inner.active_payload().await })
    }
}
