// hcetag/src/source/static_source.rs
//! In-memory and closure-backed payload sources.

use std::sync::{Arc, RwLock};

use crate::source::PayloadSource;
use crate::types::ActivePayload;
use crate::{Error, Result};

/// Source holding a value set by the host application.
#[derive(Debug, Default)]
pub struct StaticSource {
    payload: RwLock<Option<ActivePayload>>,
}

impl StaticSource {
    /// Source answering with `payload` until [`set`](Self::set) changes it.
    pub fn new(payload: Option<ActivePayload>) -> Self {
        Self {
            payload: RwLock::new(payload),
        }
    }

    /// Replace the value returned by subsequent fetches.
    pub fn set(&self, payload: Option<ActivePayload>) {
        match self.payload.write() {
            Ok(mut guard) => *guard = payload,
            Err(poisoned) => *poisoned.into_inner() = payload,
        }
    }
}

impl PayloadSource for StaticSource {
    fn active_payload(&self) -> Result<Option<ActivePayload>> {
        self.payload
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| Error::SourceUnavailable("payload lock poisoned".into()))
    }
}

/// Adapter turning a closure into a [`PayloadSource`], e.g. a query
/// against the host application's local database.
pub struct FnSource<F>(F);

impl<F> FnSource<F>
where
    F: Fn() -> Result<Option<ActivePayload>> + Send + Sync,
{
    /// Wrap `f`.
    pub fn new(f: F) -> Self {
        Self(f)
    }

    /// Wrap `f` as a shared trait object.
    pub fn shared(f: F) -> Arc<dyn PayloadSource>
    where
        F: 'static,
    {
        Arc::new(Self(f))
    }
}

impl<F> PayloadSource for FnSource<F>
where
    F: Fn() -> Result<Option<ActivePayload>> + Send + Sync,
{
    fn active_payload(&self) -> Result<Option<ActivePayload>> {
        (self.0)()
    }
}
