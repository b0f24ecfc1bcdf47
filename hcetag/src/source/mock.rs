// hcetag/src/source/mock.rs
//! Configurable payload source for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::source::PayloadSource;
use crate::types::ActivePayload;
use crate::{Error, Result};

/// Payload source for tests. Returns a configurable payload and can be
/// told to stall, fail or panic.
#[derive(Debug, Default)]
pub struct MockSource {
    payload: Mutex<Option<ActivePayload>>,
    delay: Option<Duration>,
    failure: Option<String>,
    panics: bool,
    calls: AtomicUsize,
}

impl MockSource {
    /// Mock answering with `payload`.
    pub fn new(payload: Option<ActivePayload>) -> Self {
        Self {
            payload: Mutex::new(payload),
            ..Default::default()
        }
    }

    /// Sleep this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer with `Error::SourceUnavailable(message)`.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Panic inside the store call.
    pub fn panicking(mut self) -> Self {
        self.panics = true;
        self
    }

    /// Change what later fetches return.
    pub fn set_payload(&self, payload: Option<ActivePayload>) {
        if let Ok(mut guard) = self.payload.lock() {
            *guard = payload;
        }
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PayloadSource for MockSource {
    fn active_payload(&self) -> Result<Option<ActivePayload>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if self.panics {
            panic!("mock payload source panicked");
        }
        if let Some(message) = &self.failure {
            return Err(Error::SourceUnavailable(message.clone()));
        }
        self.payload
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| Error::SourceUnavailable("mock lock poisoned".into()))
    }
}
