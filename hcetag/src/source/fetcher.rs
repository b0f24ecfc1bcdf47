// hcetag/src/source/fetcher.rs
//! Deadline-bounded fetch from a [`PayloadSource`].
//!
//! The store call runs on a worker thread and the caller waits on a
//! channel with `recv_timeout`. A store that hangs keeps its worker, so a
//! fetcher allows one store call in flight: while it runs, further
//! fetches give up at once with `Error::Timeout`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;

use crate::Error;
use crate::source::{FetchOutcome, PayloadSource};

/// Clears the in-flight flag when the worker finishes, panics included.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs bounded fetches against one source, at most one store call at a
/// time.
pub struct PayloadFetcher {
    source: Arc<dyn PayloadSource>,
    in_flight: Arc<AtomicBool>,
}

impl PayloadFetcher {
    /// Fetcher over `source` with no call in flight.
    pub fn new(source: Arc<dyn PayloadSource>) -> Self {
        Self {
            source,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a store call started by this fetcher is still running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fetch the active payload, giving up after `timeout`.
    ///
    /// A result arriving after the deadline is dropped with the channel. A
    /// panic inside the store call ends the worker without sending, which
    /// is reported as `Unavailable`.
    pub fn fetch(&self, timeout: Duration) -> FetchOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("previous payload fetch still running, not starting another");
            return FetchOutcome::Unavailable(Error::Timeout);
        }
        let guard = InFlightGuard(Arc::clone(&self.in_flight));

        let (tx, rx) = crossbeam_channel::bounded(1);
        let worker_source = Arc::clone(&self.source);
        let spawned = thread::Builder::new()
            .name("hcetag-fetch".into())
            .spawn(move || {
                let result = worker_source.active_payload();
                // Released before sending so the next fetch sees it idle.
                drop(guard);
                let _ = tx.send(result);
            });
        if let Err(e) = spawned {
            return FetchOutcome::Unavailable(Error::SourceUnavailable(format!(
                "cannot start fetch worker: {}",
                e
            )));
        }

        match rx.recv_timeout(timeout) {
            Ok(Ok(Some(payload))) => FetchOutcome::Found(payload),
            Ok(Ok(None)) => FetchOutcome::Empty,
            Ok(Err(e)) => FetchOutcome::Unavailable(e),
            Err(RecvTimeoutError::Timeout) => FetchOutcome::Unavailable(Error::Timeout),
            Err(RecvTimeoutError::Disconnected) => FetchOutcome::Unavailable(
                Error::SourceUnavailable("fetch worker exited without a result".into()),
            ),
        }
    }
}

impl std::fmt::Debug for PayloadFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadFetcher")
            .field("in_flight", &self.is_busy())
            .finish()
    }
}
