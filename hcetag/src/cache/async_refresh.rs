// hcetag/src/cache/async_refresh.rs
//! Cache refresh driven by a tokio watch channel (feature `async`).

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::cache::PayloadCache;
use crate::types::ActivePayload;

/// Spawn a task that mirrors the watched payload into the cache. The
/// current value is applied immediately; the task ends when the sender
/// is dropped.
pub fn spawn_async_refresher(
    cache: Arc<PayloadCache>,
    mut updates: watch::Receiver<Option<ActivePayload>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let current = updates.borrow_and_update().clone();
            cache.update(current.as_ref());
            if updates.changed().await.is_err() {
                break;
            }
        }
    })
}
