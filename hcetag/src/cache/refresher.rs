// hcetag/src/cache/refresher.rs
//! Thread that keeps the cache in step with payload notifications.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;

use crate::cache::PayloadCache;
use crate::types::ActivePayload;

/// Start a thread that applies "payload changed" notifications to the
/// cache. The thread exits once every sender is dropped.
pub fn spawn_cache_refresher(
    cache: Arc<PayloadCache>,
    updates: Receiver<Option<ActivePayload>>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("hcetag-cache".into())
        .spawn(move || {
            for update in updates.iter() {
                cache.update(update.as_ref());
            }
            log::debug!("payload notifications closed, cache refresher exiting");
        })
}
