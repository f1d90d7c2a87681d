use super::ResponseCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Background task that periodically sweeps expired entries out of a
/// [`ResponseCache`].
pub struct CacheJanitor {
    cache: Arc<ResponseCache>,
    interval: Duration,
}

impl CacheJanitor {
    pub fn new(cache: Arc<ResponseCache>, interval: Duration) -> Self {
        Self { cache, interval }
    }

    /// Start the compaction loop. It stops once `shutdown` is cancelled.
    pub fn start(self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                interval_secs = self.interval.as_secs(),
                "Background compaction started"
            );

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = sleep(self.interval) => Self::compaction_cycle(&self.cache),
                }
            }

            debug!("Background compaction stopped");
        })
    }

    fn compaction_cycle(cache: &ResponseCache) {
        debug!("Starting background compaction cycle");

        let removed = cache.compact();

        if removed > 0 {
            info!(
                removed = removed,
                cache_size = cache.len(),
                "Background compaction completed"
            );
        } else {
            debug!("No entries to compact");
        }
    }
}
