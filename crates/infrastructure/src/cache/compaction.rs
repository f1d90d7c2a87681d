use super::storage::ResponseCache;
use std::sync::atomic::Ordering as AtomicOrdering;
use tracing::debug;

impl ResponseCache {
    /// Physically remove every expired entry. Returns the number removed.
    pub fn compact(&self) -> usize {
        let _guard = self.lock_writes();
        let now = self.clock.now();
        let mut removed = 0;
        let mut reclaimed = 0;

        self.entries.retain(|_key, entry| {
            if entry.is_expired(now) {
                removed += 1;
                reclaimed += entry.cost;
                false
            } else {
                true
            }
        });

        if removed > 0 {
            self.cost.fetch_sub(reclaimed, AtomicOrdering::Relaxed);
            self.record(&self.metrics.expirations, removed as u64);

            debug!(
                removed,
                reclaimed_bytes = reclaimed,
                cache_size = self.entries.len(),
                "Cache compaction completed"
            );
        }

        removed
    }
}
