use super::{CacheEntry, CacheMetrics, CacheStats, Clock, FrequencySketch, SystemClock};
use bytes::Bytes;
use dashmap::DashMap;
use pokedex_application::ports::ResponseStore;
use pokedex_domain::CacheConfig;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Expected size of one upstream JSON response, used to size the sketch.
const ESTIMATED_ENTRY_COST: usize = 2048;
const MAX_SKETCH_WIDTH: usize = 1 << 20;

/// Cost-bounded, TTL-expiring store of raw upstream responses keyed by URL.
///
/// Reads never wait on a lock. Every removal or insertion happens under an
/// internal write mutex, so the resident cost never exceeds `max_cost` and
/// an entry is visible to every reader as soon as `set` returns.
///
/// When an insert would overflow the budget the cache samples resident
/// entries and weighs the least popular one against the incoming key using a
/// [`FrequencySketch`]. A key less popular than its victim is not admitted.
pub struct ResponseCache {
    pub(super) entries: DashMap<String, CacheEntry, FxBuildHasher>,
    sketch: FrequencySketch,
    pub(super) cost: AtomicUsize,
    max_cost: usize,
    ttl: Duration,
    sample_size: usize,
    metrics_enabled: bool,
    pub(super) metrics: CacheMetrics,
    pub(super) clock: Arc<dyn Clock>,
    closed: AtomicBool,
    write_lock: Mutex<()>,
}

struct Sample {
    key: String,
    expired: bool,
    frequency: u8,
}

impl ResponseCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let max_cost = config.max_cost_bytes as usize;
        let sketch_width = (max_cost / ESTIMATED_ENTRY_COST).min(MAX_SKETCH_WIDTH);

        info!(
            max_cost_bytes = max_cost,
            ttl_secs = config.ttl_secs,
            sample_size = config.sample_size,
            metrics_enabled = config.metrics_enabled,
            "Initializing response cache"
        );

        Self {
            entries: DashMap::with_hasher(FxBuildHasher::default()),
            sketch: FrequencySketch::new(sketch_width),
            cost: AtomicUsize::new(0),
            max_cost,
            ttl: config.ttl(),
            sample_size: config.sample_size.max(1),
            metrics_enabled: config.metrics_enabled,
            metrics: CacheMetrics::default(),
            clock,
            closed: AtomicBool::new(false),
            write_lock: Mutex::new(()),
        }
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        if self.is_closed() {
            return None;
        }

        self.sketch.increment(key);
        let now = self.clock.now();

        let hit = self
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone());

        match hit {
            Some(value) => {
                self.record(&self.metrics.hits, 1);
                Some(value)
            }
            None => {
                // Expired entries are dropped here only if no writer holds the lock;
                // otherwise sampling or compaction reclaims them later.
                if let Ok(_guard) = self.write_lock.try_lock() {
                    if self.remove_if_expired(key, now) {
                        self.record(&self.metrics.expirations, 1);
                    }
                }
                self.record(&self.metrics.misses, 1);
                None
            }
        }
    }

    /// Returns `true` when the value was admitted.
    pub fn set(&self, key: &str, value: Bytes) -> bool {
        if self.is_closed() {
            return false;
        }

        self.sketch.increment(key);
        let incoming = value.len();

        if incoming > self.max_cost {
            debug!(
                key = %key,
                cost = incoming,
                max_cost = self.max_cost,
                "Entry exceeds cache budget"
            );
            self.record(&self.metrics.rejections, 1);
            return false;
        }

        let _guard = self.lock_writes();
        if self.is_closed() {
            return false;
        }

        let now = self.clock.now();
        let replaced = self.entries.get(key).map(|e| e.cost).unwrap_or(0);

        while self.cost.load(AtomicOrdering::Relaxed).saturating_sub(replaced) + incoming
            > self.max_cost
        {
            let samples = self.sample(key);
            if samples.is_empty() {
                self.record(&self.metrics.rejections, 1);
                return false;
            }

            if samples.iter().any(|s| s.expired) {
                for sample in samples.iter().filter(|s| s.expired) {
                    if self.remove(&sample.key) {
                        self.record(&self.metrics.expirations, 1);
                    }
                }
                continue;
            }

            let Some(victim) = samples.iter().min_by_key(|s| s.frequency) else {
                return false;
            };

            let frequency = self.sketch.estimate(key);
            if frequency < victim.frequency {
                debug!(
                    key = %key,
                    frequency,
                    victim_frequency = victim.frequency,
                    "Entry rejected by admission policy"
                );
                self.record(&self.metrics.rejections, 1);
                return false;
            }

            if self.remove(&victim.key) {
                self.record(&self.metrics.evictions, 1);
            }
        }

        let entry = CacheEntry::new(value, now + self.ttl);
        if let Some(old) = self.entries.insert(key.to_string(), entry) {
            self.cost.fetch_sub(old.cost, AtomicOrdering::Relaxed);
        }
        self.cost.fetch_add(incoming, AtomicOrdering::Relaxed);
        self.record(&self.metrics.insertions, 1);

        true
    }

    /// Drops every entry. Later reads miss and later writes are rejected.
    pub fn close(&self) {
        let _guard = self.lock_writes();
        self.closed.store(true, AtomicOrdering::Release);
        self.entries.clear();
        self.cost.store(0, AtomicOrdering::Relaxed);
        self.sketch.clear();
        info!("Response cache closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(AtomicOrdering::Acquire)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            cost: self.cost.load(AtomicOrdering::Relaxed),
            max_cost: self.max_cost,
            hits: self.metrics.hits.load(AtomicOrdering::Relaxed),
            misses: self.metrics.misses.load(AtomicOrdering::Relaxed),
            insertions: self.metrics.insertions.load(AtomicOrdering::Relaxed),
            rejections: self.metrics.rejections.load(AtomicOrdering::Relaxed),
            evictions: self.metrics.evictions.load(AtomicOrdering::Relaxed),
            expirations: self.metrics.expirations.load(AtomicOrdering::Relaxed),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resident cost in bytes.
    pub fn cost(&self) -> usize {
        self.cost.load(AtomicOrdering::Relaxed)
    }

    pub fn max_cost(&self) -> usize {
        self.max_cost
    }

    #[inline]
    pub(super) fn record(&self, counter: &AtomicU64, n: u64) {
        if self.metrics_enabled {
            counter.fetch_add(n, AtomicOrdering::Relaxed);
        }
    }

    /// Up to `sample_size` resident entries other than `skip`, starting at a
    /// random position.
    fn sample(&self, skip: &str) -> Vec<Sample> {
        let len = self.entries.len();
        if len == 0 {
            return Vec::new();
        }

        let now = self.clock.now();
        let start = fastrand::usize(..len);

        self.entries
            .iter()
            .skip(start)
            .chain(self.entries.iter().take(start))
            .filter(|entry| entry.key().as_str() != skip)
            .take(self.sample_size)
            .map(|entry| Sample {
                key: entry.key().clone(),
                expired: entry.is_expired(now),
                frequency: self.sketch.estimate(entry.key()),
            })
            .collect()
    }

    fn remove(&self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some((_, entry)) => {
                self.cost.fetch_sub(entry.cost, AtomicOrdering::Relaxed);
                true
            }
            None => false,
        }
    }

    pub(super) fn remove_if_expired(&self, key: &str, now: Instant) -> bool {
        match self.entries.remove_if(key, |_, entry| entry.is_expired(now)) {
            Some((_, entry)) => {
                self.cost.fetch_sub(entry.cost, AtomicOrdering::Relaxed);
                true
            }
            None => false,
        }
    }

    pub(super) fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ResponseStore for ResponseCache {
    fn get(&self, key: &str) -> Option<Bytes> {
        ResponseCache::get(self, key)
    }

    fn set(&self, key: &str, value: Bytes) -> bool {
        ResponseCache::set(self, key, value)
    }
}
