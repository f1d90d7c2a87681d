use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response cache configuration
///
/// Catalog data changes very rarely, but 10 minutes keeps the TTL honest for
/// upstreams that do update. ~128MB holds many responses without claiming an
/// unreasonable amount of memory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum aggregate size of cached bodies in bytes (default: 1 << 27)
    #[serde(default = "default_max_cost_bytes")]
    pub max_cost_bytes: u64,

    /// Time to live of every admitted entry in seconds (default: 600)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Keep hit/miss/insertion counters (default: false)
    #[serde(default)]
    pub metrics_enabled: bool,

    /// Resident entries sampled per eviction round (default: 5)
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Interval of the background sweep of expired entries in seconds.
    /// 0 disables the sweep; expiry on read still applies. (default: 60)
    #[serde(default = "default_compaction_interval_secs")]
    pub compaction_interval_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_cost_bytes: default_max_cost_bytes(),
            ttl_secs: default_ttl_secs(),
            metrics_enabled: false,
            sample_size: default_sample_size(),
            compaction_interval_secs: default_compaction_interval_secs(),
        }
    }
}

fn default_max_cost_bytes() -> u64 {
    1 << 27
}

fn default_ttl_secs() -> u64 {
    600
}

fn default_sample_size() -> usize {
    5
}

fn default_compaction_interval_secs() -> u64 {
    60
}
