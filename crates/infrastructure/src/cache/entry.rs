use bytes::Bytes;
use std::time::Instant;

/// One cached upstream response. `cost` is the byte length of `value`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Bytes,
    pub cost: usize,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(value: Bytes, expires_at: Instant) -> Self {
        Self {
            cost: value.len(),
            value,
            expires_at,
        }
    }

    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
