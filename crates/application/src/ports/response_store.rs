use bytes::Bytes;

/// Process-local store of raw responses keyed by request URL.
///
/// Both methods are synchronous and never fail. `set` is best-effort: it
/// returns `false` when the admission policy rejects the entry, and callers
/// must not assume an entry persists. An admitted entry is visible to every
/// caller as soon as `set` returns.
pub trait ResponseStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Bytes>;

    fn set(&self, key: &str, value: Bytes) -> bool;
}
