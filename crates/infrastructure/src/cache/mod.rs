pub mod clock;
pub mod compaction;
pub mod entry;
pub mod janitor;
pub mod metrics;
pub mod sketch;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use janitor::CacheJanitor;
pub use metrics::{CacheMetrics, CacheStats};
pub use sketch::FrequencySketch;
pub use storage::ResponseCache;
