use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

const ROWS: usize = 4;
const MAX_COUNT: u8 = 15;
const MIN_WIDTH: usize = 16;
const RESET_FACTOR: usize = 10;
const SEEDS: [u64; ROWS] = [
    0xc3a5_c85c_97cb_3127,
    0xb492_b66f_be98_f273,
    0x9ae1_6a3b_2f90_404f,
    0xcbf2_9ce4_8422_2325,
];

/// Count-min sketch of recent key popularity.
///
/// Four rows of 4-bit saturating counters (stored one per `AtomicU8`). The
/// estimate for a key is the minimum across rows. After `10 × width`
/// increments every counter is halved so that old popularity decays.
pub struct FrequencySketch {
    rows: [Box<[AtomicU8]>; ROWS],
    mask: usize,
    additions: AtomicUsize,
    reset_at: usize,
}

impl FrequencySketch {
    pub fn new(width: usize) -> Self {
        let width = width.max(MIN_WIDTH).next_power_of_two();
        let rows = std::array::from_fn(|_| (0..width).map(|_| AtomicU8::new(0)).collect());

        Self {
            rows,
            mask: width - 1,
            additions: AtomicUsize::new(0),
            reset_at: width * RESET_FACTOR,
        }
    }

    pub fn width(&self) -> usize {
        self.mask + 1
    }

    pub fn increment(&self, key: &str) {
        let hash = Self::hash(key);
        for (row, counters) in self.rows.iter().enumerate() {
            let counter = &counters[self.index(hash, row)];
            let _ = counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
                (c < MAX_COUNT).then_some(c + 1)
            });
        }

        // fetch_add hands out unique values, so exactly one caller triggers each reset.
        if self.additions.fetch_add(1, Ordering::Relaxed) + 1 == self.reset_at {
            self.halve();
            self.additions
                .fetch_sub(self.reset_at / 2, Ordering::Relaxed);
        }
    }

    pub fn estimate(&self, key: &str) -> u8 {
        let hash = Self::hash(key);
        self.rows
            .iter()
            .enumerate()
            .map(|(row, counters)| counters[self.index(hash, row)].load(Ordering::Relaxed))
            .min()
            .unwrap_or(0)
    }

    pub fn clear(&self) {
        for counters in &self.rows {
            for counter in counters.iter() {
                counter.store(0, Ordering::Relaxed);
            }
        }
        self.additions.store(0, Ordering::Relaxed);
    }

    fn halve(&self) {
        for counters in &self.rows {
            for counter in counters.iter() {
                let _ = counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| Some(c >> 1));
            }
        }
    }

    #[inline]
    fn hash(key: &str) -> u64 {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[inline]
    fn index(&self, hash: u64, row: usize) -> usize {
        let mixed = (hash ^ SEEDS[row]).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        (mixed >> 32) as usize & self.mask
    }
}
