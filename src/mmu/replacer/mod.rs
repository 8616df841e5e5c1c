mod clock;
mod lru;
mod random;

pub use clock::ClockReplacer;
pub use lru::LruReplacer;
pub use random::RandomReplacer;

use rand::RngCore;

use crate::common::types::{Frame, FrameId, PageTableEntry};
use crate::mmu::config::{MmuConfig, ReplacementPolicy};

/// The active page replacement policy and its private metadata
#[derive(Debug)]
pub enum Replacer {
    Random(RandomReplacer),
    Lru(LruReplacer),
    Clock(ClockReplacer),
}

impl Replacer {
    pub fn from_config(config: &MmuConfig) -> Self {
        match config.policy {
            ReplacementPolicy::Random => match config.seed {
                Some(seed) => Replacer::Random(RandomReplacer::from_seed(seed)),
                None => Replacer::Random(RandomReplacer::from_entropy()),
            },
            ReplacementPolicy::Lru => Replacer::Lru(LruReplacer::new(config.frames)),
            ReplacementPolicy::Clock => Replacer::Clock(ClockReplacer::new(config.frames)),
        }
    }

    pub fn random_with(rng: Box<dyn RngCore + Send>) -> Self {
        Replacer::Random(RandomReplacer::new(rng))
    }

    pub fn policy(&self) -> ReplacementPolicy {
        match self {
            Replacer::Random(_) => ReplacementPolicy::Random,
            Replacer::Lru(_) => ReplacementPolicy::Lru,
            Replacer::Clock(_) => ReplacementPolicy::Clock,
        }
    }

    /// Record a hit on, or a fresh load of, the page held by `entry`
    pub fn record_access(&mut self, entry: &mut PageTableEntry) {
        match self {
            Replacer::Random(_) => {}
            Replacer::Lru(lru) => lru.record_access(entry.frame_id),
            Replacer::Clock(clock) => clock.record_access(entry),
        }
    }

    /// Forget an evicted frame
    pub fn remove(&mut self, frame_id: FrameId) {
        if let Replacer::Lru(lru) = self {
            lru.remove(frame_id);
        }
    }

    /// Choose the frame to evict when every frame is occupied.
    ///
    /// `on_use_bit_cleared` is told about every entry the clock sweep passes over.
    pub fn victim<F>(&mut self, frames: &mut [Frame], on_use_bit_cleared: F) -> Option<FrameId>
    where
        F: FnMut(&PageTableEntry),
    {
        match self {
            Replacer::Random(random) => random.victim(frames),
            Replacer::Lru(lru) => lru.victim(),
            Replacer::Clock(clock) => clock.victim(frames, on_use_bit_cleared),
        }
    }
}
