use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::common::types::{Frame, FrameId};

/// Random page replacement policy.
///
/// Keeps no access metadata. The random source is injected so that runs
/// can be reproduced from a seed.
pub struct RandomReplacer {
    rng: Box<dyn RngCore + Send>,
}

impl RandomReplacer {
    pub fn new(rng: Box<dyn RngCore + Send>) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(Box::new(StdRng::seed_from_u64(seed)))
    }

    pub fn from_entropy() -> Self {
        Self::new(Box::new(StdRng::from_entropy()))
    }

    /// Pick one of the frame slots uniformly at random.
    ///
    /// Only called once every slot is occupied; an empty pick yields `None`.
    pub fn victim(&mut self, frames: &[Frame]) -> Option<FrameId> {
        if frames.is_empty() {
            return None;
        }
        let frame_id = self.rng.gen_range(0..frames.len());
        frames[frame_id].as_ref().map(|_| frame_id)
    }
}

impl std::fmt::Debug for RandomReplacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomReplacer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::PageTableEntry;
    use rand::rngs::mock::StepRng;

    fn full_frames(count: usize) -> Vec<Frame> {
        (0..count)
            .map(|i| Some(PageTableEntry::new(i as i64 * 10, i, false)))
            .collect()
    }

    #[test]
    fn test_victim_in_bounds() {
        let frames = full_frames(4);
        let mut replacer = RandomReplacer::from_seed(42);
        for _ in 0..100 {
            let victim = replacer.victim(&frames).unwrap();
            assert!(victim < frames.len());
        }
    }

    #[test]
    fn test_same_seed_same_victims() {
        let frames = full_frames(8);
        let mut a = RandomReplacer::from_seed(7);
        let mut b = RandomReplacer::from_seed(7);
        let picks_a: Vec<_> = (0..32).map(|_| a.victim(&frames)).collect();
        let picks_b: Vec<_> = (0..32).map(|_| b.victim(&frames)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_fixed_source_picks_first_slot() {
        // A constant zero source maps to the lowest index
        let frames = full_frames(3);
        let mut replacer = RandomReplacer::new(Box::new(StepRng::new(0, 0)));
        assert_eq!(replacer.victim(&frames), Some(0));
        assert_eq!(replacer.victim(&frames), Some(0));
    }

    #[test]
    fn test_no_frames_no_victim() {
        let mut replacer = RandomReplacer::from_seed(1);
        assert_eq!(replacer.victim(&[]), None);
    }

    #[test]
    fn test_single_frame_always_chosen() {
        let frames = full_frames(1);
        let mut replacer = RandomReplacer::from_entropy();
        for _ in 0..10 {
            assert_eq!(replacer.victim(&frames), Some(0));
        }
    }
}
