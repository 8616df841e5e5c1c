use log::trace;

use crate::common::types::{Frame, FrameId, PageTableEntry};

/// Clock (second-chance) page replacement policy.
///
/// The frame array is treated as a circle with a single hand. Use bits live
/// in the page table entries; the replacer only owns the hand.
#[derive(Debug)]
pub struct ClockReplacer {
    hand: FrameId,
    pool_size: usize,
}

impl ClockReplacer {
    pub fn new(pool_size: usize) -> Self {
        Self { hand: 0, pool_size }
    }

    /// Current hand position
    pub fn hand(&self) -> FrameId {
        self.hand
    }

    /// Mark the entry as referenced. The hand does not move.
    pub fn record_access(&mut self, entry: &mut PageTableEntry) {
        entry.use_bit = true;
    }

    /// Sweep from the hand, clearing use bits until an unreferenced page is found.
    ///
    /// The hand ends up one past the victim. A full sweep clears every bit, so
    /// a victim is always found within `2 * pool_size` steps when any slot is
    /// occupied. A frame slice of the wrong size yields no victim.
    pub fn victim<F>(&mut self, frames: &mut [Frame], mut on_use_bit_cleared: F) -> Option<FrameId>
    where
        F: FnMut(&PageTableEntry),
    {
        let len = self.pool_size;
        if len == 0 || frames.len() != len {
            return None;
        }

        for _ in 0..2 * len {
            let slot = self.hand;
            self.hand = (self.hand + 1) % len;
            trace!("Clock hand at frame {}", slot);

            let Some(entry) = frames[slot].as_mut() else {
                continue;
            };
            if entry.use_bit {
                entry.use_bit = false;
                on_use_bit_cleared(entry);
            } else {
                return Some(slot);
            }
        }

        None
    }
}
