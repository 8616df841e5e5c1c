use linked_hash_map::LinkedHashMap;

use crate::common::types::FrameId;

/// LRU (Least Recently Used) page replacement policy.
///
/// Frames are kept in access order: the front of the map is the least
/// recently used frame, the back the most recently used. Every operation
/// is O(1).
#[derive(Debug, Default)]
pub struct LruReplacer {
    lru_list: LinkedHashMap<FrameId, ()>,
}

impl LruReplacer {
    pub fn new(pool_size: usize) -> Self {
        Self {
            lru_list: LinkedHashMap::with_capacity(pool_size),
        }
    }

    /// Record that a frame has been accessed or loaded
    pub fn record_access(&mut self, frame_id: FrameId) {
        if self.lru_list.get_refresh(&frame_id).is_none() {
            self.lru_list.insert(frame_id, ());
        }
    }

    /// Remove a frame from the replacer
    pub fn remove(&mut self, frame_id: FrameId) {
        self.lru_list.remove(&frame_id);
    }

    /// Victim selection: take the least recently used frame
    pub fn victim(&mut self) -> Option<FrameId> {
        self.lru_list.pop_front().map(|(frame_id, _)| frame_id)
    }

    pub fn len(&self) -> usize {
        self.lru_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lru_list.is_empty()
    }

    /// Frames from least to most recently used
    pub fn order(&self) -> Vec<FrameId> {
        self.lru_list.keys().copied().collect()
    }
}
