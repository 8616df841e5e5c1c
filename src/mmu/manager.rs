use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;
use rand::RngCore;

use crate::common::types::{AccessKind, Frame, FrameId, PageNumber, PageTableEntry};
use crate::mmu::config::{MmuConfig, ReplacementPolicy};
use crate::mmu::error::{MmuError, Result};
use crate::mmu::event::{MmuEvent, MmuObserver};
use crate::mmu::replacer::Replacer;
use crate::mmu::stats::MmuStats;

/// Simulated memory management unit with a fixed number of physical frames
pub struct Mmu {
    frames: Vec<Frame>,
    page_table: HashMap<PageNumber, FrameId>,
    free_list: VecDeque<FrameId>,
    replacer: Replacer,
    stats: MmuStats,
    observer: Option<Box<dyn MmuObserver>>,
}

impl Mmu {
    pub fn new(config: MmuConfig) -> Result<Self> {
        config.validate()?;
        let replacer = Replacer::from_config(&config);
        Ok(Self::build(config.frames, replacer))
    }

    pub fn with_frames(frames: usize, policy: ReplacementPolicy) -> Result<Self> {
        Self::new(MmuConfig::new(frames, policy))
    }

    /// Random-replacement MMU drawing victims from the given source
    pub fn with_rng(frames: usize, rng: Box<dyn RngCore + Send>) -> Result<Self> {
        MmuConfig::new(frames, ReplacementPolicy::Random).validate()?;
        Ok(Self::build(frames, Replacer::random_with(rng)))
    }

    fn build(pool_size: usize, replacer: Replacer) -> Self {
        Self {
            frames: vec![None; pool_size],
            page_table: HashMap::with_capacity(pool_size),
            free_list: (0..pool_size).collect(),
            replacer,
            stats: MmuStats::default(),
            observer: None,
        }
    }

    /// Install an observer that receives every MMU event
    pub fn set_observer(&mut self, observer: Box<dyn MmuObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn read(&mut self, page_number: PageNumber) {
        self.access(page_number, AccessKind::Read);
    }

    pub fn write(&mut self, page_number: PageNumber) {
        self.access(page_number, AccessKind::Write);
    }

    /// Serve one memory access, faulting the page in if it is not resident
    pub fn access(&mut self, page_number: PageNumber, kind: AccessKind) {
        if let Some(&frame_id) = self.page_table.get(&page_number) {
            self.stats.hits += 1;
            let Some(entry) = self.frames[frame_id].as_mut() else {
                panic!("page {} maps to empty frame {}", page_number, frame_id);
            };
            if kind.is_write() {
                entry.dirty = true;
            }
            self.replacer.record_access(entry);
            debug!("Access {} page {} in frame {}", kind, page_number, frame_id);
            self.emit(MmuEvent::Hit { page: page_number, kind });
            return;
        }

        debug!("Page fault at page {}", page_number);
        self.stats.page_faults += 1;
        self.stats.disk_reads += 1;
        self.emit(MmuEvent::Fault { page: page_number, kind });

        let frame_id = self.allocate_frame();
        self.load_page(page_number, frame_id, kind.is_write());
    }

    /// Take a free frame, or evict the replacer's victim when all are in use
    fn allocate_frame(&mut self) -> FrameId {
        if let Some(frame_id) = self.free_list.pop_front() {
            return frame_id;
        }

        let observer = &mut self.observer;
        let victim = self.replacer.victim(&mut self.frames, |entry| {
            debug!("Clear use bit for page {}", entry.page_number);
            if let Some(observer) = observer.as_mut() {
                observer.on_event(&MmuEvent::UseBitCleared {
                    page: entry.page_number,
                    frame: entry.frame_id,
                });
            }
        });
        let Some(frame_id) = victim else {
            panic!(
                "{} replacer found no victim with all {} frames occupied",
                self.replacer.policy(),
                self.frames.len()
            );
        };

        self.evict(frame_id);
        frame_id
    }

    fn evict(&mut self, frame_id: FrameId) {
        let Some(entry) = self.frames[frame_id].take() else {
            panic!("victim frame {} is empty", frame_id);
        };
        self.page_table.remove(&entry.page_number);
        self.replacer.remove(frame_id);

        if entry.dirty {
            self.stats.disk_writes += 1;
            debug!("Write page {} to disk", entry.page_number);
        }
        debug!("Evict page {} from frame {}", entry.page_number, frame_id);
        self.emit(MmuEvent::Evicted {
            page: entry.page_number,
            frame: frame_id,
            dirty: entry.dirty,
        });
    }

    fn load_page(&mut self, page_number: PageNumber, frame_id: FrameId, dirty: bool) {
        let entry = self.frames[frame_id].insert(PageTableEntry::new(page_number, frame_id, dirty));
        self.replacer.record_access(entry);
        self.page_table.insert(page_number, frame_id);

        debug!("Load new page {} into frame {}", page_number, frame_id);
        self.emit(MmuEvent::Loaded {
            page: page_number,
            frame: frame_id,
        });
    }

    fn emit(&mut self, event: MmuEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }

    pub fn total_disk_reads(&self) -> u64 {
        self.stats.disk_reads
    }

    pub fn total_disk_writes(&self) -> u64 {
        self.stats.disk_writes
    }

    pub fn total_page_faults(&self) -> u64 {
        self.stats.page_faults
    }

    pub fn stats(&self) -> MmuStats {
        self.stats
    }

    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    pub fn policy(&self) -> ReplacementPolicy {
        self.replacer.policy()
    }

    pub fn resident_count(&self) -> usize {
        self.page_table.len()
    }

    pub fn is_resident(&self, page_number: PageNumber) -> bool {
        self.page_table.contains_key(&page_number)
    }

    pub fn entry(&self, page_number: PageNumber) -> Option<&PageTableEntry> {
        let frame_id = *self.page_table.get(&page_number)?;
        self.frames[frame_id].as_ref()
    }

    pub fn is_dirty(&self, page_number: PageNumber) -> Option<bool> {
        self.entry(page_number).map(|entry| entry.dirty)
    }

    pub fn frame_of(&self, page_number: PageNumber) -> Option<FrameId> {
        self.page_table.get(&page_number).copied()
    }

    /// Resident pages in frame order
    pub fn resident_pages(&self) -> Vec<PageNumber> {
        self.frames
            .iter()
            .flatten()
            .map(|entry| entry.page_number)
            .collect()
    }

    /// Position of the clock hand, for the clock policy only
    pub fn clock_hand(&self) -> Option<FrameId> {
        match &self.replacer {
            Replacer::Clock(clock) => Some(clock.hand()),
            _ => None,
        }
    }

    /// Resident pages from least to most recently used, for the LRU policy only
    pub fn lru_order(&self) -> Option<Vec<PageNumber>> {
        match &self.replacer {
            Replacer::Lru(lru) => Some(
                lru.order()
                    .into_iter()
                    .filter_map(|frame_id| self.frames[frame_id].as_ref())
                    .map(|entry| entry.page_number)
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Verify the page table, frame array and free list agree with each other
    pub fn check_invariants(&self) -> Result<()> {
        let violation = |msg: String| Err(MmuError::InvariantViolation(msg));

        let occupied = self.frames.iter().filter(|frame| frame.is_some()).count();
        if occupied != self.page_table.len() {
            return violation(format!(
                "{} occupied frames but {} page table entries",
                occupied,
                self.page_table.len()
            ));
        }
        if self.page_table.len() > self.frames.len() {
            return violation(format!(
                "{} resident pages exceed {} frames",
                self.page_table.len(),
                self.frames.len()
            ));
        }
        if occupied + self.free_list.len() != self.frames.len() {
            return violation(format!(
                "{} occupied and {} free frames do not add up to {}",
                occupied,
                self.free_list.len(),
                self.frames.len()
            ));
        }

        let mut seen = HashSet::with_capacity(self.page_table.len());
        for (&page_number, &frame_id) in &self.page_table {
            if frame_id >= self.frames.len() {
                return violation(format!(
                    "page {} maps to out-of-range frame {}",
                    page_number, frame_id
                ));
            }
            if !seen.insert(frame_id) {
                return violation(format!("frame {} is referenced twice", frame_id));
            }
            match &self.frames[frame_id] {
                Some(entry) if entry.page_number == page_number && entry.frame_id == frame_id => {}
                _ => {
                    return violation(format!(
                        "frame {} does not hold page {}",
                        frame_id, page_number
                    ))
                }
            }
        }

        if let Replacer::Lru(lru) = &self.replacer {
            if lru.len() != occupied {
                return violation(format!(
                    "LRU tracks {} frames but {} are occupied",
                    lru.len(),
                    occupied
                ));
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for Mmu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mmu")
            .field("frames", &self.frames)
            .field("page_table", &self.page_table)
            .field("replacer", &self.replacer)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
