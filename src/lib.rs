// mmusim - page replacement simulator

pub mod common;
pub mod mmu;
pub mod trace;

// Re-export key items for convenient access
pub use common::types::{AccessKind, FrameId, PageNumber, PageTableEntry};
pub use mmu::{
    EventRecorder, Mmu, MmuConfig, MmuError, MmuEvent, MmuObserver, MmuStats, ReplacementPolicy,
    SharedMmu,
};
pub use trace::{TraceError, TraceRecord};
