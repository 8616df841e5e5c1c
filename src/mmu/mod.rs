pub mod config;
pub mod error;
pub mod event;
pub mod manager;
pub mod replacer;
pub mod shared;
pub mod stats;

pub use config::{MmuConfig, ReplacementPolicy};
pub use error::MmuError;
pub use event::{EventRecorder, MmuEvent, MmuObserver};
pub use manager::Mmu;
pub use shared::SharedMmu;
pub use stats::MmuStats;
