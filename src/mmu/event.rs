use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::types::{AccessKind, FrameId, PageNumber};

/// Something that happened inside the MMU while serving an access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MmuEvent {
    Hit { page: PageNumber, kind: AccessKind },
    Fault { page: PageNumber, kind: AccessKind },
    UseBitCleared { page: PageNumber, frame: FrameId },
    Evicted { page: PageNumber, frame: FrameId, dirty: bool },
    Loaded { page: PageNumber, frame: FrameId },
}

/// Receives MMU events as they happen
pub trait MmuObserver: Send {
    fn on_event(&mut self, event: &MmuEvent);
}

/// Observer that keeps every event it sees.
///
/// Clones share the same buffer, so a test can hand one clone to the MMU
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<MmuEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events
    pub fn events(&self) -> Vec<MmuEvent> {
        self.events.lock().clone()
    }

    /// Remove and return recorded events
    pub fn drain(&self) -> Vec<MmuEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl MmuObserver for EventRecorder {
    fn on_event(&mut self, event: &MmuEvent) {
        self.events.lock().push(event.clone());
    }
}
