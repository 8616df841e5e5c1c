use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::types::{AccessKind, PageNumber};
use crate::mmu::config::MmuConfig;
use crate::mmu::error::Result;
use crate::mmu::manager::Mmu;
use crate::mmu::stats::MmuStats;

/// Cloneable handle that serializes access to one MMU across threads.
///
/// Every call takes the lock for its whole duration, so each access still
/// runs to completion before the next one starts.
#[derive(Clone)]
pub struct SharedMmu {
    inner: Arc<Mutex<Mmu>>,
}

impl SharedMmu {
    pub fn new(config: MmuConfig) -> Result<Self> {
        Ok(Self::from_mmu(Mmu::new(config)?))
    }

    pub fn from_mmu(mmu: Mmu) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mmu)),
        }
    }

    pub fn read(&self, page_number: PageNumber) {
        self.inner.lock().read(page_number);
    }

    pub fn write(&self, page_number: PageNumber) {
        self.inner.lock().write(page_number);
    }

    pub fn access(&self, page_number: PageNumber, kind: AccessKind) {
        self.inner.lock().access(page_number, kind);
    }

    pub fn stats(&self) -> MmuStats {
        self.inner.lock().stats()
    }

    /// Run a closure with exclusive access to the MMU
    pub fn with<R>(&self, f: impl FnOnce(&mut Mmu) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
