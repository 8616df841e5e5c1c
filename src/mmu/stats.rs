use serde::{Deserialize, Serialize};

/// Running counters of an MMU instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MmuStats {
    pub page_faults: u64,
    pub disk_reads: u64,
    pub disk_writes: u64,
    pub hits: u64,
}

impl MmuStats {
    /// Total accesses served
    pub fn accesses(&self) -> u64 {
        self.hits + self.page_faults
    }

    /// Fraction of accesses that faulted, 0.0 before any access
    pub fn fault_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            n => self.page_faults as f64 / n as f64,
        }
    }
}
