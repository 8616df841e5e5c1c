use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mmu::error::{MmuError, Result};

/// Page replacement policy selected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementPolicy {
    Random,
    Lru,
    Clock,
}

impl FromStr for ReplacementPolicy {
    type Err = MmuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rand" | "random" => Ok(ReplacementPolicy::Random),
            "lru" => Ok(ReplacementPolicy::Lru),
            "clock" => Ok(ReplacementPolicy::Clock),
            other => Err(MmuError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementPolicy::Random => write!(f, "rand"),
            ReplacementPolicy::Lru => write!(f, "lru"),
            ReplacementPolicy::Clock => write!(f, "clock"),
        }
    }
}

/// Configuration for an MMU instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MmuConfig {
    /// Number of physical frames
    pub frames: usize,

    /// Replacement policy
    pub policy: ReplacementPolicy,

    /// Seed for the random replacer; entropy is used when absent
    pub seed: Option<u64>,
}

impl Default for MmuConfig {
    fn default() -> Self {
        Self {
            frames: 64,
            policy: ReplacementPolicy::Lru,
            seed: None,
        }
    }
}

impl MmuConfig {
    pub fn new(frames: usize, policy: ReplacementPolicy) -> Self {
        Self {
            frames,
            policy,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(MmuError::InvalidFrameCount(self.frames));
        }
        Ok(())
    }
}
