#![allow(dead_code)]

use std::io::Write;

use anyhow::Result;
use rand::prelude::*;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

use mmusim::{AccessKind, Mmu, MmuConfig, PageNumber, ReplacementPolicy};

pub const ALL_POLICIES: [ReplacementPolicy; 3] = [
    ReplacementPolicy::Random,
    ReplacementPolicy::Lru,
    ReplacementPolicy::Clock,
];

// Create an MMU with a fixed seed so random runs are reproducible
pub fn create_test_mmu(frames: usize, policy: ReplacementPolicy) -> Result<Mmu> {
    Ok(Mmu::new(MmuConfig::new(frames, policy).with_seed(0xC0FFEE))?)
}

// Generate a random access sequence over `pages` distinct page numbers
pub fn generate_accesses(seed: u64, len: usize, pages: i64) -> Vec<(PageNumber, AccessKind)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let page = rng.gen_range(0..pages);
            let kind = if rng.gen_bool(0.3) { AccessKind::Write } else { AccessKind::Read };
            (page, kind)
        })
        .collect()
}

// Write trace lines to a temporary file
pub fn create_trace_file(lines: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    Ok(file)
}
