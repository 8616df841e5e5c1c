use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::common::types::{AccessKind, PageNumber};
use crate::mmu::Mmu;
use crate::trace::error::{Result, TraceError};

/// Number of address bits below the page number (4 KiB pages)
pub const PAGE_OFFSET_BITS: u32 = 12;

/// One memory access read from a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    pub address: u64,
    pub kind: AccessKind,
}

impl TraceRecord {
    pub fn page_number(&self) -> PageNumber {
        (self.address >> PAGE_OFFSET_BITS) as PageNumber
    }
}

/// Parse a trace of `<hex address> <R|W>` lines.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<TraceRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(parse_line(trimmed, index + 1)?);
    }

    debug!("Parsed {} trace records", records.len());
    Ok(records)
}

pub fn parse_trace_file(path: impl AsRef<Path>) -> Result<Vec<TraceRecord>> {
    let file = File::open(path)?;
    parse_trace(BufReader::new(file))
}

fn parse_line(line: &str, line_no: usize) -> Result<TraceRecord> {
    let malformed = |reason: String| TraceError::Malformed {
        line: line_no,
        reason,
    };

    let mut fields = line.split_whitespace();
    let (Some(address), Some(op)) = (fields.next(), fields.next()) else {
        return Err(malformed("expected '<address> <R|W>'".to_string()));
    };
    if let Some(extra) = fields.next() {
        return Err(malformed(format!("unexpected trailing field '{}'", extra)));
    }

    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed(format!("bad address '{}': expected hex digits", address)));
    }
    let address = u64::from_str_radix(digits, 16)
        .map_err(|e| malformed(format!("bad address '{}': {}", address, e)))?;

    let kind = match op {
        "R" | "r" => AccessKind::Read,
        "W" | "w" => AccessKind::Write,
        other => return Err(malformed(format!("unknown operation '{}'", other))),
    };

    Ok(TraceRecord { address, kind })
}

/// Feed every record to the MMU, returning the number of accesses made
pub fn replay<'a, I>(mmu: &mut Mmu, records: I) -> usize
where
    I: IntoIterator<Item = &'a TraceRecord>,
{
    let mut events = 0;
    for record in records {
        mmu.access(record.page_number(), record.kind);
        events += 1;
    }
    events
}
