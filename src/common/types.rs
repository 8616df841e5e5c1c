use std::fmt;

/// Page number type. Page numbers are opaque, so negative values are valid.
pub type PageNumber = i64;

/// Physical frame index type
pub type FrameId = usize;

/// Kind of memory access issued against the MMU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    Read,
    Write,
}

impl AccessKind {
    pub fn is_write(self) -> bool {
        matches!(self, AccessKind::Write)
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Read => write!(f, "R"),
            AccessKind::Write => write!(f, "W"),
        }
    }
}

/// Page table entry for a resident page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTableEntry {
    pub page_number: PageNumber,
    pub frame_id: FrameId,
    /// Set when the page has been written since it was loaded
    pub dirty: bool,
    /// Reference bit consulted by the clock replacer
    pub use_bit: bool,
}

impl PageTableEntry {
    /// A freshly loaded page counts as just used.
    pub fn new(page_number: PageNumber, frame_id: FrameId, dirty: bool) -> Self {
        Self {
            page_number,
            frame_id,
            dirty,
            use_bit: true,
        }
    }
}

/// Physical frame slot
pub type Frame = Option<PageTableEntry>;
