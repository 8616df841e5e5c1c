pub mod error;
pub mod parser;

pub use error::TraceError;
pub use parser::{parse_trace, parse_trace_file, replay, TraceRecord, PAGE_OFFSET_BITS};
