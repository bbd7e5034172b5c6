//! Trace file ingestion.
//!
//! Instruction-set simulators dump one CSV row per retired instruction.
//! The first row names the columns; every later row is one record.

/// Header and record types.
pub mod record;

/// Streaming CSV reader with row-shape validation.
pub mod reader;

pub use reader::{Row, TraceReader};
pub use record::{Header, TraceRecord, REQUIRED_COLUMNS};
