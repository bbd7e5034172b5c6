//! Common utilities and types used throughout the coverage pipeline.
//!
//! This module provides the crate-wide error type and the parsing of the
//! hex-encoded machine words found in trace files.

/// Error types for every fallible stage of the pipeline.
pub mod error;

/// Hex word parsing and native word width handling.
pub mod hex;

pub use error::CovError;
pub use hex::{parse_word, Xlen};
