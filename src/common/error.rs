//! Pipeline Error Types.
//!
//! Every fallible operation in the crate returns a [`CovError`]. Only a few
//! variants are fatal for a run (no input files, unreadable files, broken
//! headers, bad configuration); the rest are reported through the
//! diagnostic sink and absorbed by the caller.

use std::path::PathBuf;

/// Errors produced while reading traces, building instructions or
/// loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum CovError {
    /// The run was started with an empty trace file list.
    #[error("no trace files provided")]
    NoTraceFiles,

    /// A trace file could not be opened or read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer failed (I/O error or invalid UTF-8 inside a row).
    #[error("could not parse CSV in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header of a trace file lacks a column the pipeline consumes.
    #[error("'{}' has no '{column}' column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A `pc` or `binary` field is not a valid machine word.
    #[error("invalid {field} value '{value}'")]
    InvalidWord { field: &'static str, value: String },

    /// A destination update segment is not of the form `register:value`.
    #[error("Illegal gpr update format: {0}")]
    IllegalGprUpdate(String),

    /// Only 32 and 64 bit word widths are supported.
    #[error("unsupported xlen {0}, expected 32 or 64")]
    InvalidXlen(u32),

    /// The configuration file could not be read or parsed.
    #[error("invalid config '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// The coverage report could not be written.
    #[error("could not write report '{}': {message}", .path.display())]
    Report { path: PathBuf, message: String },
}
