//! RISC-V Instruction Trace Coverage Library.
//!
//! This crate turns execution traces of an instruction-set simulator into
//! functional coverage. Each CSV trace row is validated, its mnemonic is
//! mapped onto the canonical instruction-set model, the instruction is
//! rebuilt from the row's fields, and a coverage model samples it if its
//! extension group is covered.
//!
//! # Pipeline
//!
//! * **Reader**: streams trace files and rejects rows that do not match the header.
//! * **Canonicalizer**: normalizes mnemonics and resolves pseudo-instructions.
//! * **Builder**: populates an instruction instance from a record.
//! * **Gate**: decides between sampling, skipping and illegal-instruction accounting.
//! * **Run**: drives all files and keeps the counters.
//!
//! # Modules
//!
//! * `common`: Error type and machine word parsing.
//! * `config`: Configuration loading and parsing.
//! * `cov`: Canonicalization, instruction building, gating and coverage models.
//! * `diag`: Diagnostic sinks.
//! * `isa`: Instruction Set Architecture definitions.
//! * `report`: JSON coverage report.
//! * `run`: The coverage run driver.
//! * `stats`: Run statistics.
//! * `trace`: Trace file reading.

/// Shared error type and machine word parsing.
pub mod common;

/// Configuration system for word width, logging and reporting.
///
/// Loads and parses TOML configuration files; command-line options take
/// precedence over file values.
pub mod config;

/// Coverage pipeline: canonicalization, instruction building, gating, and
/// the coverage model interface.
pub mod cov;

/// Injected diagnostic output.
pub mod diag;

/// Instruction Set Architecture definitions.
///
/// Canonical instruction names, extension groups, privilege modes and
/// register naming for RV32/RV64.
pub mod isa;

/// JSON serialization of run results.
pub mod report;

/// Coverage run orchestration over a list of trace files.
pub mod run;

/// Run statistics collection and reporting.
pub mod stats;

/// Trace CSV reading and row validation.
pub mod trace;
