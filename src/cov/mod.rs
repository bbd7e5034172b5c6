//! Functional coverage of traced instructions.
//!
//! A trace record flows through three steps: its mnemonic is canonicalized,
//! a [`CovInstr`] is built for the recognized name, and the
//! [`CoverageGate`] decides whether the instruction is handed to the
//! [`CoverageModel`].

/// Mnemonic normalization and pseudo-instruction resolution.
pub mod canonical;

/// Coverage sampling decision.
pub mod gate;

/// Populated instruction instances.
pub mod instr;

/// Coverage engine interface and the built-in bin database.
pub mod model;

pub use canonical::canonicalize;
pub use gate::{CoverageGate, Deferred, Encoding, Outcome};
pub use instr::{CovInstr, RegUpdate};
pub use model::{CoverageDb, CoverageModel};
