//! RISC-V instruction-set model.
//!
//! This module is the instruction-set database the coverage pipeline looks
//! names up in: canonical instruction names, the extension group each one
//! belongs to, privilege modes and general-purpose register naming.

/// Instruction extension groups and the coverage-enabled subset.
pub mod group;

/// General-purpose register naming.
pub mod gpr;

/// Privilege mode definitions.
pub mod mode;

/// Canonical instruction names.
pub mod name;

pub use group::InstrGroup;
pub use mode::PrivilegeMode;
pub use name::InstrName;
