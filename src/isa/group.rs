//! Instruction Extension Groups.
//!
//! Every canonical instruction belongs to exactly one group, named after
//! the base width and the extension that introduces it. Functional coverage
//! is only collected for a fixed subset of groups.

use serde::Serialize;
use std::fmt;

/// ISA extension group of an instruction.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum InstrGroup {
    RV32I,
    RV64I,
    RV32M,
    RV64M,
    RV32A,
    RV64A,
    RV32F,
    RV32FC,
    RV64F,
    RV32D,
    RV32DC,
    RV64D,
    RV32C,
    RV64C,
    RV128I,
    RV128C,
    RV32V,
    RV32B,
    RV64B,
    RV32X,
    RV64X,
}

impl InstrGroup {
    /// Groups for which coverage sampling is enabled.
    pub const ENABLED: [InstrGroup; 12] = [
        InstrGroup::RV32I,
        InstrGroup::RV32M,
        InstrGroup::RV32C,
        InstrGroup::RV64I,
        InstrGroup::RV64M,
        InstrGroup::RV64C,
        InstrGroup::RV32F,
        InstrGroup::RV64F,
        InstrGroup::RV32D,
        InstrGroup::RV64D,
        InstrGroup::RV32B,
        InstrGroup::RV64B,
    ];

    /// Returns `true` if instructions of this group are sampled.
    pub fn is_coverage_enabled(self) -> bool {
        Self::ENABLED.contains(&self)
    }

    /// Returns `true` for the atomic-memory extension groups.
    pub fn is_atomic(self) -> bool {
        matches!(self, InstrGroup::RV32A | InstrGroup::RV64A)
    }

    /// Returns the group name as used by the instruction generator.
    pub fn name(self) -> &'static str {
        match self {
            InstrGroup::RV32I => "RV32I",
            InstrGroup::RV64I => "RV64I",
            InstrGroup::RV32M => "RV32M",
            InstrGroup::RV64M => "RV64M",
            InstrGroup::RV32A => "RV32A",
            InstrGroup::RV64A => "RV64A",
            InstrGroup::RV32F => "RV32F",
            InstrGroup::RV32FC => "RV32FC",
            InstrGroup::RV64F => "RV64F",
            InstrGroup::RV32D => "RV32D",
            InstrGroup::RV32DC => "RV32DC",
            InstrGroup::RV64D => "RV64D",
            InstrGroup::RV32C => "RV32C",
            InstrGroup::RV64C => "RV64C",
            InstrGroup::RV128I => "RV128I",
            InstrGroup::RV128C => "RV128C",
            InstrGroup::RV32V => "RV32V",
            InstrGroup::RV32B => "RV32B",
            InstrGroup::RV64B => "RV64B",
            InstrGroup::RV32X => "RV32X",
            InstrGroup::RV64X => "RV64X",
        }
    }
}

impl fmt::Display for InstrGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
