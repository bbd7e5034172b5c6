//! Instruction Instances.
//!
//! A [`CovInstr`] is the coverage model's view of one retired instruction:
//! the canonical name plus everything the trace row says about it. It is
//! produced in one step by [`CovInstrBuilder::build`] and is not modified
//! afterwards.

use crate::common::error::CovError;
use crate::common::hex::{parse_word, Xlen};
use crate::diag::DiagnosticSink;
use crate::isa::gpr;
use crate::isa::{InstrGroup, InstrName, PrivilegeMode};
use crate::trace::TraceRecord;
use log::Level;
use serde::Serialize;

/// A destination register write reported by the simulator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegUpdate {
    /// Register name as printed, e.g. `x5` or `a0`.
    pub reg: String,
    /// New value as printed, usually hex.
    pub value: String,
}

impl RegUpdate {
    /// Parses one `register:value` segment.
    ///
    /// # Errors
    ///
    /// [`CovError::IllegalGprUpdate`] if the segment does not split on `:`
    /// into exactly two parts.
    pub fn parse(segment: &str) -> Result<Self, CovError> {
        let mut parts = segment.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(reg), Some(value), None) => Ok(Self {
                reg: reg.trim().to_string(),
                value: value.trim().to_string(),
            }),
            _ => Err(CovError::IllegalGprUpdate(segment.to_string())),
        }
    }

    /// Index of the written general-purpose register, if it is one.
    pub fn gpr_index(&self) -> Option<usize> {
        gpr::index_of(&self.reg)
    }
}

/// Splits the operand column into its entries.
///
/// An empty column yields an empty list, not a list holding one empty
/// string.
pub fn split_operands(operand: &str) -> Vec<String> {
    if operand.trim().is_empty() {
        return Vec::new();
    }
    operand.split(',').map(|op| op.trim().to_string()).collect()
}

/// Parses the destination update column, one result per non-empty segment.
pub fn parse_gpr_updates(gpr: &str) -> impl Iterator<Item = Result<RegUpdate, CovError>> + '_ {
    gpr.split(';')
        .filter(|segment| !segment.trim().is_empty())
        .map(RegUpdate::parse)
}

/// A fully populated instruction instance, ready for sampling.
#[derive(Clone, Debug, Serialize)]
pub struct CovInstr {
    name: InstrName,
    pc: u64,
    binary: u64,
    trace: String,
    operands: Vec<String>,
    gpr: String,
    dst_updates: Vec<RegUpdate>,
    csr: String,
    mode: String,
    pad: String,
}

impl CovInstr {
    /// Starts building an instance of `name`.
    pub fn builder(name: InstrName) -> CovInstrBuilder {
        CovInstrBuilder {
            name,
            xlen: Xlen::default(),
        }
    }

    pub fn name(&self) -> InstrName {
        self.name
    }

    pub fn group(&self) -> InstrGroup {
        self.name.group()
    }

    pub fn pc(&self) -> u64 {
        self.pc
    }

    /// Raw encoding.
    pub fn binary(&self) -> u64 {
        self.binary
    }

    /// Disassembly text.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Source operand references in trace order.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Destination update column as printed.
    pub fn gpr(&self) -> &str {
        &self.gpr
    }

    /// Destination register writes that parsed successfully.
    pub fn dst_updates(&self) -> &[RegUpdate] {
        &self.dst_updates
    }

    pub fn csr(&self) -> &str {
        &self.csr
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Privilege mode, if the mode column is recognized.
    pub fn privilege(&self) -> Option<PrivilegeMode> {
        PrivilegeMode::from_trace(&self.mode)
    }

    pub fn pad(&self) -> &str {
        &self.pad
    }
}

/// Builds a [`CovInstr`] from a trace record.
#[derive(Clone, Copy, Debug)]
pub struct CovInstrBuilder {
    name: InstrName,
    xlen: Xlen,
}

impl CovInstrBuilder {
    /// Native word width `pc` and `binary` are truncated to.
    pub fn xlen(mut self, xlen: Xlen) -> Self {
        self.xlen = xlen;
        self
    }

    /// Populates the instance from `record`.
    ///
    /// A destination update segment that is not `register:value` is
    /// reported as an error on `sink` and dropped; the remaining updates
    /// are kept.
    ///
    /// # Errors
    ///
    /// [`CovError::InvalidWord`] if `pc` or `binary` is not a hex word.
    pub fn build(
        self,
        record: &TraceRecord,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<CovInstr, CovError> {
        let pc = parse_word("pc", record.pc(), self.xlen)?;
        let binary = parse_word("binary", record.binary(), self.xlen)?;

        let mut dst_updates = Vec::new();
        for update in parse_gpr_updates(record.gpr()) {
            match update {
                Ok(update) => dst_updates.push(update),
                Err(e) => sink.log(Level::Error, format_args!("{}", e)),
            }
        }

        Ok(CovInstr {
            name: self.name,
            pc,
            binary,
            trace: record.instr_str().to_string(),
            operands: split_operands(record.operand()),
            gpr: record.gpr().to_string(),
            dst_updates,
            csr: record.csr().to_string(),
            mode: record.mode().to_string(),
            pad: record.pad().to_string(),
        })
    }
}
