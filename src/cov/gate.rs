//! Coverage Decision Gate.
//!
//! Decides, record by record, what happens to a traced instruction:
//!
//! `Parsed -> Canonicalized -> {LookupFailed | Recognized} -> {Ineligible | Built} -> Sampled`
//!
//! Instructions of the atomic groups, and unknown mnemonics that look like
//! AMO/LR/SC, end as [`Outcome::Deferred`]. A coverage-enabled instruction
//! whose `pc`/`binary` cannot be parsed ends as [`Outcome::Rejected`].

use crate::common::error::CovError;
use crate::common::hex::Xlen;
use crate::cov::canonical::canonicalize;
use crate::cov::instr::CovInstr;
use crate::cov::model::CoverageModel;
use crate::diag::DiagnosticSink;
use crate::isa::InstrName;
use crate::trace::TraceRecord;
use log::Level;
use serde::Serialize;

/// Mnemonic fragments of atomic memory operations and LR/SC.
const ATOMIC_MARKERS: [&str; 3] = ["amo", "lr", "sc"];

/// Width class of an instruction encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Encoding {
    /// 32-bit encoding, low two bits `11`.
    Standard,
    /// 16-bit compressed encoding, any other low two bits.
    Compressed,
}

impl Encoding {
    pub fn of(binary: u64) -> Self {
        if binary & 0b11 == 0b11 {
            Encoding::Standard
        } else {
            Encoding::Compressed
        }
    }
}

/// Recognized instruction classes whose sampling is not implemented yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Deferred {
    /// AMO, LR and SC instructions.
    AtomicMemory,
}

/// Terminal state of one record.
#[derive(Debug)]
pub enum Outcome {
    /// Handed to the coverage model.
    Sampled { name: InstrName, encoding: Encoding },

    /// Recognized, but its group is not coverage-enabled.
    Ineligible { name: InstrName },

    /// Recognized class without sampling support.
    Deferred(Deferred),

    /// Unknown name on a record that announces an illegal instruction.
    ExpectedIllegal { canonical: String },

    /// Unknown name on an ordinary record.
    UnexpectedIllegal { canonical: String },

    /// Recognized, but the record's fields could not be parsed.
    Rejected { name: InstrName, error: CovError },
}

/// Returns `true` for mnemonics containing an AMO or LR/SC fragment.
///
/// Only consulted for names missing from the instruction-set model; known
/// names are classified by their group, so `sbclr` is not atomic.
pub fn is_atomic_mnemonic(instr: &str) -> bool {
    let instr = instr.to_ascii_lowercase();
    ATOMIC_MARKERS.iter().any(|marker| instr.contains(marker))
}

/// Routes trace records to a coverage model.
pub struct CoverageGate<M: CoverageModel> {
    model: M,
    xlen: Xlen,
}

impl<M: CoverageModel> CoverageGate<M> {
    pub fn new(model: M, xlen: Xlen) -> Self {
        Self { model, xlen }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    pub fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Classifies `record` and samples it if eligible.
    ///
    /// Counting is left to the caller; the gate only reports lookup and
    /// build diagnostics on `sink`.
    pub fn process(&mut self, record: &TraceRecord, sink: &mut dyn DiagnosticSink) -> Outcome {
        let expect_illegal = record.mentions_illegal();

        let canonical = canonicalize(record.instr());
        let Some(name) = InstrName::from_canonical(&canonical) else {
            if is_atomic_mnemonic(record.instr()) {
                return Outcome::Deferred(Deferred::AtomicMemory);
            }
            sink.log(Level::Info, format_args!("Cannot find opcode: {}", canonical));
            return if expect_illegal {
                Outcome::ExpectedIllegal { canonical }
            } else {
                Outcome::UnexpectedIllegal { canonical }
            };
        };

        let group = name.group();
        if group.is_atomic() {
            return Outcome::Deferred(Deferred::AtomicMemory);
        }
        if !group.is_coverage_enabled() {
            return Outcome::Ineligible { name };
        }

        let instr = match CovInstr::builder(name).xlen(self.xlen).build(record, sink) {
            Ok(instr) => instr,
            Err(error) => return Outcome::Rejected { name, error },
        };

        let encoding = Encoding::of(instr.binary());
        self.model.pre_sample(&instr);
        self.model.sample(&instr, encoding);
        Outcome::Sampled { name, encoding }
    }
}
