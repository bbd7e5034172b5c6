//! Coverage Engine.
//!
//! [`CoverageModel`] is the interface the gate samples through. A model
//! receives a `pre_sample` call to derive whatever it bins on, followed by
//! the `sample` call that records the hit. [`CoverageDb`] is the built-in
//! model: a set of hit-count bins kept for the duration of one run.

use crate::cov::gate::Encoding;
use crate::cov::instr::CovInstr;
use crate::isa::gpr;
use crate::isa::{InstrGroup, InstrName};
use serde::Serialize;
use std::collections::BTreeMap;

/// Receives every instruction the gate decides to sample.
pub trait CoverageModel {
    /// Derives sampling inputs for `instr`. Always called right before
    /// [`sample`](CoverageModel::sample) with the same instruction.
    fn pre_sample(&mut self, instr: &CovInstr);

    /// Records one hit of `instr`.
    fn sample(&mut self, instr: &CovInstr, encoding: Encoding);
}

impl<M: CoverageModel + ?Sized> CoverageModel for &mut M {
    fn pre_sample(&mut self, instr: &CovInstr) {
        (**self).pre_sample(instr)
    }

    fn sample(&mut self, instr: &CovInstr, encoding: Encoding) {
        (**self).sample(instr, encoding)
    }
}

impl<M: CoverageModel + ?Sized> CoverageModel for Box<M> {
    fn pre_sample(&mut self, instr: &CovInstr) {
        (**self).pre_sample(instr)
    }

    fn sample(&mut self, instr: &CovInstr, encoding: Encoding) {
        (**self).sample(instr, encoding)
    }
}

/// Facts derived by `pre_sample` for the instruction about to be sampled.
#[derive(Clone, Debug)]
struct PreSample {
    unaligned_pc: bool,
    rd: Vec<String>,
}

impl PreSample {
    fn of(instr: &CovInstr) -> Self {
        let align = match Encoding::of(instr.binary()) {
            Encoding::Standard => 4,
            Encoding::Compressed => 2,
        };
        let rd = instr
            .dst_updates()
            .iter()
            .map(|update| {
                update
                    .gpr_index()
                    .and_then(gpr::arch_name)
                    .unwrap_or_else(|| update.reg.clone())
            })
            .collect();
        Self {
            unaligned_pc: instr.pc() % align != 0,
            rd,
        }
    }
}

/// Share of an enabled group's instructions that were hit at least once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GroupCoverage {
    pub group: InstrGroup,
    pub covered: usize,
    pub total: usize,
}

impl GroupCoverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.covered as f64 * 100.0 / self.total as f64
        }
    }
}

/// Hit-count bins for one run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CoverageDb {
    samples: u64,
    instr: BTreeMap<InstrName, u64>,
    group: BTreeMap<InstrGroup, u64>,
    mode: BTreeMap<String, u64>,
    encoding: BTreeMap<Encoding, u64>,
    rd: BTreeMap<String, u64>,
    csr: BTreeMap<String, u64>,
    unaligned_pc: u64,
    #[serde(skip)]
    pending: Option<PreSample>,
}

impl CoverageDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of sampled instructions.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn hits(&self, name: InstrName) -> u64 {
        self.instr.get(&name).copied().unwrap_or(0)
    }

    pub fn group_hits(&self, group: InstrGroup) -> u64 {
        self.group.get(&group).copied().unwrap_or(0)
    }

    /// Hits per privilege mode name (`"Machine"`), or per raw mode text if
    /// the mode was not recognized.
    pub fn mode_hits(&self, mode: &str) -> u64 {
        self.mode.get(mode).copied().unwrap_or(0)
    }

    pub fn encoding_hits(&self, encoding: Encoding) -> u64 {
        self.encoding.get(&encoding).copied().unwrap_or(0)
    }

    /// Writes per destination register, keyed `x0`-`x31` for GPRs and by
    /// the printed name otherwise.
    pub fn rd_hits(&self, reg: &str) -> u64 {
        self.rd.get(reg).copied().unwrap_or(0)
    }

    pub fn csr_hits(&self, csr: &str) -> u64 {
        self.csr.get(csr).copied().unwrap_or(0)
    }

    /// Sampled instructions whose PC was not aligned to their width.
    pub fn unaligned_pc(&self) -> u64 {
        self.unaligned_pc
    }

    /// Coverage of every enabled group, in group order.
    pub fn group_coverage(&self) -> Vec<GroupCoverage> {
        InstrGroup::ENABLED
            .iter()
            .map(|&group| {
                let names = InstrName::ALL.iter().filter(|name| name.group() == group);
                GroupCoverage {
                    group,
                    covered: names.clone().filter(|&&name| self.hits(name) > 0).count(),
                    total: names.count(),
                }
            })
            .collect()
    }
}

impl CoverageModel for CoverageDb {
    fn pre_sample(&mut self, instr: &CovInstr) {
        self.pending = Some(PreSample::of(instr));
    }

    fn sample(&mut self, instr: &CovInstr, encoding: Encoding) {
        let pre = self
            .pending
            .take()
            .unwrap_or_else(|| PreSample::of(instr));

        self.samples += 1;
        *self.instr.entry(instr.name()).or_default() += 1;
        *self.group.entry(instr.group()).or_default() += 1;
        *self.encoding.entry(encoding).or_default() += 1;

        let mode = instr
            .privilege()
            .map(|mode| mode.name().to_string())
            .unwrap_or_else(|| instr.mode().to_string());
        *self.mode.entry(mode).or_default() += 1;

        if !instr.csr().is_empty() {
            *self.csr.entry(instr.csr().to_string()).or_default() += 1;
        }
        for rd in pre.rd {
            *self.rd.entry(rd).or_default() += 1;
        }
        if pre.unaligned_pc {
            self.unaligned_pc += 1;
        }
    }
}
