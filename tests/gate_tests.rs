//! Integration tests for the coverage decision gate.

use log::Level;
use riscv_cov::common::{CovError, Xlen};
use riscv_cov::cov::gate::is_atomic_mnemonic;
use riscv_cov::cov::{CoverageDb, CoverageGate, CoverageModel, Deferred, Encoding, Outcome};
use riscv_cov::cov::CovInstr;
use riscv_cov::diag::MemorySink;
use riscv_cov::isa::InstrName;
use riscv_cov::trace::{Header, TraceRecord};

const HEADER: &str = "pc,instr,gpr,csr,binary,mode,instr_str,operand,pad";

fn record(pc: &str, instr: &str, binary: &str, instr_str: &str, operand: &str) -> TraceRecord {
    let header = Header::parse(HEADER.split(',')).unwrap();
    header
        .record(
            [pc, instr, "", "", binary, "3", instr_str, operand, ""]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
}

fn gate() -> CoverageGate<CoverageDb> {
    CoverageGate::new(CoverageDb::new(), Xlen::X32)
}

/// Model that remembers the call sequence.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl CoverageModel for Recorder {
    fn pre_sample(&mut self, instr: &CovInstr) {
        self.calls.push(format!("pre {}", instr.name()));
    }

    fn sample(&mut self, instr: &CovInstr, encoding: Encoding) {
        self.calls.push(format!("sample {} {:?}", instr.name(), encoding));
    }
}

/// Tests that a standard-width instruction is sampled.
#[test]
fn test_sample_standard() {
    let mut gate = gate();
    let mut sink = MemorySink::new();
    let outcome = gate.process(
        &record("80000000", "addi", "00150513", "addi a0,a0,1", "a0,a0,1"),
        &mut sink,
    );
    assert!(matches!(
        outcome,
        Outcome::Sampled {
            name: InstrName::ADDI,
            encoding: Encoding::Standard
        }
    ));
    assert_eq!(gate.model().hits(InstrName::ADDI), 1);
    assert!(sink.entries().is_empty());
}

/// Tests that a compressed encoding is detected from the low bits.
#[test]
fn test_sample_compressed() {
    let mut gate = gate();
    let outcome = gate.process(
        &record("80000002", "c.addi", "0585", "c.addi a1,1", "a1,1"),
        &mut MemorySink::new(),
    );
    assert!(matches!(
        outcome,
        Outcome::Sampled {
            name: InstrName::C_ADDI,
            encoding: Encoding::Compressed
        }
    ));
    assert_eq!(gate.model().encoding_hits(Encoding::Compressed), 1);
}

/// Tests that pseudo-instructions are sampled as the instruction they alias.
#[test]
fn test_sample_pseudo_instruction() {
    let mut gate = gate();
    let outcome = gate.process(
        &record("80000000", "fabs.d", "22a52553", "fabs.d fa0,fa0", "fa0,fa0"),
        &mut MemorySink::new(),
    );
    assert!(matches!(
        outcome,
        Outcome::Sampled {
            name: InstrName::FSGNJX_D,
            ..
        }
    ));
}

/// Tests the pre-sample then sample call order.
#[test]
fn test_sample_call_order() {
    let mut gate = CoverageGate::new(Recorder::default(), Xlen::X32);
    gate.process(
        &record("80000000", "add", "00b50533", "add a0,a0,a1", "a0,a0,a1"),
        &mut MemorySink::new(),
    );
    assert_eq!(gate.model().calls, ["pre ADD", "sample ADD Standard"]);
}

/// Tests that an unknown mnemonic on an ordinary record is unexpected.
#[test]
fn test_unknown_unexpected() {
    let mut gate = gate();
    let mut sink = MemorySink::new();
    let outcome = gate.process(&record("80000000", "foo.bar", "00000013", "foo", ""), &mut sink);
    match outcome {
        Outcome::UnexpectedIllegal { canonical } => assert_eq!(canonical, "FOO_BAR"),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(sink.contains(Level::Info, "Cannot find opcode: FOO_BAR"));
    assert_eq!(gate.model().samples(), 0);
}

/// Tests that an unknown mnemonic on a record mentioning "illegal" is expected.
#[test]
fn test_unknown_expected_illegal() {
    let mut gate = gate();
    let mut sink = MemorySink::new();

    let by_text = gate.process(
        &record("80000000", "unknown", "00000000", "illegal instruction", ""),
        &mut sink,
    );
    assert!(matches!(by_text, Outcome::ExpectedIllegal { .. }));

    let by_operand = gate.process(
        &record("80000004", "unknown", "00000000", "trap", "illegal"),
        &mut sink,
    );
    assert!(matches!(by_operand, Outcome::ExpectedIllegal { .. }));
    assert_eq!(sink.messages(Level::Info).count(), 2);
}

/// Tests that a recognized instruction is sampled even if the row says "illegal".
#[test]
fn test_known_instr_mentioning_illegal() {
    let mut gate = gate();
    let outcome = gate.process(
        &record("80000000", "jal", "0080006f", "jal illegal_handler", "illegal_handler"),
        &mut MemorySink::new(),
    );
    assert!(matches!(
        outcome,
        Outcome::Sampled {
            name: InstrName::JAL,
            ..
        }
    ));
}

/// Tests that atomic memory operations are deferred before lookup.
#[test]
fn test_atomic_deferred() {
    let mut gate = gate();
    let mut sink = MemorySink::new();
    for instr in ["amoadd.w", "lr.w", "sc.d", "AMOSWAP.D"] {
        let outcome = gate.process(&record("80000000", instr, "0000002f", instr, ""), &mut sink);
        assert!(matches!(
            outcome,
            Outcome::Deferred(Deferred::AtomicMemory)
        ));
    }
    assert!(sink.entries().is_empty());
    assert_eq!(gate.model().samples(), 0);

    assert!(is_atomic_mnemonic("amomaxu.d"));
    assert!(!is_atomic_mnemonic("addi"));
}

/// Tests that a recognized instruction of a disabled group is not sampled.
#[test]
fn test_ineligible_group() {
    let mut gate = gate();
    let outcome = gate.process(
        &record("80000000", "c.flw", "6198", "c.flw fa4,0(a1)", "fa4,0(a1)"),
        &mut MemorySink::new(),
    );
    assert!(matches!(
        outcome,
        Outcome::Ineligible {
            name: InstrName::C_FLW
        }
    ));
    assert_eq!(gate.model().samples(), 0);
}

/// Tests that a recognized instruction with an unparsable pc is rejected.
#[test]
fn test_rejected_bad_pc() {
    let mut gate = gate();
    let outcome = gate.process(
        &record("zz", "addi", "00150513", "addi a0,a0,1", "a0,a0,1"),
        &mut MemorySink::new(),
    );
    match outcome {
        Outcome::Rejected { name, error } => {
            assert_eq!(name, InstrName::ADDI);
            assert!(matches!(error, CovError::InvalidWord { field: "pc", .. }));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(gate.model().samples(), 0);
}

/// Tests that a bad destination update is reported but the instruction is still sampled.
#[test]
fn test_illegal_update_still_sampled() {
    let header = Header::parse(HEADER.split(',')).unwrap();
    let rec = header
        .record(
            ["80000000", "addi", "a0:1:2;a1:00000002", "", "00150513", "3", "addi", "", ""]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();

    let mut gate = gate();
    let mut sink = MemorySink::new();
    let outcome = gate.process(&rec, &mut sink);
    assert!(matches!(outcome, Outcome::Sampled { .. }));
    assert!(sink.contains(Level::Error, "Illegal gpr update format: a0:1:2"));
    assert_eq!(gate.model().rd_hits("x11"), 1);
    assert_eq!(gate.model().rd_hits("x10"), 0);
}

/// Tests that bit-manipulation names containing "lr" are sampled, not deferred.
#[test]
fn test_sbclr_sampled() {
    let mut gate = gate();
    for (instr, name) in [("sbclr", InstrName::SBCLR), ("sbclri", InstrName::SBCLRI)] {
        let outcome = gate.process(
            &record("80000000", instr, "48b51533", instr, "a0,a0,a1"),
            &mut MemorySink::new(),
        );
        match outcome {
            Outcome::Sampled { name: sampled, .. } => assert_eq!(sampled, name),
            other => panic!("{instr}: unexpected outcome {other:?}"),
        }
    }
    assert_eq!(gate.model().samples(), 2);
}

/// Tests that an unknown mnemonic with an atomic fragment is deferred silently.
#[test]
fn test_unknown_atomic_deferred() {
    let mut gate = gate();
    let mut sink = MemorySink::new();
    let outcome = gate.process(&record("80000000", "amocas.w", "28b5202f", "amocas.w", ""), &mut sink);
    assert!(matches!(
        outcome,
        Outcome::Deferred(Deferred::AtomicMemory)
    ));
    assert!(sink.entries().is_empty());
}

/// Tests that a disabled-group instruction is not parsed, so a bad pc is not rejected.
#[test]
fn test_ineligible_before_build() {
    let mut gate = gate();
    let outcome = gate.process(
        &record("zz", "c.flw", "6198", "c.flw fa4,0(a1)", "fa4,0(a1)"),
        &mut MemorySink::new(),
    );
    assert!(matches!(
        outcome,
        Outcome::Ineligible {
            name: InstrName::C_FLW
        }
    ));
}

/// Tests that a 0b-prefixed binary column keeps its compressed width.
#[test]
fn test_0b_binary_is_compressed() {
    let mut gate = gate();
    let outcome = gate.process(
        &record("80000000", "c.addi", "0b11", "c.addi", ""),
        &mut MemorySink::new(),
    );
    assert!(matches!(
        outcome,
        Outcome::Sampled {
            encoding: Encoding::Compressed,
            ..
        }
    ));
}
