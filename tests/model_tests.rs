//! Integration tests for the coverage bin database and the JSON report.

use riscv_cov::common::Xlen;
use riscv_cov::cov::{CoverageDb, CoverageGate, Encoding};
use riscv_cov::diag::MemorySink;
use riscv_cov::isa::{InstrGroup, InstrName};
use riscv_cov::report::CoverageReport;
use riscv_cov::stats::RunCounters;
use riscv_cov::trace::{Header, TraceRecord};

const HEADER: &str = "pc,instr,gpr,csr,binary,mode,instr_str,operand,pad";

fn record(fields: [&str; 9]) -> TraceRecord {
    Header::parse(HEADER.split(','))
        .unwrap()
        .record(fields.iter().map(|s| s.to_string()).collect())
        .unwrap()
}

/// Samples the given rows into a fresh database.
fn sample(rows: &[[&str; 9]]) -> CoverageDb {
    let mut gate = CoverageGate::new(CoverageDb::new(), Xlen::X32);
    let mut sink = MemorySink::new();
    for row in rows {
        gate.process(&record(*row), &mut sink);
    }
    gate.into_model()
}

/// Tests instruction, group, mode and encoding bins.
#[test]
fn test_basic_bins() {
    let db = sample(&[
        ["80000000", "addi", "a0:00000001", "", "00150513", "3", "addi", "a0,a0,1", ""],
        ["80000004", "addi", "x5:00000002", "", "00128293", "0", "addi", "t0,t0,1", ""],
        ["80000008", "c.addi", "a1:00000003", "", "0585", "M", "c.addi", "a1,1", ""],
    ]);
    assert_eq!(db.samples(), 3);
    assert_eq!(db.hits(InstrName::ADDI), 2);
    assert_eq!(db.hits(InstrName::C_ADDI), 1);
    assert_eq!(db.hits(InstrName::ADD), 0);
    assert_eq!(db.group_hits(InstrGroup::RV32I), 2);
    assert_eq!(db.group_hits(InstrGroup::RV32C), 1);
    assert_eq!(db.mode_hits("Machine"), 2);
    assert_eq!(db.mode_hits("User"), 1);
    assert_eq!(db.encoding_hits(Encoding::Standard), 2);
    assert_eq!(db.encoding_hits(Encoding::Compressed), 1);
}

/// Tests destination register and CSR bins.
#[test]
fn test_register_bins() {
    let db = sample(&[
        ["80000000", "csrrw", "a0:00000000", "mstatus", "30051573", "3", "csrrw", "a0,mstatus,a0", ""],
        ["80000004", "addi", "a0:00000001;t0:00000000", "", "00150513", "3", "addi", "a0,a0,1", ""],
        ["80000008", "fadd.s", "f1:3f800000", "", "002080d3", "3", "fadd.s", "f1,f1,f2", ""],
    ]);
    assert_eq!(db.rd_hits("x10"), 2);
    assert_eq!(db.rd_hits("x5"), 1);
    assert_eq!(db.rd_hits("f1"), 1);
    assert_eq!(db.csr_hits("mstatus"), 1);
    assert_eq!(db.csr_hits(""), 0);
}

/// Tests that a PC misaligned for its encoding width is counted.
#[test]
fn test_unaligned_pc() {
    let db = sample(&[
        ["80000002", "addi", "", "", "00150513", "3", "addi", "", ""],
        ["80000002", "c.addi", "", "", "0585", "3", "c.addi", "", ""],
        ["80000001", "c.addi", "", "", "0585", "3", "c.addi", "", ""],
    ]);
    assert_eq!(db.unaligned_pc(), 2);
}

/// Tests group coverage over the enabled groups.
#[test]
fn test_group_coverage() {
    let db = sample(&[
        ["80000000", "addi", "", "", "00150513", "3", "addi", "", ""],
        ["80000004", "addi", "", "", "00150513", "3", "addi", "", ""],
        ["80000008", "mul", "", "", "02b50533", "3", "mul", "", ""],
    ]);
    let groups = db.group_coverage();
    assert_eq!(groups.len(), InstrGroup::ENABLED.len());

    let rv32i = groups.iter().find(|g| g.group == InstrGroup::RV32I).unwrap();
    assert_eq!(rv32i.covered, 1);
    assert!(rv32i.total > 1);

    let rv32m = groups.iter().find(|g| g.group == InstrGroup::RV32M).unwrap();
    assert_eq!(rv32m.covered, 1);
    assert_eq!(rv32m.total, 8);
    assert!((rv32m.percent() - 12.5).abs() < 1e-9);

    let rv64b = groups.iter().find(|g| g.group == InstrGroup::RV64B).unwrap();
    assert_eq!(rv64b.covered, 0);
    assert_eq!(rv64b.percent(), 0.0);
}

/// Tests that the JSON report carries counters, groups and bins.
#[test]
fn test_report_json() {
    let db = sample(&[["80000000", "addi", "a0:1", "", "00150513", "3", "addi", "", ""]]);
    let mut counters = RunCounters::new();
    counters.sampled_cnt = 1;

    let json = CoverageReport::new(&counters, &db).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["counters"]["sampled_cnt"], 1);
    assert_eq!(value["bins"]["instr"]["ADDI"], 1);
    assert_eq!(value["bins"]["rd"]["x10"], 1);
    assert_eq!(value["groups"][0]["group"], "RV32I");
    assert!(value["bins"].get("pending").is_none());
}

/// Tests writing the report to disk.
#[test]
fn test_report_write() {
    let db = sample(&[["80000000", "addi", "", "", "00150513", "3", "addi", "", ""]]);
    let counters = RunCounters::new();
    let path = std::env::temp_dir().join(format!("riscv_cov_report_{}.json", std::process::id()));

    CoverageReport::new(&counters, &db).write(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(content.contains("\"ADDI\": 1"));
}
