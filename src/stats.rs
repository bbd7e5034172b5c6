//! Run statistics collection and reporting.
//!
//! Tracks how many trace entries were processed, skipped and classified
//! during one run, per file and in total.

use serde::Serialize;
use std::path::PathBuf;

/// Entries processed in one trace file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub entries: u64,
}

/// Counters accumulated by a coverage run.
///
/// `entry_cnt` is reset at the start of every file; everything else is
/// cumulative.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    /// Well-formed entries of the file currently being processed.
    pub entry_cnt: u64,
    /// Well-formed entries over all files.
    pub total_entry_cnt: u64,
    /// Rows whose width did not match the header.
    pub skipped_cnt: u64,
    /// Unknown instructions on records not flagged as illegal.
    pub unexpected_illegal_instr_cnt: u64,

    pub expected_illegal_cnt: u64,
    pub sampled_cnt: u64,
    pub ineligible_cnt: u64,
    pub deferred_cnt: u64,
    /// Recognized instructions whose fields could not be parsed.
    pub rejected_cnt: u64,

    pub files: Vec<FileCount>,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting a new file.
    pub fn begin_file(&mut self) {
        self.entry_cnt = 0;
    }

    /// Closes the current file and folds its count into the total.
    pub fn end_file(&mut self, path: PathBuf) {
        self.total_entry_cnt += self.entry_cnt;
        self.files.push(FileCount {
            path,
            entries: self.entry_cnt,
        });
    }

    /// Returns `true` if the run saw anything worth flagging.
    pub fn has_failures(&self) -> bool {
        self.skipped_cnt > 0 || self.unexpected_illegal_instr_cnt > 0 || self.rejected_cnt > 0
    }

    /// Prints a formatted summary of the run to stdout.
    pub fn print(&self) {
        let total = if self.total_entry_cnt == 0 {
            1
        } else {
            self.total_entry_cnt
        } as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        println!("\n==========================================================");
        println!("RISC-V INSTRUCTION COVERAGE RUN");
        println!("==========================================================");
        println!("trace_files              {}", self.files.len());
        println!("entries                  {}", self.total_entry_cnt);
        println!("skipped                  {}", self.skipped_cnt);
        println!("----------------------------------------------------------");
        println!("CLASSIFICATION");
        println!(
            "  sampled                {} ({:.2}%)",
            self.sampled_cnt,
            pct(self.sampled_cnt)
        );
        println!(
            "  ineligible             {} ({:.2}%)",
            self.ineligible_cnt,
            pct(self.ineligible_cnt)
        );
        println!(
            "  deferred               {} ({:.2}%)",
            self.deferred_cnt,
            pct(self.deferred_cnt)
        );
        println!(
            "  illegal.expected       {} ({:.2}%)",
            self.expected_illegal_cnt,
            pct(self.expected_illegal_cnt)
        );
        println!(
            "  illegal.unexpected     {} ({:.2}%)",
            self.unexpected_illegal_instr_cnt,
            pct(self.unexpected_illegal_instr_cnt)
        );
        println!(
            "  rejected               {} ({:.2}%)",
            self.rejected_cnt,
            pct(self.rejected_cnt)
        );
        println!("----------------------------------------------------------");
        println!("FILES");
        for file in &self.files {
            println!("  {:<10} {}", file.entries, file.path.display());
        }
        println!("==========================================================");
    }
}
