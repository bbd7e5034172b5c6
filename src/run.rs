//! Coverage Run.
//!
//! [`CovRun`] drives the pipeline over a list of trace files in order:
//! every row is read, well-formed records go through the
//! [`CoverageGate`], and each outcome is counted in [`RunCounters`].
//! Only an empty file list or an unreadable file stops a run; everything
//! else is reported and counted.

use crate::common::error::CovError;
use crate::common::hex::Xlen;
use crate::cov::gate::{CoverageGate, Outcome};
use crate::cov::model::CoverageModel;
use crate::diag::DiagnosticSink;
use crate::stats::RunCounters;
use crate::trace::{Row, TraceReader, TraceRecord};
use log::Level;
use std::io::Read;
use std::path::Path;

/// Orchestrates one coverage run.
pub struct CovRun<M: CoverageModel, S: DiagnosticSink> {
    gate: CoverageGate<M>,
    sink: S,
    counters: RunCounters,
}

impl<M: CoverageModel, S: DiagnosticSink> CovRun<M, S> {
    /// Creates a run sampling into `model` and reporting on `sink`.
    pub fn new(model: M, sink: S, xlen: Xlen) -> Self {
        Self {
            gate: CoverageGate::new(model, xlen),
            sink,
            counters: RunCounters::new(),
        }
    }

    pub fn counters(&self) -> &RunCounters {
        &self.counters
    }

    pub fn model(&self) -> &M {
        self.gate.model()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the run, returning the model, the sink and the counters.
    pub fn into_parts(self) -> (M, S, RunCounters) {
        (self.gate.into_model(), self.sink, self.counters)
    }

    /// Processes every trace file in order and logs the final summary.
    ///
    /// # Errors
    ///
    /// [`CovError::NoTraceFiles`] before anything is opened if the list is
    /// empty; otherwise the first error opening or reading a file.
    /// Malformed rows and unknown instructions are never errors.
    pub fn run_phase<P: AsRef<Path>>(
        &mut self,
        trace_files: &[P],
    ) -> Result<&RunCounters, CovError> {
        if trace_files.is_empty() {
            return Err(CovError::NoTraceFiles);
        }
        self.sink.log(
            Level::Info,
            format_args!("{} CSV trace files to be processed...", trace_files.len()),
        );

        for path in trace_files {
            let reader = TraceReader::open(path.as_ref())?;
            self.process_trace(reader)?;
        }

        self.finish(trace_files.len());
        Ok(&self.counters)
    }

    /// Processes one trace and returns its number of well-formed entries.
    pub fn process_trace<R: Read>(&mut self, reader: TraceReader<R>) -> Result<u64, CovError> {
        self.counters.begin_file();
        let path = reader.path().to_path_buf();
        if let Some(header) = reader.header() {
            self.sink
                .log(Level::Info, format_args!("Header: {:?}", header.names()));
        }

        for row in reader {
            match row? {
                Row::Record(record) => self.process_record(&record),
                Row::Malformed { index, fields } => {
                    self.sink.log(
                        Level::Info,
                        format_args!("Skipping malformed entry[{}]: {:?}", index, fields),
                    );
                    self.counters.skipped_cnt += 1;
                }
            }
        }

        let entries = self.counters.entry_cnt;
        self.sink.log(
            Level::Info,
            format_args!("[{}]: {} instr processed", path.display(), entries),
        );
        self.counters.end_file(path);
        Ok(entries)
    }

    fn process_record(&mut self, record: &TraceRecord) {
        self.counters.entry_cnt += 1;
        for (name, value) in record.fields().filter(|(name, _)| *name != "pad") {
            self.sink
                .log(Level::Debug, format_args!("{} = {}", name, value));
        }

        match self.gate.process(record, &mut self.sink) {
            Outcome::Sampled { .. } => self.counters.sampled_cnt += 1,
            Outcome::Ineligible { name } => {
                self.sink.log(
                    Level::Debug,
                    format_args!("{} ({}) is not covered", name, name.group()),
                );
                self.counters.ineligible_cnt += 1;
            }
            Outcome::Deferred(_) => self.counters.deferred_cnt += 1,
            Outcome::ExpectedIllegal { .. } => self.counters.expected_illegal_cnt += 1,
            Outcome::UnexpectedIllegal { .. } => {
                self.sink.log(
                    Level::Error,
                    format_args!(
                        "Found unexpected illegal instr: {} [{}]",
                        record.instr(),
                        record.raw().join(",")
                    ),
                );
                self.counters.unexpected_illegal_instr_cnt += 1;
            }
            Outcome::Rejected { name, error } => {
                self.sink.log(
                    Level::Error,
                    format_args!("Rejected {} [{}]: {}", name, record.raw().join(","), error),
                );
                self.counters.rejected_cnt += 1;
            }
        }
    }

    fn finish(&mut self, trace_files: usize) {
        let c = &self.counters;
        self.sink.log(
            Level::Info,
            format_args!(
                "Finished processing {} trace CSV, {} instructions",
                trace_files, c.total_entry_cnt
            ),
        );
        if c.skipped_cnt > 0 || c.unexpected_illegal_instr_cnt > 0 {
            self.sink.log(
                Level::Error,
                format_args!(
                    "{} instruction skipped, {} illegal instructions",
                    c.skipped_cnt, c.unexpected_illegal_instr_cnt
                ),
            );
        }
        if c.rejected_cnt > 0 {
            self.sink.log(
                Level::Error,
                format_args!("{} instructions rejected", c.rejected_cnt),
            );
        }
    }
}
