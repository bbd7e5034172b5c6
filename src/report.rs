//! JSON Coverage Report.
//!
//! Serializes the run counters together with the coverage bins of a
//! [`CoverageDb`] so that results of one run can be inspected offline.

use crate::common::error::CovError;
use crate::cov::model::{CoverageDb, GroupCoverage};
use crate::stats::RunCounters;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Everything a run produced.
#[derive(Debug, Serialize)]
pub struct CoverageReport<'a> {
    pub counters: &'a RunCounters,
    pub groups: Vec<GroupCoverage>,
    pub bins: &'a CoverageDb,
}

impl<'a> CoverageReport<'a> {
    pub fn new(counters: &'a RunCounters, bins: &'a CoverageDb) -> Self {
        Self {
            counters,
            groups: bins.group_coverage(),
            bins,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<(), CovError> {
        let err = |message: String| CovError::Report {
            path: path.to_path_buf(),
            message,
        };
        let file = File::create(path).map_err(|e| err(e.to_string()))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, self).map_err(|e| err(e.to_string()))?;
        out.flush().map_err(|e| err(e.to_string()))
    }
}
