//! Trace Records.
//!
//! A [`Header`] fixes the column order of one trace file. Each data row of
//! the same width becomes a [`TraceRecord`] that keeps the raw values and
//! resolves the consumed columns by position.

use std::sync::Arc;

/// Columns the pipeline consumes. Other columns are carried but ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "pc",
    "binary",
    "instr",
    "instr_str",
    "operand",
    "gpr",
    "csr",
    "mode",
    "pad",
];

/// Position of each consumed column within a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Columns {
    pc: usize,
    binary: usize,
    instr: usize,
    instr_str: usize,
    operand: usize,
    gpr: usize,
    csr: usize,
    mode: usize,
    pad: usize,
}

/// Ordered column names of a trace file.
#[derive(Clone, Debug)]
pub struct Header {
    names: Arc<[String]>,
    cols: Columns,
}

impl Header {
    /// Builds a header from the first row of a file.
    ///
    /// Names are trimmed. Returns the first required column that is
    /// missing as the error.
    pub fn parse<I, S>(names: I) -> Result<Self, &'static str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Arc<[String]> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect();
        let mut pos = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in pos.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = names.iter().position(|n| n == column).ok_or(column)?;
        }
        let [pc, binary, instr, instr_str, operand, gpr, csr, mode, pad] = pos;
        let cols = Columns {
            pc,
            binary,
            instr,
            instr_str,
            operand,
            gpr,
            csr,
            mode,
            pad,
        };
        Ok(Self { names, cols })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns every data row must have.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Zips a data row with this header.
    ///
    /// # Returns
    ///
    /// The record, or the unchanged row if its width differs from the
    /// header's (a malformed row).
    pub fn record(&self, fields: Vec<String>) -> Result<TraceRecord, Vec<String>> {
        if fields.len() != self.len() {
            return Err(fields);
        }
        Ok(TraceRecord {
            names: Arc::clone(&self.names),
            cols: self.cols,
            fields,
        })
    }
}

/// One retired instruction as written by the simulator.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    names: Arc<[String]>,
    cols: Columns,
    fields: Vec<String>,
}

impl TraceRecord {
    /// Program counter, hex encoded.
    pub fn pc(&self) -> &str {
        &self.fields[self.cols.pc]
    }

    /// Raw instruction encoding, hex encoded.
    pub fn binary(&self) -> &str {
        &self.fields[self.cols.binary]
    }

    /// Mnemonic as printed by the simulator, e.g. `fmv.s`.
    pub fn instr(&self) -> &str {
        &self.fields[self.cols.instr]
    }

    /// Full disassembly text.
    pub fn instr_str(&self) -> &str {
        &self.fields[self.cols.instr_str]
    }

    /// Comma separated operand list.
    pub fn operand(&self) -> &str {
        &self.fields[self.cols.operand]
    }

    /// Semicolon separated `register:value` destination updates.
    pub fn gpr(&self) -> &str {
        &self.fields[self.cols.gpr]
    }

    pub fn csr(&self) -> &str {
        &self.fields[self.cols.csr]
    }

    /// Privilege mode the instruction retired in.
    pub fn mode(&self) -> &str {
        &self.fields[self.cols.mode]
    }

    pub fn pad(&self) -> &str {
        &self.fields[self.cols.pad]
    }

    /// All values in column order.
    pub fn raw(&self) -> &[String] {
        &self.fields
    }

    /// `(column, value)` pairs in column order, extra columns included.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.fields.iter().map(String::as_str))
    }

    /// Returns `true` if any value of the row contains `"illegal"`.
    ///
    /// Simulators print illegal-instruction traps into the mnemonic or
    /// disassembly. The match is a plain substring search over the whole
    /// row, so unrelated text containing the word also matches.
    pub fn mentions_illegal(&self) -> bool {
        self.fields.iter().any(|f| f.contains("illegal"))
    }
}
