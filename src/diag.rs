//! Diagnostic Output.
//!
//! The pipeline writes its informational and error messages to a
//! [`DiagnosticSink`] handed to it by the caller instead of logging
//! globally. The binary installs [`LogSink`], which forwards to the `log`
//! facade; tests use [`MemorySink`] to inspect what was reported.

use log::Level;
use std::fmt;

/// Destination for pipeline diagnostics.
pub trait DiagnosticSink {
    /// Records one message at the given level.
    fn log(&mut self, level: Level, args: fmt::Arguments<'_>);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        (**self).log(level, args)
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: "riscv_cov", level, "{}", args);
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Vec<(Level, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Messages recorded at exactly `level`.
    pub fn messages(&self, level: Level) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(l, _)| *l == level)
            .map(|(_, msg)| msg.as_str())
    }

    /// Returns `true` if any message at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages(level).any(|msg| msg.contains(needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        self.entries.push((level, args.to_string()));
    }
}
