//! Trace CSV Reader.
//!
//! Streams the data rows of one trace file. The first row is taken as the
//! header; each later row is either a [`TraceRecord`] or, if its width
//! differs from the header's, reported as malformed so the caller can
//! count it and move on.

use crate::common::error::CovError;
use crate::trace::record::{Header, TraceRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One data row of a trace file.
#[derive(Clone, Debug)]
pub enum Row {
    /// A row matching the header's width.
    Record(TraceRecord),

    /// A row whose field count differs from the header's.
    Malformed {
        /// Zero-based position among the data rows of the file.
        index: u64,
        fields: Vec<String>,
    },
}

/// Iterator over the data rows of one trace file.
pub struct TraceReader<R: Read> {
    path: PathBuf,
    rows: csv::StringRecordsIntoIter<R>,
    header: Option<Header>,
    index: u64,
}

impl TraceReader<File> {
    /// Opens a trace file and reads its header.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened, the header cannot be read, or the
    /// header lacks a required column.
    pub fn open(path: &Path) -> Result<Self, CovError> {
        let file = File::open(path).map_err(|source| CovError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path, file)
    }
}

impl<R: Read> TraceReader<R> {
    /// Wraps any byte source. `path` is only used in diagnostics.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Result<Self, CovError> {
        let path = path.into();
        let mut rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        let header = match rows.next() {
            None => None,
            Some(Err(source)) => return Err(CovError::Csv { path, source }),
            Some(Ok(first)) => {
                let header = Header::parse(first.iter()).map_err(|column| {
                    CovError::MissingColumn {
                        path: path.clone(),
                        column,
                    }
                })?;
                Some(header)
            }
        };

        Ok(Self {
            path,
            rows,
            header,
            index: 0,
        })
    }

    /// The header, or `None` for an empty file.
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Read> Iterator for TraceReader<R> {
    type Item = Result<Row, CovError>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.header.as_ref()?;
        let fields = match self.rows.next()? {
            Ok(record) => record.iter().map(str::to_string).collect::<Vec<_>>(),
            Err(source) => {
                return Some(Err(CovError::Csv {
                    path: self.path.clone(),
                    source,
                }))
            }
        };

        let index = self.index;
        self.index += 1;
        Some(Ok(match header.record(fields) {
            Ok(record) => Row::Record(record),
            Err(fields) => Row::Malformed { index, fields },
        }))
    }
}
