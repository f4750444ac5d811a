//! Append-only counter file.
//!
//! Each call appends one integer and a newline.  The file is opened in append
//! mode for every value and closed again, so a series built up across many
//! runs (or many days) survives a crash in between.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use ca_core::Status;
use ca_grid::PopulationCounts;

use crate::writer::CounterWriter;
use crate::{OutputError, OutputResult};

/// A file that receives one population counter value per line.
#[derive(Clone, Debug)]
pub struct CounterLog {
    path: PathBuf,
}

impl CounterLog {
    /// The file is created on the first append, not here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `value` as a new line.
    pub fn append(&self, value: u64) -> OutputResult<()> {
        let wrap = |source| OutputError::File { path: self.path.clone(), source };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(wrap)?;
        writeln!(file, "{value}").map_err(wrap)?;
        Ok(())
    }

    /// Append the counter for `status`.
    pub fn append_status(&self, counts: &PopulationCounts, status: Status) -> OutputResult<()> {
        self.append(counts.get(status))
    }
}

impl CounterWriter for CounterLog {
    fn write_value(&mut self, value: u64) -> OutputResult<()> {
        self.append(value)
    }
}
