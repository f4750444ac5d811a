//! `CounterLogObserver<W>` — bridges `SimObserver` to a `CounterWriter`.

use ca_core::Status;
use ca_grid::PopulationCounts;
use ca_sim::{DayStats, SimObserver};

use crate::writer::CounterWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one selected counter at the end of every
/// simulated day.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct CounterLogObserver<W: CounterWriter> {
    writer:     W,
    status:     Status,
    last_error: Option<OutputError>,
}

impl<W: CounterWriter> CounterLogObserver<W> {
    pub fn new(writer: W, status: Status) -> Self {
        Self { writer, status, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect the series after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: CounterWriter> SimObserver for CounterLogObserver<W> {
    fn on_day_end(&mut self, _day: u32, counts: &PopulationCounts, _stats: &DayStats) {
        let result = self.writer.write_value(counts.get(self.status));
        self.store_err(result);
    }
}
