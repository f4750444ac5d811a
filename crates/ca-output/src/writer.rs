//! The `CounterWriter` trait implemented by counter sinks.

use crate::OutputResult;

/// A sink for a series of population counter values, one per record.
pub trait CounterWriter {
    /// Record one value.
    fn write_value(&mut self, value: u64) -> OutputResult<()>;
}

/// In-memory sink, handy for tests and for callers that post-process the
/// series themselves.
impl CounterWriter for Vec<u64> {
    fn write_value(&mut self, value: u64) -> OutputResult<()> {
        self.push(value);
        Ok(())
    }
}
