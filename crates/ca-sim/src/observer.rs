//! Simulation observer trait for progress reporting and data collection.

use ca_grid::PopulationCounts;

use crate::{DayStats, SimReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// day loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_day_end(&mut self, day: u32, counts: &PopulationCounts, _stats: &DayStats) {
///         println!("day {day}: {} infected", counts.infected);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each simulated day, before any progression.
    fn on_day_start(&mut self, _day: u32) {}

    /// Called after the day's progression, with the updated counters and the
    /// day's transition tallies.
    fn on_day_end(&mut self, _day: u32, _counts: &PopulationCounts, _stats: &DayStats) {}

    /// Called once after the loop terminates.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
