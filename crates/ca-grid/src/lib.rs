//! `ca-grid` — the grid-owned agent state of the `rust_ca` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`grid`]        | `Grid` (SoA cell store: status, day counter, pending flag) |
//! | [`queue`]       | `WorkQueue` (indexed set of `CellId`), `WorkQueues`       |
//! | [`counts`]      | `PopulationCounts` (one counter per `Status`)             |
//! | [`population`]  | `Population` — grid + queues + counters, kept consistent  |
//! | [`error`]       | `GridError`, `GridResult`                                 |
//!
//! Queues never own cell records: they hold `CellId`s into the grid, and
//! every status change goes through [`Population::transition`], which updates
//! the grid, the queues and the counters together.

pub mod counts;
pub mod error;
pub mod grid;
pub mod population;
pub mod queue;

#[cfg(test)]
mod tests;

pub use counts::PopulationCounts;
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use population::Population;
pub use queue::{WorkQueue, WorkQueues};
