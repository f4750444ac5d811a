//! `ca-output` — reporting collaborators for the rust_ca simulator.
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`summary`]   | `render_summary` / `write_summary` — bordered result table |
//! | [`writer`]    | `CounterWriter` trait (one number per record)             |
//! | [`counter`]   | `CounterLog` — append-mode file, one value per line        |
//! | [`observer`]  | `CounterLogObserver` — per-day counter series              |
//! | [`error`]     | `OutputError`, `OutputResult`                              |
//!
//! Nothing here reads or mutates simulation state beyond the read-only
//! [`SimReport`][ca_sim::SimReport] and counter snapshots it is handed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ca_output::{CounterLog, CounterLogObserver, write_summary};
//!
//! let log = CounterLog::new("infected.txt");
//! let mut obs = CounterLogObserver::new(log, Status::Infected);
//! let report = sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! write_summary(&mut std::io::stdout(), &report)?;
//! ```

pub mod counter;
pub mod error;
pub mod observer;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use counter::CounterLog;
pub use error::{OutputError, OutputResult};
pub use observer::CounterLogObserver;
pub use summary::{render_summary, write_summary};
pub use writer::CounterWriter;
