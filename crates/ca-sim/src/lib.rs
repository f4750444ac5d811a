//! `ca-sim` — day loop orchestrator for the rust_ca simulator.
//!
//! # Day loop
//!
//! ```text
//! seed initial infections
//! while day < config.max_days && infected queue non-empty:
//!   ① snapshot the infected, detected and immune queues
//!   ② infected pass — pending → inert; detection; removal; or spreading
//!   ③ detected pass — early cure; or removal (death / immunity)
//!   ④ immune pass   — immunity expiry back to susceptible
//!   day += 1
//! ```
//!
//! Every agent present in a queue when the day starts is visited exactly
//! once, and no agent changes status more than once per day.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ca_core::SimConfig;
//! use ca_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(200, 10, 3, 42);
//! let mut sim = SimBuilder::new(config).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{} dead after {} days", report.counts.dead, report.day);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod progression;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use progression::DayStats;
pub use report::{SimReport, Termination};
pub use sim::Sim;
