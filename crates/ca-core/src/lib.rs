//! `ca-core` — foundational types for the `rust_ca` grid epidemic simulator.
//!
//! This crate is a dependency of every other `ca-*` crate.  It intentionally
//! has no `ca-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CellId`                                              |
//! | [`coord`]       | `Coord` (row, column) grid position                   |
//! | [`status`]      | `Status` disease-state enum                           |
//! | [`params`]      | `EpiParams`, `SimConfig`, `SeedMode`                  |
//! | [`rng`]         | `SimRng` (the single injectable generator)            |
//! | [`error`]       | `CaError`, `CaResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required for loading `EpiParams` from JSON.                |

pub mod coord;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod status;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use error::{CaError, CaResult};
pub use ids::CellId;
pub use params::{EpiParams, SeedMode, SimConfig};
pub use rng::SimRng;
pub use status::Status;
