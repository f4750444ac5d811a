//! `ca-transmission` — who an infectious agent can reach, and whether an
//! infection attempt succeeds.
//!
//! # Crate layout
//!
//! | Module             | Contents                                                |
//! |--------------------|---------------------------------------------------------|
//! | [`neighborhood`]   | `neighbors` — Moore ring clipped to the grid            |
//! | [`travel`]         | `travel_target` rejection sampler, `trip_count` jitter  |
//! | [`spreader`]       | `Spreader` — infection attempts and a day's spreading   |
//!
//! # Design notes
//!
//! Transmission never owns state.  Every call borrows the
//! [`Population`][ca_grid::Population] mutably for the duration of one
//! attempt, and every random draw comes from the caller's
//! [`SimRng`][ca_core::SimRng], so the day loop fixes the draw order.

pub mod neighborhood;
pub mod spreader;
pub mod travel;


pub use neighborhood::neighbors;
pub use spreader::{SpreadOutcome, Spreader};
pub use travel::{trip_count, travel_target};
