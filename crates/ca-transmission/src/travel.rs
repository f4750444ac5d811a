//! Long-distance travel: destination sampling and trip counts.
//!
//! # Sampling
//!
//! A travel destination is uniform over every in-bounds cell within
//! Chebyshev distance `radius` of the origin, excluding the origin itself.
//! Out-of-grid samples are never clamped onto the border (that would pile
//! probability mass on edge cells).  The sampler draws each axis from the
//! `[-radius, +radius]` window already intersected with the grid and rejects
//! only the origin.  Both steps keep the result uniform, and the loop ends
//! quickly however large `radius` is compared to the grid.

use ca_core::{Coord, SimRng};

/// Symmetric jitter applied to the configured trips per day.
pub const TRIP_JITTER: i32 = 3;

/// Pick one travel destination for an agent at `origin`.
///
/// Returns `None` when travel is disabled (`radius == 0`) or when the grid
/// holds no cell other than the origin.
pub fn travel_target(size: u32, origin: Coord, radius: u32, rng: &mut SimRng) -> Option<Coord> {
    if radius == 0 || size <= 1 || !origin.in_bounds(size) {
        return None;
    }

    let last = size as i64 - 1;
    let radius = radius as i64;
    let window = |center: i32| {
        let center = center as i64;
        ((center - radius).max(0), (center + radius).min(last))
    };
    let (row_lo, row_hi) = window(origin.row);
    let (col_lo, col_hi) = window(origin.col);

    loop {
        let row = rng.gen_range(row_lo..=row_hi) as i32;
        let col = rng.gen_range(col_lo..=col_hi) as i32;
        let target = Coord::new(row, col);
        if target != origin {
            return Some(target);
        }
    }
}

/// Number of infection attempts a travelling agent makes today:
/// `trips_per_day` jittered uniformly by `±TRIP_JITTER`, never negative.
pub fn trip_count(trips_per_day: i32, rng: &mut SimRng) -> u32 {
    let jitter = rng.gen_range(-TRIP_JITTER..=TRIP_JITTER);
    (trips_per_day as i64 + jitter as i64).clamp(0, u32::MAX as i64) as u32
}
