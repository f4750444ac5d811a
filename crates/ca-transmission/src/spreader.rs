//! `Spreader` — infection attempts against neighbours and travel targets.

use tracing::trace;

use ca_core::{CellId, SimConfig, SimRng, Status};
use ca_grid::{GridResult, Population};

use crate::{neighbors, travel_target, trip_count};

/// What one infectious agent did during its spreading step.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct SpreadOutcome {
    /// Infection attempts made (neighbours + trips).
    pub attempts:   u32,
    /// Attempts that infected a susceptible agent.
    pub infections: u32,
    /// `true` if the agent travelled today.
    pub travelled:  bool,
}

/// Transmission rules extracted from the run configuration.
///
/// Cheap to copy; holds no per-agent state.
#[derive(Copy, Clone, Debug)]
pub struct Spreader {
    pub grid_size:         u32,
    pub transmission_rate: f64,
    pub travel_rate:       f64,
    pub travel_enabled:    bool,
    pub travel_radius:     u32,
    pub trips_per_day:     i32,
}

impl Spreader {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            grid_size:         config.grid_size,
            transmission_rate: config.params.transmission_rate,
            travel_rate:       config.params.travel_rate,
            travel_enabled:    config.travel_enabled(),
            travel_radius:     config.travel_radius,
            trips_per_day:     config.trips_per_day,
        }
    }

    /// Try to infect `target`.
    ///
    /// A no-op returning `Ok(false)` unless the target is Susceptible.
    /// Otherwise one percentage draw decides; on success the target becomes
    /// a pending new infection (see [`Population::infect`]).
    pub fn attempt_infection(
        &self,
        pop:    &mut Population,
        target: CellId,
        rng:    &mut SimRng,
    ) -> GridResult<bool> {
        if pop.status(target) != Status::Susceptible {
            return Ok(false);
        }
        if !rng.chance(self.transmission_rate) {
            return Ok(false);
        }
        pop.infect(target)?;
        Ok(true)
    }

    /// One day of spreading by the infectious agent `source`: an attempt on
    /// every Moore neighbour, then, if travel is enabled and the travel draw
    /// passes, `trip_count` attempts on a single travel destination.
    ///
    /// Does not touch `source`'s own state; the caller advances its day
    /// counter.
    pub fn spread_from(
        &self,
        pop:    &mut Population,
        source: CellId,
        rng:    &mut SimRng,
    ) -> GridResult<SpreadOutcome> {
        let mut outcome = SpreadOutcome::default();
        let origin = pop.grid().coord_of(source);

        for coord in neighbors(self.grid_size, origin) {
            let target = pop.grid().id_of(coord);
            outcome.attempts += 1;
            if self.attempt_infection(pop, target, rng)? {
                outcome.infections += 1;
            }
        }

        if self.travel_enabled && rng.chance(self.travel_rate) {
            if let Some(dest) = travel_target(self.grid_size, origin, self.travel_radius, rng) {
                outcome.travelled = true;
                let target = pop.grid().id_of(dest);
                let trips = trip_count(self.trips_per_day, rng);
                for _ in 0..trips {
                    outcome.attempts += 1;
                    if self.attempt_infection(pop, target, rng)? {
                        outcome.infections += 1;
                    }
                }
                trace!(%source, %dest, trips, "travel");
            }
        }

        Ok(outcome)
    }
}
