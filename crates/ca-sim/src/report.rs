//! Final (or intermediate) run summary handed to reporting collaborators.

use std::fmt;

use ca_core::SimConfig;
use ca_grid::PopulationCounts;

/// Why the day loop stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Termination {
    /// `day` reached `max_days` with infections still active.
    DayLimit,
    /// The infected queue emptied before the day limit.
    Extinction,
    /// Neither condition holds yet (e.g. after `run_days`).
    Running,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Termination::DayLimit   => "day limit reached",
            Termination::Extinction => "no infected agents left",
            Termination::Running    => "running",
        })
    }
}

/// Read-only snapshot of a run: configuration echo plus the counters.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    pub grid_size:        u32,
    pub seed:             u64,
    pub initial_infected: u32,
    pub trips_per_day:    i32,
    pub travel_radius:    u32,
    /// Days simulated so far.
    pub day:              u32,
    pub max_days:         u32,
    pub counts:           PopulationCounts,
    pub termination:      Termination,
}

impl SimReport {
    pub fn new(config: &SimConfig, day: u32, counts: PopulationCounts, infected_queue_empty: bool) -> Self {
        let termination = if infected_queue_empty {
            Termination::Extinction
        } else if day >= config.max_days {
            Termination::DayLimit
        } else {
            Termination::Running
        };
        Self {
            grid_size:        config.grid_size,
            seed:             config.seed,
            initial_infected: config.initial_infected,
            trips_per_day:    config.trips_per_day,
            travel_radius:    config.travel_radius,
            day,
            max_days:         config.max_days,
            counts,
            termination,
        }
    }
}
