//! Epidemic parameters and run configuration.
//!
//! # Units
//!
//! Every `*_rate` field is a percentage in `[0, 100]` tested once per
//! Bernoulli trial (see [`SimRng::chance`][crate::SimRng::chance]).  Every
//! `*_days` field counts whole simulated days.

use crate::{CaError, CaResult};

// ── EpiParams ─────────────────────────────────────────────────────────────────

/// Disease rates and durations.
///
/// `Default` yields the calibrated values the simulator was built around.
/// Applications may override any subset, e.g. from a JSON file with the
/// `serde` feature (missing fields fall back to the defaults).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpiParams {
    /// Chance that one infection attempt on a susceptible agent succeeds.
    pub transmission_rate: f64,
    /// Daily chance that an infectious agent makes trips outside its
    /// neighbourhood.
    pub travel_rate: f64,
    /// Chance that an agent leaving the infectious window dies.
    pub death_rate: f64,
    /// Daily chance that an infected agent past the incubation delay is
    /// detected and quarantined.
    pub detection_rate: f64,
    /// Daily chance that a detected agent recovers early.
    pub cure_rate: f64,

    /// Days infected before detection becomes possible.
    pub detection_delay_days: u32,
    /// Last day (0-based) of the infectious window; agents past it are
    /// removed.
    pub infectious_days: u32,
    /// Days an immune agent stays immune before becoming susceptible again.
    pub immunity_days: u32,
}

impl Default for EpiParams {
    fn default() -> Self {
        Self {
            transmission_rate:    2.95,
            travel_rate:          20.0,
            death_rate:           3.0,
            detection_rate:       60.0,
            cure_rate:            15.0,
            detection_delay_days: 5,
            infectious_days:      9,
            immunity_days:        90,
        }
    }
}

impl EpiParams {
    /// Reject rates outside `[0, 100]` or non-finite rates.
    pub fn validate(&self) -> CaResult<()> {
        let rates = [
            ("transmission_rate", self.transmission_rate),
            ("travel_rate",       self.travel_rate),
            ("death_rate",        self.death_rate),
            ("detection_rate",    self.detection_rate),
            ("cure_rate",         self.cure_rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(CaError::Config(format!(
                    "{name} must be a percentage in [0, 100], got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ── SeedMode ──────────────────────────────────────────────────────────────────

/// How the initial infections are placed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeedMode {
    /// Redraw until an unseeded cell is hit; exactly `initial_infected`
    /// agents start infected, or every cell if the grid is smaller.
    #[default]
    Distinct,
    /// Independent draws with replacement.  A repeated coordinate is skipped,
    /// so fewer than `initial_infected` agents may start infected.
    WithReplacement,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically assembled from command-line arguments by the application crate
/// and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Side length of the square grid.  Default: 450.
    pub grid_size: u32,

    /// The day loop stops once this many days have been simulated.
    pub max_days: u32,

    /// Number of agents infected before day 0.
    pub initial_infected: u32,

    /// Mean number of travel infection attempts per travelling agent per day.
    pub trips_per_day: i32,

    /// Maximum travel distance (per axis).  1 keeps travel inside the Moore
    /// ring; 0 disables travel entirely.
    pub travel_radius: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub seed_mode: SeedMode,

    pub params: EpiParams,
}

impl SimConfig {
    pub const DEFAULT_GRID_SIZE: u32 = 450;
    pub const DEFAULT_TRAVEL_RADIUS: u32 = 1;

    /// A configuration with default grid size, travel radius, seeding mode
    /// and epidemic parameters.
    pub fn new(max_days: u32, initial_infected: u32, trips_per_day: i32, seed: u64) -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            max_days,
            initial_infected,
            trips_per_day,
            travel_radius: Self::DEFAULT_TRAVEL_RADIUS,
            seed,
            seed_mode: SeedMode::default(),
            params: EpiParams::default(),
        }
    }

    /// Total number of agents.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    /// `true` when travel is enabled.
    #[inline]
    pub fn travel_enabled(&self) -> bool {
        self.travel_radius != 0
    }

    /// Reject configurations the simulator cannot represent.
    pub fn validate(&self) -> CaResult<()> {
        if self.grid_size == 0 {
            return Err(CaError::Config("grid_size must be at least 1".into()));
        }
        if self.grid_size > u16::MAX as u32 {
            return Err(CaError::Config(format!(
                "grid_size {} exceeds the maximum of {}",
                self.grid_size,
                u16::MAX
            )));
        }
        if self.travel_radius > i32::MAX as u32 / 2 {
            return Err(CaError::Config(format!(
                "travel_radius {} is too large",
                self.travel_radius
            )));
        }
        self.params.validate()
    }
}
