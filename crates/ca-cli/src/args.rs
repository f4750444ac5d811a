//! Command-line arguments and their translation into a [`SimConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};

use ca_core::{EpiParams, SeedMode, SimConfig, Status};

/// Printed to stderr after every usage error.
pub const USAGE: &str = "\
                COVID-19 SIMULATOR

    Usage:
    automat <MAX_DAYS> <START_INFECTED_COUNT> <TRIPS_PER_DAY> [TRIP_DISTANCE]
    <MAX_DAYS>                Maximum days of simulation run
    <START_INFECTED_COUNT>    Initial number of infected
    <TRIPS_PER_DAY>           Trips per day
    <TRIP_DISTANCE>           Maximal trip distance (default 1, 0 disables travel)
";

#[derive(Debug, Parser)]
#[command(name = "automat", version, about = "Grid epidemic cellular automaton", long_about = None)]
pub struct Args {
    /// Maximum days of simulation run.
    #[arg(value_name = "MAX_DAYS")]
    pub max_days: u32,

    /// Initial number of infected agents.
    #[arg(value_name = "START_INFECTED_COUNT")]
    pub initial_infected: u32,

    /// Mean number of trips per travelling agent per day.
    #[arg(value_name = "TRIPS_PER_DAY", allow_negative_numbers = true)]
    pub trips_per_day: i32,

    /// Maximal trip distance per axis.
    #[arg(value_name = "TRIP_DISTANCE")]
    pub travel_radius: Option<u32>,

    /// Generator seed.  Defaults to the current Unix time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side length of the square grid.
    #[arg(long, value_name = "N", default_value_t = SimConfig::DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// JSON file overriding any subset of the epidemic parameters.
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Append the selected population counter to this file.
    #[arg(long, value_name = "FILE")]
    pub counter_file: Option<PathBuf>,

    /// Which population counter goes to the counter file.
    #[arg(long, value_name = "STATUS", default_value = "infected")]
    pub counter: Status,

    /// Append the counter after every simulated day instead of once at the end.
    #[arg(long, requires = "counter_file")]
    pub per_day: bool,

    /// Placement of the initial infections.
    #[arg(long, value_enum, default_value_t = SeedModeArg::Distinct)]
    pub seed_mode: SeedModeArg,

    /// Log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum SeedModeArg {
    Distinct,
    WithReplacement,
}

impl From<SeedModeArg> for SeedMode {
    fn from(arg: SeedModeArg) -> Self {
        match arg {
            SeedModeArg::Distinct        => SeedMode::Distinct,
            SeedModeArg::WithReplacement => SeedMode::WithReplacement,
        }
    }
}

impl Args {
    /// Build the run configuration.  `seed` is used unless `--seed` was given.
    pub fn sim_config(&self, seed: u64) -> Result<SimConfig> {
        let mut config = SimConfig::new(
            self.max_days,
            self.initial_infected,
            self.trips_per_day,
            self.seed.unwrap_or(seed),
        );
        config.grid_size = self.grid_size;
        config.travel_radius = self.travel_radius.unwrap_or(SimConfig::DEFAULT_TRAVEL_RADIUS);
        config.seed_mode = self.seed_mode.into();
        if let Some(path) = &self.params {
            config.params = load_params(path)?;
        }
        Ok(config)
    }
}

fn load_params(path: &Path) -> Result<EpiParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading parameter file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing parameter file {}", path.display()))
}
