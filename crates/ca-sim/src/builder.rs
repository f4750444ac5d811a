//! Fluent builder for constructing a [`Sim`].

use tracing::debug;

use ca_core::{SimConfig, SimRng};
use ca_grid::Population;
use ca_transmission::Spreader;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — grid size, day limit, seed, epidemic parameters, …
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                   |
/// |--------------------|-------------------------------------------|
/// | `.rng(r)`          | `SimRng::new(config.seed)`                |
/// | `.skip_seeding()`  | seed `config.initial_infected` agents     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    rng:          Option<SimRng>,
    skip_seeding: bool,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, rng: None, skip_seeding: false }
    }

    /// Inject the generator used for every draw of the run.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Build with a fully susceptible grid; place infections yourself with
    /// [`Sim::seed_at`] or [`Sim::seed_random`].
    pub fn skip_seeding(mut self) -> Self {
        self.skip_seeding = true;
        self
    }

    /// Validate the configuration, initialise the grid and seed the initial
    /// infections.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let population = Population::new(self.config.grid_size);
        debug!(
            size = self.config.grid_size,
            cells = self.config.cell_count(),
            "grid initialised"
        );

        let mut sim = Sim {
            spreader: Spreader::from_config(&self.config),
            config:   self.config,
            day:      0,
            rng,
            population,
        };

        if !self.skip_seeding {
            let count = sim.config.initial_infected;
            let mode = sim.config.seed_mode;
            sim.seed_random(count, mode)?;
        }
        Ok(sim)
    }
}
