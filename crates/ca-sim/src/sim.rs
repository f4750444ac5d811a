//! The `Sim` struct and its day loop.

use tracing::{debug, trace, warn};

use ca_core::{Coord, SeedMode, SimConfig, SimRng, Status};
use ca_grid::Population;
use ca_transmission::Spreader;

use crate::progression::{progress_day, DayStats};
use crate::{SimError, SimObserver, SimReport, SimResult};

/// The main simulation runner.
///
/// `Sim` exclusively owns the grid, the three work queues, the counters and
/// the generator for the whole run.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (grid size, day limit, rates, …).
    pub config: SimConfig,

    /// Days simulated so far.
    pub day: u32,

    /// The single generator every draw of the run comes from.
    pub rng: SimRng,

    /// Grid + queues + counters.
    pub population: Population,

    /// Transmission rules derived from `config`.
    pub spreader: Spreader,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.max_days` days have been simulated or no infected
    /// agent remains, whichever comes first.
    ///
    /// Calls observer hooks at every day boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        while self.day < self.config.max_days && !self.population.queues().infected.is_empty() {
            self.step_day(observer)?;
        }

        let report = self.report();
        debug!(
            day = report.day,
            termination = %report.termination,
            "simulation finished"
        );
        observer.on_sim_end(&report);
        Ok(report)
    }

    /// Step exactly `n` days, ignoring both termination conditions.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_days<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_day(observer)?;
        }
        Ok(())
    }

    /// Snapshot of the configuration echo and the current counters.
    pub fn report(&self) -> SimReport {
        SimReport::new(
            &self.config,
            self.day,
            *self.population.counts(),
            self.population.queues().infected.is_empty(),
        )
    }

    // ── Seeding ───────────────────────────────────────────────────────────

    /// Infect `count` agents at uniformly drawn coordinates.
    ///
    /// With [`SeedMode::Distinct`] a draw that lands on an already infected
    /// (or otherwise non-susceptible) cell is redrawn, so exactly `count`
    /// agents are seeded.  A `count` above the number of susceptible cells
    /// is capped there, which infects the whole grid.  With
    /// [`SeedMode::WithReplacement`] such a draw is skipped.  Returns the
    /// number of agents actually seeded.
    pub fn seed_random(&mut self, count: u32, mode: SeedMode) -> SimResult<u32> {
        let available = self.population.counts().susceptible;
        let mut count = count;
        if mode == SeedMode::Distinct && count as u64 > available {
            warn!(
                requested = count,
                available,
                "more initial infections than susceptible cells, capping"
            );
            count = available as u32;
        }

        let size = self.config.grid_size as i32;
        let mut seeded = 0;
        let mut draws = 0;
        while draws < count {
            let coord = Coord::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            let cell = self.population.grid().id_of(coord);
            if self.population.status(cell) == Status::Susceptible {
                self.population.seed(cell)?;
                seeded += 1;
                draws += 1;
            } else if mode == SeedMode::WithReplacement {
                debug!(%coord, "repeat seed coordinate skipped");
                draws += 1;
            }
        }

        debug!(requested = count, seeded, ?mode, "initial infections seeded");
        Ok(seeded)
    }

    /// Infect the agent at `coord` before the run starts.
    pub fn seed_at(&mut self, coord: Coord) -> SimResult<()> {
        if !self.population.grid().contains(coord) {
            return Err(SimError::SeedOutOfBounds(coord));
        }
        let cell = self.population.grid().id_of(coord);
        self.population.seed(cell)?;
        Ok(())
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn step_day<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DayStats> {
        let day = self.day;
        observer.on_day_start(day);

        let stats = progress_day(
            &mut self.population,
            &self.spreader,
            &self.config.params,
            &mut self.rng,
        )?;

        let counts = *self.population.counts();
        trace!(
            day,
            susceptible = counts.susceptible,
            infected = counts.infected,
            detected = counts.detected,
            immune = counts.immune,
            dead = counts.dead,
            infection_attempts = stats.infection_attempts,
            new_infections = stats.new_infections,
            "day complete"
        );
        observer.on_day_end(day, &counts, &stats);

        self.day += 1;
        Ok(stats)
    }
}
