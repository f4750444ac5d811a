//! `Population` — the grid, its work queues and its counters as one unit.
//!
//! All status changes on a live run go through [`Population::transition`].
//! It moves the cell between queues, shifts the counters and resets the day
//! counter in one step, which keeps these invariants true after every call:
//!
//! - a cell is in the infected / detected / immune queue iff its status is
//!   Infected / Detected / Immune;
//! - the counters match the number of cells in each status and sum to the
//!   cell count.
//!
//! [`Population::verify`] re-derives both from scratch; tests call it after
//! every simulated day.

use ca_core::{CellId, Status};

use crate::{Grid, GridError, GridResult, PopulationCounts, WorkQueues};

/// Grid-owned agent state plus the queue and counter views derived from it.
pub struct Population {
    grid:   Grid,
    queues: WorkQueues,
    counts: PopulationCounts,
}

impl Population {
    /// A fully susceptible `size × size` population.
    pub fn new(size: u32) -> Self {
        let grid = Grid::new(size);
        let counts = PopulationCounts::all_susceptible(grid.count);
        Self { grid, queues: WorkQueues::new(), counts }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for day counters and pending flags.
    ///
    /// Writing `status` through this reference bypasses the queues and the
    /// counters; use [`transition`](Self::transition) instead.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn queues(&self) -> &WorkQueues {
        &self.queues
    }

    #[inline]
    pub fn counts(&self) -> &PopulationCounts {
        &self.counts
    }

    #[inline]
    pub fn status(&self, cell: CellId) -> Status {
        self.grid.status(cell)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `true` if the disease state machine allows `from → to`.
    pub fn is_legal(from: Status, to: Status) -> bool {
        use Status::*;
        matches!(
            (from, to),
            (Susceptible, Infected)
                | (Infected, Detected)
                | (Infected, Immune)
                | (Infected, Dead)
                | (Detected, Immune)
                | (Detected, Dead)
                | (Immune, Susceptible)
        )
    }

    /// Move `cell` to `to`, updating queues, counters and the day counter.
    pub fn transition(&mut self, cell: CellId, to: Status) -> GridResult<()> {
        let from = self.grid.status(cell);
        if !Self::is_legal(from, to) {
            return Err(GridError::IllegalTransition { cell, from, to });
        }

        self.grid.set_status(cell, to);
        if let Some(queue) = self.queues.for_status_mut(from) {
            queue.remove(cell);
        }
        if let Some(queue) = self.queues.for_status_mut(to) {
            queue.push(cell);
        }
        self.counts.shift(from, to);

        if matches!(to, Status::Susceptible | Status::Infected | Status::Immune) {
            self.grid.reset_days(cell);
        }
        if to != Status::Infected {
            self.grid.set_pending(cell, false);
        }
        Ok(())
    }

    /// Infect a susceptible cell during a day's pass.  The cell is marked as
    /// a new infection and stays inert until its next progression step.
    pub fn infect(&mut self, cell: CellId) -> GridResult<()> {
        self.transition(cell, Status::Infected)?;
        self.grid.set_pending(cell, true);
        Ok(())
    }

    /// Infect a susceptible cell before day 0.  Seeded cells start spreading
    /// on their first progression step.
    pub fn seed(&mut self, cell: CellId) -> GridResult<()> {
        self.transition(cell, Status::Infected)
    }

    // ── Consistency check ─────────────────────────────────────────────────

    /// Recompute the counters and queue membership from the grid and compare.
    pub fn verify(&self) -> GridResult<()> {
        let mut tally = PopulationCounts::default();
        for cell in self.grid.cell_ids() {
            let status = self.grid.status(cell);
            match status {
                Status::Susceptible => tally.susceptible += 1,
                Status::Infected    => tally.infected += 1,
                Status::Detected    => tally.detected += 1,
                Status::Immune      => tally.immune += 1,
                Status::Dead        => tally.dead += 1,
            }
            for queued in [Status::Infected, Status::Detected, Status::Immune] {
                let member = self.queues.for_status(queued).is_some_and(|q| q.contains(cell));
                if member != (status == queued) {
                    return Err(GridError::Inconsistent(format!(
                        "{cell} has status {status} but {queued} queue membership is {member}"
                    )));
                }
            }
        }

        if tally != self.counts {
            return Err(GridError::Inconsistent(format!(
                "counters {:?} do not match grid tally {:?}",
                self.counts, tally
            )));
        }
        if tally.total() != self.grid.count as u64 {
            return Err(GridError::Inconsistent(format!(
                "population {} does not match cell count {}",
                tally.total(),
                self.grid.count
            )));
        }
        Ok(())
    }
}
