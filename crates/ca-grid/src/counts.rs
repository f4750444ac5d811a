//! Per-status population counters.

use ca_core::Status;

/// One counter per [`Status`].  The five always sum to the cell count.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PopulationCounts {
    pub susceptible: u64,
    pub infected:    u64,
    pub detected:    u64,
    pub immune:      u64,
    pub dead:        u64,
}

impl PopulationCounts {
    /// Every agent susceptible.
    pub fn all_susceptible(cells: usize) -> Self {
        Self { susceptible: cells as u64, ..Self::default() }
    }

    #[inline]
    pub fn get(&self, status: Status) -> u64 {
        match status {
            Status::Susceptible => self.susceptible,
            Status::Infected    => self.infected,
            Status::Detected    => self.detected,
            Status::Immune      => self.immune,
            Status::Dead        => self.dead,
        }
    }

    fn slot(&mut self, status: Status) -> &mut u64 {
        match status {
            Status::Susceptible => &mut self.susceptible,
            Status::Infected    => &mut self.infected,
            Status::Detected    => &mut self.detected,
            Status::Immune      => &mut self.immune,
            Status::Dead        => &mut self.dead,
        }
    }

    /// Move one agent from `from` to `to`.
    ///
    /// # Panics
    /// Panics in debug mode if the `from` counter is already zero.
    #[inline]
    pub(crate) fn shift(&mut self, from: Status, to: Status) {
        *self.slot(from) -= 1;
        *self.slot(to) += 1;
    }

    /// Sum of all five counters.
    #[inline]
    pub fn total(&self) -> u64 {
        self.susceptible + self.infected + self.detected + self.immune + self.dead
    }
}
