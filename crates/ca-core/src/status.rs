//! Disease-state enum shared by every crate.

use std::fmt;
use std::str::FromStr;

use crate::CaError;

/// The disease state of one agent.  Exactly one holds at any time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// Can be infected (initial state of every agent).
    #[default]
    Susceptible,
    /// Infected and, once no longer newly infected, infectious.
    Infected,
    /// Infected and quarantined; no longer spreads the disease.
    Detected,
    /// Recovered; cannot be infected until immunity expires.
    Immune,
    /// Terminal.
    Dead,
}

impl Status {
    /// All statuses in reporting order.
    pub const ALL: [Status; 5] = [
        Status::Susceptible,
        Status::Infected,
        Status::Detected,
        Status::Immune,
        Status::Dead,
    ];

    /// `true` for states tracked by a work queue.
    #[inline]
    pub fn is_queued(self) -> bool {
        matches!(self, Status::Infected | Status::Detected | Status::Immune)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Susceptible => "susceptible",
            Status::Infected    => "infected",
            Status::Detected    => "detected",
            Status::Immune      => "immune",
            Status::Dead        => "dead",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CaError::Parse(format!("unknown status `{s}`")))
    }
}
