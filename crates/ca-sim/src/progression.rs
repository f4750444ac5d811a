//! The per-day agent state machine.
//!
//! ```text
//! Susceptible ─▶ Infected ─┬─▶ Detected ─┬─▶ Immune ─▶ Susceptible
//!                          │             └─▶ Dead
//!                          ├─▶ Immune
//!                          └─▶ Dead
//! ```
//!
//! All three queue snapshots are taken before any pass runs.  An agent that
//! moves into the detected or immune queue during the day is therefore not
//! visited again until tomorrow, and agents infected today are not visited
//! at all today (their pending flag is cleared on tomorrow's visit).

use ca_core::{CellId, EpiParams, SimRng, Status};
use ca_grid::{GridResult, Population};
use ca_transmission::Spreader;

/// Transition tallies for one simulated day.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct DayStats {
    /// Infection attempts made by spreading agents (neighbours + trips).
    pub infection_attempts: u32,
    /// Susceptible agents infected by spreading.
    pub new_infections:     u32,
    /// Infected agents moved to quarantine.
    pub detected:           u32,
    /// Infected or detected agents that became immune.
    pub recovered:          u32,
    /// Infected or detected agents that died.
    pub died:               u32,
    /// Immune agents that became susceptible again.
    pub lost_immunity:      u32,
    /// Infectious agents that travelled.
    pub travellers:         u32,
}

/// Run one day of progression over every queued agent.
pub fn progress_day(
    pop:      &mut Population,
    spreader: &Spreader,
    params:   &EpiParams,
    rng:      &mut SimRng,
) -> GridResult<DayStats> {
    let infected = pop.queues().infected.snapshot();
    let detected = pop.queues().detected.snapshot();
    let immune = pop.queues().immune.snapshot();

    let mut stats = DayStats::default();
    for cell in infected {
        step_infected(pop, cell, spreader, params, rng, &mut stats)?;
    }
    for cell in detected {
        step_detected(pop, cell, params, rng, &mut stats)?;
    }
    for cell in immune {
        step_immune(pop, cell, params, &mut stats)?;
    }
    Ok(stats)
}

/// Advance one agent from the infected queue.
pub fn step_infected(
    pop:      &mut Population,
    cell:     CellId,
    spreader: &Spreader,
    params:   &EpiParams,
    rng:      &mut SimRng,
    stats:    &mut DayStats,
) -> GridResult<()> {
    debug_assert_eq!(pop.status(cell), Status::Infected);

    if pop.grid().pending_new_infection(cell) {
        pop.grid_mut().flip_pending(cell);
        return Ok(());
    }

    let days = pop.grid().days_in_state(cell);

    // Past the incubation delay the detection draw is the whole day's work,
    // whatever its result.
    if days >= params.detection_delay_days {
        if rng.chance(params.detection_rate) {
            pop.transition(cell, Status::Detected)?;
            stats.detected += 1;
        }
        return Ok(());
    }

    if days > params.infectious_days {
        remove(pop, cell, params, rng, stats)?;
        return Ok(());
    }

    let outcome = spreader.spread_from(pop, cell, rng)?;
    stats.infection_attempts += outcome.attempts;
    stats.new_infections += outcome.infections;
    stats.travellers += outcome.travelled as u32;
    pop.grid_mut().increment_days(cell);
    Ok(())
}

/// Advance one agent from the detected queue.
pub fn step_detected(
    pop:    &mut Population,
    cell:   CellId,
    params: &EpiParams,
    rng:    &mut SimRng,
    stats:  &mut DayStats,
) -> GridResult<()> {
    debug_assert_eq!(pop.status(cell), Status::Detected);

    if pop.grid().days_in_state(cell) < params.infectious_days {
        if rng.chance(params.cure_rate) {
            pop.transition(cell, Status::Immune)?;
            stats.recovered += 1;
        } else {
            pop.grid_mut().increment_days(cell);
        }
        return Ok(());
    }

    remove(pop, cell, params, rng, stats)
}

/// Advance one agent from the immune queue.
pub fn step_immune(
    pop:    &mut Population,
    cell:   CellId,
    params: &EpiParams,
    stats:  &mut DayStats,
) -> GridResult<()> {
    debug_assert_eq!(pop.status(cell), Status::Immune);

    if pop.grid().days_in_state(cell) >= params.immunity_days {
        pop.transition(cell, Status::Susceptible)?;
        stats.lost_immunity += 1;
    } else {
        pop.grid_mut().increment_days(cell);
    }
    Ok(())
}

/// End of the infectious window: die with `death_rate`, otherwise immune.
fn remove(
    pop:    &mut Population,
    cell:   CellId,
    params: &EpiParams,
    rng:    &mut SimRng,
    stats:  &mut DayStats,
) -> GridResult<()> {
    if rng.chance(params.death_rate) {
        pop.transition(cell, Status::Dead)?;
        stats.died += 1;
    } else {
        pop.transition(cell, Status::Immune)?;
        stats.recovered += 1;
    }
    Ok(())
}
