//! `WorkQueue` — unordered set of agents undergoing a time-bounded process.
//!
//! # Why an indexed set
//!
//! Agents leave a queue from arbitrary positions (detection, recovery,
//! death).  A plain `Vec` would make each removal O(len).  `WorkQueue` keeps
//! the members in a dense `Vec<CellId>` plus an `FxHashMap` from member to
//! slot, so `push`, `remove` and `contains` are all O(1): removal swaps the
//! last member into the vacated slot.
//!
//! Member order is therefore not stable across removals.  Progression passes
//! iterate a [`snapshot`][WorkQueue::snapshot] taken at the start of the pass,
//! which visits every member present at that moment exactly once regardless
//! of the pushes and removals the pass itself triggers.

use rustc_hash::FxHashMap;

use ca_core::{CellId, Status};

/// An unordered, duplicate-free collection of `CellId`s.
#[derive(Default, Debug)]
pub struct WorkQueue {
    members: Vec<CellId>,
    slots:   FxHashMap<CellId, usize>,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `cell`.  Returns `false` (and changes nothing) if it is already a
    /// member.
    pub fn push(&mut self, cell: CellId) -> bool {
        if self.slots.contains_key(&cell) {
            return false;
        }
        self.slots.insert(cell, self.members.len());
        self.members.push(cell);
        true
    }

    /// Remove `cell`.  Returns `false` if it was not a member.
    pub fn remove(&mut self, cell: CellId) -> bool {
        let Some(slot) = self.slots.remove(&cell) else {
            return false;
        };
        self.members.swap_remove(slot);
        if let Some(&moved) = self.members.get(slot) {
            self.slots.insert(moved, slot);
        }
        true
    }

    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        self.slots.contains_key(&cell)
    }

    /// Copy of the current membership, for iteration while the queue mutates.
    pub fn snapshot(&self) -> Vec<CellId> {
        self.members.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The three work queues, one per queued [`Status`].
#[derive(Default, Debug)]
pub struct WorkQueues {
    pub infected: WorkQueue,
    pub detected: WorkQueue,
    pub immune:   WorkQueue,
}

impl WorkQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// The queue tracking `status`, or `None` for Susceptible and Dead.
    pub fn for_status(&self, status: Status) -> Option<&WorkQueue> {
        match status {
            Status::Infected => Some(&self.infected),
            Status::Detected => Some(&self.detected),
            Status::Immune   => Some(&self.immune),
            Status::Susceptible | Status::Dead => None,
        }
    }

    pub fn for_status_mut(&mut self, status: Status) -> Option<&mut WorkQueue> {
        match status {
            Status::Infected => Some(&mut self.infected),
            Status::Detected => Some(&mut self.detected),
            Status::Immune   => Some(&mut self.immune),
            Status::Susceptible | Status::Dead => None,
        }
    }

    /// Total membership across all three queues.
    pub fn len(&self) -> usize {
        self.infected.len() + self.detected.len() + self.immune.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
