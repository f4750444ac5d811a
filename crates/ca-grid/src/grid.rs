//! Core cell storage: `Grid` (SoA per-cell disease state).
//!
//! Every `Vec` field has exactly `size * size` elements; the `CellId` value is
//! the row-major index into all of them:
//!
//! ```ignore
//! let status = grid.status(grid.id_of(Coord::new(2, 3)));  // O(1)
//! ```
//!
//! A cell's coordinates are implied by its index and never change.  The grid
//! performs no bounds validation of its own beyond debug assertions; callers
//! check coordinates with [`Grid::contains`] before converting them.

use ca_core::{CellId, Coord, Status};

/// Structure-of-Arrays storage for every agent's disease state.
pub struct Grid {
    /// Side length.  `count == size * size`.
    size: u32,

    /// Number of cells.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current disease state.
    pub status: Vec<Status>,

    /// Days spent infected (while Infected or Detected) or immune (while
    /// Immune).  Reset on entry to Infected, Immune and Susceptible.
    pub days_in_state: Vec<u32>,

    /// Set for an agent infected during the current day's pass.  Such an
    /// agent skips its next progression step.
    pub pending_new_infection: Vec<bool>,
}

impl Grid {
    /// Allocate a `size × size` grid with every cell Susceptible.
    pub fn new(size: u32) -> Self {
        let count = size as usize * size as usize;
        Self {
            size,
            count,
            status:                vec![Status::Susceptible; count],
            days_in_state:         vec![0; count],
            pending_new_infection: vec![false; count],
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// `true` if there are no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `CellId`s in row-major order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.count as u32).map(CellId)
    }

    /// `true` if `coord` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Row-major id of an in-bounds coordinate.
    #[inline]
    pub fn id_of(&self, coord: Coord) -> CellId {
        debug_assert!(self.contains(coord), "{coord} outside {0}x{0} grid", self.size);
        CellId(coord.row as u32 * self.size + coord.col as u32)
    }

    /// Coordinates of a cell.
    #[inline]
    pub fn coord_of(&self, id: CellId) -> Coord {
        Coord::new((id.0 / self.size) as i32, (id.0 % self.size) as i32)
    }

    // ── Per-cell accessors ────────────────────────────────────────────────

    #[inline]
    pub fn status(&self, id: CellId) -> Status {
        self.status[id.index()]
    }

    /// Overwrite a status without touching queues or counters.  Only
    /// [`Population`][crate::Population] should call this on a live run.
    #[inline]
    pub fn set_status(&mut self, id: CellId, status: Status) {
        self.status[id.index()] = status;
    }

    #[inline]
    pub fn days_in_state(&self, id: CellId) -> u32 {
        self.days_in_state[id.index()]
    }

    #[inline]
    pub fn set_days_in_state(&mut self, id: CellId, days: u32) {
        self.days_in_state[id.index()] = days;
    }

    #[inline]
    pub fn increment_days(&mut self, id: CellId) {
        self.days_in_state[id.index()] += 1;
    }

    #[inline]
    pub fn reset_days(&mut self, id: CellId) {
        self.days_in_state[id.index()] = 0;
    }

    #[inline]
    pub fn pending_new_infection(&self, id: CellId) -> bool {
        self.pending_new_infection[id.index()]
    }

    #[inline]
    pub fn flip_pending(&mut self, id: CellId) {
        let flag = &mut self.pending_new_infection[id.index()];
        *flag = !*flag;
    }

    #[inline]
    pub fn set_pending(&mut self, id: CellId, pending: bool) {
        self.pending_new_infection[id.index()] = pending;
    }
}
