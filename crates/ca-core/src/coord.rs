//! Grid coordinate type.

use std::fmt;

/// A `(row, col)` position on the square grid.
///
/// Components are signed so that neighbourhood and travel arithmetic can step
/// outside the grid before the bounds check rejects the result.  Values
/// handed to the cell store are always inside `[0, size)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `true` if both components lie in `[0, size)`.
    #[inline]
    pub fn in_bounds(self, size: u32) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }

    /// The coordinate displaced by `(d_row, d_col)`.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Coord {
        Coord::new(self.row.wrapping_add(d_row), self.col.wrapping_add(d_col))
    }

    /// Chebyshev (king-move) distance; the Moore ring is distance 1.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
