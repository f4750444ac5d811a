//! Moore neighbourhood enumeration.

use ca_core::Coord;

/// Offsets of the eight king-move neighbours, row-major.
const MOORE: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// The up-to-eight cells adjacent to `center` on a `size × size` grid.
///
/// Cells outside the grid are skipped, not wrapped: a corner has three
/// neighbours, an edge cell five.
pub fn neighbors(size: u32, center: Coord) -> impl Iterator<Item = Coord> {
    MOORE
        .iter()
        .map(move |&(d_row, d_col)| center.offset(d_row, d_col))
        .filter(move |c| c.in_bounds(size))
}
