//! A few well-known starting patterns, as coordinate lists ready for
//! [`seed`](crate::engine::seed). Every pattern takes the top left corner of
//! its bounding box.

use crate::grid::Coord;

/// The 5-cell glider. Travels one cell down and one right every 4
/// generations.
///
/// ```text
/// .#.
/// ..#
/// ###
/// ```
pub fn glider(row: usize, col: usize) -> [Coord; 5] {
  [
    (row, col + 1),
    (row + 1, col + 2),
    (row + 2, col),
    (row + 2, col + 1),
    (row + 2, col + 2),
  ]
}

/// The period-2 blinker as a vertical line of 3 cells.
pub fn blinker(row: usize, col: usize) -> [Coord; 3] {
  [(row, col), (row + 1, col), (row + 2, col)]
}

/// The 2x2 block, the smallest still life.
pub fn block(row: usize, col: usize) -> [Coord; 4] {
  [
    (row, col),
    (row, col + 1),
    (row + 1, col),
    (row + 1, col + 1),
  ]
}
