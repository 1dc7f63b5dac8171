use itertools::iproduct;

use crate::error::Result;
use crate::grid::{Coord, Grid};
use crate::rule::GAME_OF_LIFE;

/// Marks every listed coordinate alive, in order. Seeding the same cell
/// twice is the same as seeding it once, and cells already alive stay
/// alive.
///
/// Fails with [`Error::OutOfBounds`](crate::Error::OutOfBounds) if any
/// coordinate falls outside the grid, in which case the grid is left
/// exactly as it was.
pub fn seed(grid: &mut Grid, cells: &[Coord]) -> Result<()> {
  for &(row, col) in cells {
    grid.check_bounds(row, col)?;
  }
  for &(row, col) in cells {
    grid.set_cell(row, col, true);
  }
  Ok(())
}

/// Resolves an index onto the torus of circumference `size`: `-1` maps to
/// `size - 1`, `size` maps to `0`, and indices already in `0..size` are
/// unchanged. Offsets of any magnitude wrap the same way.
pub fn wrap(index: isize, size: usize) -> usize {
  debug_assert!(size > 0);
  index.rem_euclid(size as isize) as usize
}

/// The number of live cells among the 8 toroidal neighbors of `(row, col)`,
/// always within `0..=8`. The cell itself is not counted.
///
/// Sums the whole 3x3 block centered on the cell and subtracts the center,
/// which keeps the scan free of a skip branch. Intended for grids of size 3
/// or more; on a smaller torus the block resolves several offsets to the
/// same cell, so counts follow the wrapped geometry rather than the usual
/// reading of the rule.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
  let size = grid.size();
  let mut live = 0;
  for dr in -1..=1 {
    for dc in -1..=1 {
      let r = wrap(row as isize + dr, size);
      let c = wrap(col as isize + dc, size);
      live += grid.cell(r, c) as u8;
    }
  }
  live - grid.cell(row, col) as u8
}

/// Computes the next generation under [`GAME_OF_LIFE`]. Every cell is
/// decided from the input generation alone, so update order cannot leak
/// into the result. Returns a fresh grid of the same size and leaves the
/// input untouched.
// TODO: an in-place double-buffer variant would avoid the per-step allocation.
pub fn step(grid: &Grid) -> Grid {
  let size = grid.size();
  let mut next = Grid::empty(size);
  for (row, col) in iproduct!(0..size, 0..size) {
    let alive = grid.cell(row, col);
    let live_neighbors = count_live_neighbors(grid, row, col);
    next.set_cell(row, col, GAME_OF_LIFE.next_state(alive, live_neighbors));
  }
  next
}

/// The full simulation as a sequence of snapshots: the initial grid
/// followed by `n_steps` applications of [`step`], `n_steps + 1` grids in
/// total.
///
/// The sequence is lazy. Building it computes nothing, and each call to
/// `next` performs at most one [`step`], so consumers can render one
/// generation while the engine works on the successor. Clone the iterator
/// before consuming it to replay the run from the start.
pub fn run(initial: Grid, n_steps: usize) -> Generations {
  Generations {
    current: Some(initial),
    remaining: n_steps,
  }
}

/// Iterator over successive generations, made by [`run`].
#[derive(Debug, Clone)]
pub struct Generations {
  current: Option<Grid>,
  remaining: usize,
}

impl Iterator for Generations {
  type Item = Grid;

  fn next(&mut self) -> Option<Grid> {
    let grid = self.current.take()?;
    if self.remaining > 0 {
      self.remaining -= 1;
      self.current = Some(step(&grid));
    }
    Some(grid)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let left = match self.current {
      Some(_) => self.remaining + 1,
      None => 0,
    };
    (left, Some(left))
  }
}

impl ExactSizeIterator for Generations {}

impl std::iter::FusedIterator for Generations {}
