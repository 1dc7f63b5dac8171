use itertools::Itertools;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{Error, Result};

/// A cell position as `(row, col)`, counted from the top left corner.
pub type Coord = (usize, usize);

/// A square board of cells, `true` for alive. Rows are stored contiguously,
/// top to bottom.
///
/// The board edges are glued into a torus: an engine
/// ([`step`](crate::engine::step) and friends) reads the left neighbor of a
/// cell in column 0 from column `size - 1`, and so on for every edge. The
/// grid itself only stores states and checks bounds; direct access through
/// [`get`](Grid::get) and [`set`](Grid::set) never wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
  size: usize,
  cells: Vec<bool>,
}

impl Grid {
  /// Creates an all-dead grid with `size` rows and `size` columns.
  /// Fails with [`Error::InvalidSize`] when `size` is zero.
  pub fn new(size: usize) -> Result<Grid> {
    if size == 0 {
      return Err(Error::InvalidSize);
    }
    Ok(Grid::empty(size))
  }

  pub(crate) fn empty(size: usize) -> Grid {
    Grid {
      size,
      cells: vec![false; size * size],
    }
  }

  /// Builds a grid from rows of cell states, top to bottom. Fails with
  /// [`Error::InvalidGrid`] when the rows are ragged or do not form a
  /// square, and with [`Error::InvalidSize`] when `rows` is empty.
  pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Grid> {
    if rows.is_empty() {
      return Err(Error::InvalidSize);
    }
    let width = rows[0].len();
    for (row, cells) in rows.iter().enumerate() {
      if cells.len() != width {
        return Err(Error::InvalidGrid(format!(
          "row {} has {} cells, expected {}",
          row,
          cells.len(),
          width,
        )));
      }
    }
    if width != rows.len() {
      return Err(Error::InvalidGrid(format!(
        "{} rows of {} columns do not form a square",
        rows.len(),
        width,
      )));
    }
    Ok(Grid {
      size: rows.len(),
      cells: rows.into_iter().flatten().collect(),
    })
  }

  /// The number of rows and of columns.
  pub fn size(&self) -> usize {
    self.size
  }

  /// Checks the structural invariants: a positive size and exactly
  /// `size * size` stored cells. The public constructors uphold both, so
  /// this only ever fails for a grid whose internals were corrupted.
  pub fn validate(&self) -> Result<()> {
    if self.size == 0 {
      return Err(Error::InvalidSize);
    }
    if self.cells.len() != self.size * self.size {
      return Err(Error::InvalidGrid(format!(
        "{} cells stored for a {}x{} grid",
        self.cells.len(),
        self.size,
        self.size,
      )));
    }
    Ok(())
  }

  /// The state of the cell at `(row, col)`, or [`Error::OutOfBounds`] when
  /// either coordinate is `size` or more.
  pub fn get(&self, row: usize, col: usize) -> Result<bool> {
    self.check_bounds(row, col)?;
    Ok(self.cells[row * self.size + col])
  }

  /// Overwrites the cell at `(row, col)`, or fails with
  /// [`Error::OutOfBounds`] when either coordinate is `size` or more.
  pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
    self.check_bounds(row, col)?;
    self.cells[row * self.size + col] = alive;
    Ok(())
  }

  pub(crate) fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
    if row >= self.size || col >= self.size {
      return Err(Error::OutOfBounds {
        row,
        col,
        size: self.size,
      });
    }
    Ok(())
  }

  /// Unchecked read for callers that already resolved the coordinates into
  /// range.
  pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
    debug_assert!(row < self.size && col < self.size);
    self.cells[row * self.size + col]
  }

  pub(crate) fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
    debug_assert!(row < self.size && col < self.size);
    self.cells[row * self.size + col] = alive;
  }

  /// The rows of the grid, top to bottom.
  pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
    self.cells.chunks(self.size)
  }

  /// The coordinates of all live cells, row by row.
  pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
    let size = self.size;
    self
      .cells
      .iter()
      .enumerate()
      .filter_map(move |(i, &alive)| if alive { Some((i / size, i % size)) } else { None })
  }

  /// The number of live cells.
  pub fn population(&self) -> usize {
    self.cells.iter().filter(|&&alive| alive).count()
  }
}

/// `#` for a live cell, `.` for a dead one, one line per row, no trailing
/// newline.
impl Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let art = self
      .rows()
      .map(|row| {
        row
          .iter()
          .map(|&alive| if alive { '#' } else { '.' })
          .collect::<String>()
      })
      .join("\n");
    f.write_str(&art)
  }
}

impl FromStr for Grid {
  type Err = Error;

  /// Parses the art `Display` produces. Newlines around the pattern are
  /// ignored, so raw string literals can keep their surrounding line breaks.
  fn from_str(s: &str) -> Result<Grid> {
    let mut rows = vec![];
    for line in s.trim_matches('\n').lines() {
      let mut row = Vec::with_capacity(line.len());
      for c in line.chars() {
        match c {
          '#' => row.push(true),
          '.' => row.push(false),
          _ => {
            return Err(Error::InvalidGrid(format!(
              "unexpected character {:?}, cells are '#' or '.'",
              c,
            )));
          }
        }
      }
      rows.push(row);
    }
    Grid::from_rows(rows)
  }
}
