use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
  /// Grids must have at least one row and one column.
  #[error("Grid size should be positive.")]
  InvalidSize,
  /// A structural invariant of the grid does not hold. The message names the
  /// broken invariant.
  #[error("Invalid grid: {0}.")]
  InvalidGrid(String),
  /// A cell access outside `0..size`.
  #[error("Cell ({row}, {col}) is outside the {size}x{size} grid.")]
  OutOfBounds {
    row: usize,
    col: usize,
    size: usize,
  },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    let err = Error::OutOfBounds {
      row: 7,
      col: 0,
      size: 5,
    };
    assert_eq!(err.to_string(), "Cell (7, 0) is outside the 5x5 grid.");
    assert_eq!(
      Error::InvalidGrid("row 2 has 4 cells, expected 3".to_owned()).to_string(),
      "Invalid grid: row 2 has 4 cells, expected 3.",
    );
  }
}
