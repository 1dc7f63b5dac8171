use std::fmt::{self, Display};

/// A Life rule given by its birth and survival neighbor counts.
///
/// Bit `n` of a mask admits a live-neighbor count of `n`, so only the low
/// 9 bits are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

/// The standard rule: a dead cell with exactly 3 live neighbors becomes
/// alive, a live cell with 2 or 3 live neighbors stays alive.
pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  /// The state a cell takes in the next generation, given its current state
  /// and the number of live cells among its 8 neighbors.
  pub(crate) fn next_state(self, alive: bool, live_neighbors: u8) -> bool {
    let mask = if alive { self.survival } else { self.birth };
    mask >> live_neighbors & 1 != 0
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_next_state() {
    for n in 0..=8 {
      assert_eq!(GAME_OF_LIFE.next_state(false, n), n == 3);
      assert_eq!(GAME_OF_LIFE.next_state(true, n), n == 2 || n == 3);
    }
  }

  #[test]
  fn test_display() {
    assert_eq!(GAME_OF_LIFE.to_string(), "B3/S23");
  }
}
