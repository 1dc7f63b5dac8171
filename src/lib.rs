pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;

pub use engine::{count_live_neighbors, run, seed, step, wrap, Generations};
pub use error::{Error, Result};
pub use grid::{Coord, Grid};
pub use rule::{Rule, GAME_OF_LIFE};
