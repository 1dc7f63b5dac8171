use std::io::{stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use log::{debug, info};

use toruslife::{run, seed, Coord, Grid, GAME_OF_LIFE};

const GRID_SIZE: usize = 100;
const N_STEPS: usize = 60;
const FRAME_INTERVAL: Duration = Duration::from_millis(100);
/// A glider-like 5-cell seed near the center of the grid.
const SEED_CELLS: [Coord; 5] = [(50, 50), (50, 49), (50, 51), (49, 50), (51, 51)];

type Err = Box<dyn std::error::Error>;
type Result<T> = std::result::Result<T, Err>;

fn main() -> Result<()> {
  env_logger::init();

  let mut grid = Grid::new(GRID_SIZE)?;
  seed(&mut grid, &SEED_CELLS)?;
  info!(
    "seeded {} cells on a {}x{} torus, running {} for {} generations",
    grid.population(),
    GRID_SIZE,
    GRID_SIZE,
    GAME_OF_LIFE,
    N_STEPS,
  );

  animate(run(grid, N_STEPS), FRAME_INTERVAL)?;
  info!("done");
  Ok(())
}

/// Shows one frame per generation at a fixed pace. The alternate screen is
/// left again even when drawing fails halfway.
fn animate(frames: impl Iterator<Item = Grid>, interval: Duration) -> Result<()> {
  execute!(stdout(), EnterAlternateScreen, Hide)?;
  let outcome = draw(frames, interval);
  execute!(stdout(), LeaveAlternateScreen, Show)?;
  outcome
}

fn draw(frames: impl Iterator<Item = Grid>, interval: Duration) -> Result<()> {
  let mut out = stdout();
  for (generation, grid) in frames.enumerate() {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "generation {:2}   population {}", generation, grid.population())?;
    writeln!(out, "{}", grid)?;
    out.flush()?;
    debug!("generation {}: {} cells alive", generation, grid.population());
    thread::sleep(interval);
  }
  Ok(())
}
