use pretty_assertions::assert_eq;
use toruslife::{patterns, run, seed, step, Grid};

fn advance(mut grid: Grid, generations: usize) -> Grid {
  for _ in 0..generations {
    grid = step(&grid);
  }
  grid
}

#[test]
fn travels_one_cell_diagonally_every_four_generations() {
  let mut grid = Grid::new(8).unwrap();
  seed(&mut grid, &patterns::glider(1, 1)).unwrap();

  let mut expected = Grid::new(8).unwrap();
  seed(&mut expected, &patterns::glider(2, 2)).unwrap();

  assert_eq!(advance(grid, 4), expected);
}

#[test]
fn laps_the_torus() {
  // one cell of travel per 4 generations, so 8 * 4 generations bring the
  // glider through both seams and back onto its seed
  let mut grid = Grid::new(8).unwrap();
  seed(&mut grid, &patterns::glider(3, 3)).unwrap();
  assert_eq!(advance(grid.clone(), 32), grid);
}

#[test]
fn run_snapshots_every_generation() {
  let mut grid = Grid::new(8).unwrap();
  seed(&mut grid, &patterns::glider(1, 1)).unwrap();

  let snapshots: Vec<Grid> = run(grid.clone(), 4).collect();
  assert_eq!(snapshots.len(), 5);
  assert_eq!(snapshots[0], grid);
  assert_eq!(snapshots[4], advance(grid, 4));
}
