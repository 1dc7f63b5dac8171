use pretty_assertions::assert_eq;
use toruslife::{patterns, run, seed, step, Grid};

#[test]
fn oscillates_with_period_two() {
  let mut grid = Grid::new(10).unwrap();
  seed(&mut grid, &patterns::blinker(5, 5)).unwrap();

  let flipped = step(&grid);
  assert_eq!(
    flipped.live_cells().collect::<Vec<_>>(),
    vec![(6, 4), (6, 5), (6, 6)],
  );
  assert_eq!(step(&flipped), grid);
}

#[test]
fn alternates_between_two_phases() {
  let vertical: Grid = r"
..........
..........
..........
..........
..........
.....#....
.....#....
.....#....
..........
.........."
    .parse()
    .unwrap();
  let horizontal: Grid = r"
..........
..........
..........
..........
..........
..........
....###...
..........
..........
.........."
    .parse()
    .unwrap();

  for (generation, grid) in run(vertical.clone(), 6).enumerate() {
    if generation % 2 == 0 {
      assert_eq!(grid, vertical);
    } else {
      assert_eq!(grid, horizontal);
    }
  }
}
