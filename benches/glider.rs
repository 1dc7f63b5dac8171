use criterion::{black_box, criterion_group, criterion_main, Criterion};
use toruslife::{patterns, run, seed, Grid};

fn glider_benchmark(c: &mut Criterion) {
  c.bench_function("glider 60 generations on a 100x100 torus", |b| b.iter(|| {
    let mut grid = Grid::new(100).unwrap();
    seed(&mut grid, &patterns::glider(49, 49)).unwrap();

    run(grid, black_box(60)).last()
  }));
}

criterion_group!(benches, glider_benchmark);
criterion_main!(benches);
