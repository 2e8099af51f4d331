use criterion::{criterion_group, criterion_main, Criterion};
use backtrack_mazes::{
    cells::Cartesian2DCoordinate,
    generators,
    grid::Grid,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_33(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(33);
    c.bench_function("recursive_backtracker_maze_33", move |b| {
        b.iter(|| {
            let mut g = Grid::new(Width(33), Height(33)).unwrap();
            generators::recursive_backtracker(&mut g, Cartesian2DCoordinate::new(0, 0), &mut rng)
                .unwrap();
            g
        })
    });
}

fn bench_generate_maze_351(c: &mut Criterion) {
    c.bench_function("generate_maze_351", |b| {
        b.iter(|| generators::generate(Width(351), Height(351), 351).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_33,
    bench_generate_maze_351
);
criterion_main!(benches);
