use criterion::{criterion_group, criterion_main, Criterion};
use gridgames::{generators, pathing, placement, units::Dimension};
use rand::{SeedableRng, XorShiftRng};

fn bench_find_path_65(c: &mut Criterion) {
    let mut rng = XorShiftRng::from_seed([5, 6, 7, 8]);
    let mut grid = generators::recursive_backtracker(Dimension(65), &mut rng);
    let (start, end) = placement::place_start_end(&mut grid, &mut rng);

    c.bench_function("find_path_65", move |b| {
        b.iter(|| pathing::find_path(&grid, start, end))
    });
}

criterion_group!(benches, bench_find_path_65);
criterion_main!(benches);
