use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use colormatch::grid::Grid;

pub fn elimination_scan(c: &mut Criterion) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);

    c.bench_function("eliminate_similar 6x8", |b| {
        b.iter_batched(
            || Grid::generate(6, 8, 100.0, 100.0, &mut rng),
            |mut grid| grid.eliminate_similar(0, 0.2),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, elimination_scan);
criterion_main!(benches);
