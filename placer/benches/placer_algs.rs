use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use placer::{PlacementParams, place_blocks};
use std::hint::black_box;

fn bench_placement(c: &mut Criterion) {
    c.bench_function("sparse_64_blocks", |b| {
        b.iter_batched(
            || {
                PlacementParams::new(&[1024, 1024], 64, &[64, 64])
                    .with_min_block_size(&[8, 8])
                    .with_seed(7)
            },
            |params| black_box(place_blocks(&params)).unwrap(),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("saturated_10x10", |b| {
        b.iter_batched(
            || {
                PlacementParams::new(&[10, 10], 5, &[8, 8])
                    .with_min_block_size(&[8, 8])
                    .with_seed(7)
            },
            |params| black_box(place_blocks(&params)).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
