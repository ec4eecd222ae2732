use bitfix::bits::{count_leading_zeros, count_trailing_zeros, popcount, rotate_left};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::distributions::{Distribution, Uniform};

fn bench_bits(b: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let sample = Uniform::new(0, u64::MAX);

    let mut group = b.benchmark_group("bits");

    group.bench_function("popcount_u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |v| black_box(popcount(v)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("count_leading_zeros_u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |v| black_box(count_leading_zeros(v)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("count_trailing_zeros_u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |v| black_box(count_trailing_zeros(v)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("rotate_left_u64", |b| {
        b.iter_batched(
            || (sample.sample(&mut rng), sample.sample(&mut rng) as u32),
            |(v, k)| black_box(rotate_left(v, k)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_bits);
criterion_main!(benches);
