//! Benchmarks for the Lyndon layer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use polysym::linear::lyndon::{lyndon_factorize, min_rotation};
use polysym::prelude::*;

/// Generates a random word over `alphabet` letters.
fn random_word(len: usize, alphabet: i32, rng: &mut ChaCha8Rng) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(1..=alphabet)).collect()
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("lyndon_factorize");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for len in [8, 64, 512] {
        let w = random_word(len, 3, &mut rng);

        group.bench_with_input(BenchmarkId::new("duval", len), &len, |b, _| {
            b.iter(|| black_box(lyndon_factorize(&w, i32::cmp)));
        });
        group.bench_with_input(BenchmarkId::new("min_rotation", len), &len, |b, _| {
            b.iter(|| black_box(min_rotation(&w, i32::cmp)));
        });
    }

    group.finish();
}

fn bench_lyndon_basis(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_lyndon_basis");
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for weight in [3, 4, 5] {
        let mut expr = SimpleExpr::new();
        for _ in 0..32 {
            expr.add_to(&random_word(weight, 4, &mut rng), 1);
        }

        group.bench_with_input(BenchmarkId::new("words", weight), &weight, |b, _| {
            b.iter(|| black_box(to_lyndon_basis(&expr)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_factorize, bench_lyndon_basis);
criterion_main!(benches);
