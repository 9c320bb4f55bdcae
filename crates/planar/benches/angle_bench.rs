//! Criterion benchmarks for angle composition and normalization.
//! Focus: fast-path vs sqrt normalization, `+` (vector space) vs `*`
//! (radian round trip), and `angle_to`.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::rand::ReplayToken;
use planar::{Angle, Vector2};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let near_unit = Vector2::new(1.0 + 1e-9, 1e-9);
    let far = Vector2::new(3.0, 4.0);
    group.bench_function("fast_path", |b| b.iter(|| black_box(near_unit).normalized()));
    group.bench_function("sqrt", |b| b.iter(|| black_box(far).normalized()));
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("add_chain", n), &n, |b, &n| {
            b.iter_batched(
                || ReplayToken::new(43, n as u64).angles::<f64>(n),
                |angles| angles.into_iter().fold(Angle::zero(), |acc, a| acc + a),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("scale_chain", n), &n, |b, &n| {
            b.iter(|| {
                let mut a = Angle::from_degrees(1.0);
                for _ in 0..n {
                    a *= black_box(1.0001);
                }
                a
            })
        });
    }
    group.bench_function("angle_to", |b| {
        let u = Vector2::new(0.3, -1.7);
        let v = Vector2::new(-2.2, 0.4);
        b.iter(|| black_box(u).angle_to(black_box(v)))
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_compose);
criterion_main!(benches);
