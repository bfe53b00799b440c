//! Construct-and-multiply benchmarks
//!
//! Times building two vectors and taking their componentwise product, in both
//! precisions, plus the other per-vector operations for comparison.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use vector4::benchmark::{self, Precision};
use vector4::config::BenchmarkConfig;
use vector4::{Vector4d, Vector4f};

fn bench_construct_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_multiply");
    group.throughput(Throughput::Elements(1));

    group.bench_function("f32", |b| {
        b.iter(|| {
            let vec1 = Vector4f::new(black_box(1.0), black_box(2.0), black_box(3.0), black_box(4.0));
            let vec2 = Vector4f::new(black_box(5.0), black_box(6.0), black_box(7.0), black_box(8.0));
            black_box(vec1 * vec2)
        })
    });

    group.bench_function("f64", |b| {
        b.iter(|| {
            let vec1 = Vector4d::new(black_box(1.0), black_box(2.0), black_box(3.0), black_box(4.0));
            let vec2 = Vector4d::new(black_box(5.0), black_box(6.0), black_box(7.0), black_box(8.0));
            black_box(vec1 * vec2)
        })
    });

    group.finish();
}

fn bench_seeded_loop(c: &mut Criterion) {
    let config = BenchmarkConfig {
        iterations: 10_000,
        ..BenchmarkConfig::default()
    };
    let mut group = c.benchmark_group("seeded_loop");
    group.throughput(Throughput::Elements(config.iterations));
    group.sample_size(20);

    for precision in [Precision::Single, Precision::Double] {
        group.bench_function(precision.to_string(), |b| {
            b.iter(|| benchmark::run_precision(precision, &config))
        });
    }

    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let a = Vector4f::new(1.0, 2.0, 3.0, 4.0);
    let other = Vector4f::new(4.0, 3.0, 2.0, 1.0);

    c.bench_function("length", |b| b.iter(|| black_box(a).length()));
    c.bench_function("dot", |b| b.iter(|| black_box(a).dot(black_box(other))));
    c.bench_function("cross", |b| b.iter(|| black_box(a).cross(black_box(other))));
}

criterion_group!(benches, bench_construct_multiply, bench_seeded_loop, bench_geometry);
criterion_main!(benches);
