//! Benchmarks for grid generation and kernel evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use impulse_probe::dsp::{KernelShape, ReferenceSignal, TimeGrid};

use crate::SAMPLE_RATES;

pub fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/kernel");

    for &rate in SAMPLE_RATES {
        group.bench_with_input(BenchmarkId::new("grid", rate), &rate, |b, &rate| {
            b.iter(|| TimeGrid::generate(black_box(-3.0), black_box(3.0), black_box(rate)))
        });

        let grid = TimeGrid::generate(-3.0, 3.0, rate).unwrap();
        for shape in KernelShape::ALL {
            group.bench_with_input(BenchmarkId::new(shape.name(), rate), &rate, |b, _| {
                b.iter(|| shape.evaluate(black_box(&grid), black_box(12.0), black_box(0.4)))
            });
        }

        let reference = ReferenceSignal::default();
        group.bench_with_input(BenchmarkId::new("reference", rate), &rate, |b, _| {
            b.iter(|| reference.evaluate(black_box(&grid)))
        });
    }

    group.finish();
}
