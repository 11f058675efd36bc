//! Benchmarks for pointwise products and Riemann sums.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use impulse_probe::dsp::{product, KernelShape, ReferenceSignal, TimeGrid};

use crate::SAMPLE_RATES;

pub fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/product");

    for &rate in SAMPLE_RATES {
        // Pre-allocate inputs
        let grid = TimeGrid::generate(-3.0, 3.0, rate).unwrap();
        let kernel = KernelShape::Triangle.evaluate(&grid, 5.0, 0.0);
        let reference = ReferenceSignal::default().evaluate(&grid);

        group.bench_with_input(BenchmarkId::new("pointwise_product", rate), &rate, |b, _| {
            b.iter(|| product::pointwise_product(black_box(&kernel), black_box(&reference)))
        });

        group.bench_with_input(BenchmarkId::new("inner_product", rate), &rate, |b, &rate| {
            b.iter(|| {
                product::inner_product(black_box(&kernel), black_box(&reference), black_box(rate))
            })
        });
    }

    group.finish();
}
