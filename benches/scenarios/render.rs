//! One complete pipeline pass per iteration.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use impulse_probe::probe::{render, ProbeConfig, ProbeParams};

use crate::SAMPLE_RATES;

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/render");

    for &rate in SAMPLE_RATES {
        let config = ProbeConfig::new().sample_rate(rate);

        // Wide kernels, numeric path only
        let wide = ProbeParams::new(1.0, 0.0).unwrap();
        group.bench_with_input(BenchmarkId::new("discrete", rate), &rate, |b, _| {
            b.iter(|| render(black_box(wide), black_box(&config)))
        });

        // Past the threshold: numeric panels plus the impulse column
        let sharp = ProbeParams::new(20.0, 0.5).unwrap();
        group.bench_with_input(BenchmarkId::new("impulse", rate), &rate, |b, _| {
            b.iter(|| render(black_box(sharp), black_box(&config)))
        });
    }

    group.finish();
}
