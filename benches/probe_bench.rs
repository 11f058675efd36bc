//! Benchmarks for the probe pipeline.
//!
//! Run with: cargo bench
//!
//! Every slider change runs one full pipeline pass over the 60 000-sample
//! grid, so a pass should stay far below interactive latency (~16 ms for
//! one frame at 60 fps).
//!
//! Benchmark groups:
//!   - dsp/*        Grid, kernel and inner-product primitives
//!   - scenarios/*  Full render passes as the TUI triggers them

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Grid sample rates to sweep: the demo's 10 kHz plus coarser/finer grids.
pub const SAMPLE_RATES: &[f64] = &[1_000.0, 10_000.0, 50_000.0];

criterion_group!(
    benches,
    // Low-level primitives
    dsp::bench_kernel,
    dsp::bench_product,
    // Full passes
    scenarios::bench_render,
);
criterion_main!(benches);
