//! Full-pass benchmarks, modelling one slider interaction each.

mod render;

pub use render::bench_render;
