//! Benchmarks for low-level primitives.

mod kernel;
mod product;

pub use kernel::bench_kernel;
pub use product::bench_product;
