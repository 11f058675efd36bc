//! Numerical primitives behind the probe demo.
//!
//! Everything here is a pure function of its inputs: a sampled time axis,
//! the probe kernels evaluated on it, the reference signal, and the discrete
//! inner product that ties them together. The `probe` module layers the
//! per-interaction pipeline on top.

/// Uniformly sampled time axis.
pub mod grid;
/// Rectangle, triangle and sinc probe kernels.
pub mod kernel;
/// Pointwise products and Riemann-sum inner products.
pub mod product;
/// The fixed reference signal `cos(3t)`.
pub mod reference;

pub use grid::TimeGrid;
pub use kernel::KernelShape;
pub use reference::ReferenceSignal;
