pub mod dsp; // Grid, kernels, reference signal and inner products
pub mod error;
pub mod probe; // Per-interaction render pipeline
pub mod sine; // Companion sine-wave explorer

pub use error::{ProbeError, Result};
pub use probe::{config::ProbeConfig, ProbeFrame, ProbeParams};

/// Left edge of the demo time axis (seconds).
pub const GRID_START: f64 = -3.0;
/// Right edge of the demo time axis (seconds, exclusive).
pub const GRID_END: f64 = 3.0;
/// Samples per second on the demo time axis.
pub const GRID_SAMPLE_RATE: f64 = 10_000.0;
/// Largest time grid a single pass will allocate.
pub const MAX_GRID_SAMPLES: usize = 10_000_000;

/// Above this amplification the kernels are replaced by a Dirac impulse.
pub const IMPULSE_THRESHOLD: f64 = 19.5;
/// Decimal places shown for inner-product annotations.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Angular frequency (rad/s) of the reference signal `cos(ωt)`.
pub const REFERENCE_ANGULAR_FREQUENCY: f64 = 3.0;

/// Slider bounds for the amplification `a`.
pub const AMPLIFICATION_RANGE: (f64, f64) = (1.0, 20.0);
/// Slider bounds for the time shift `Δ`.
pub const SHIFT_RANGE: (f64, f64) = (-3.0, 3.0);
