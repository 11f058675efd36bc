//! The per-interaction probe pipeline.
//!
//! Every control change calls [`render`] once with the current parameters.
//! It rebuilds the time grid, evaluates every kernel family against the
//! reference signal, and, past the impulse threshold, adds the analytic
//! Dirac result. Nothing is cached between calls.
//!
//! ```text
//! ProbeParams ─→ TimeGrid ─┬→ KernelShape::evaluate ─┐
//!                          └→ ReferenceSignal ───────┴→ product ─→ inner product ─→ KernelPanel ×3
//! ProbeParams ─→ a > threshold? ─→ ImpulseLimit (f(Δ), exact)
//! ```

pub mod config;
pub mod impulse;

use tracing::debug;

use crate::{
    dsp::{
        product::{integrate, pointwise_product, round_to},
        KernelShape, ReferenceSignal, TimeGrid,
    },
    error::{check_range, Result},
};

pub use config::ProbeConfig;
pub use impulse::{Arrow, ImpulseLimit};

/// Validated control values: amplification `a` and shift `Δ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeParams {
    amplification: f64,
    shift: f64,
}

impl ProbeParams {
    /// Validate against the default slider ranges.
    pub fn new(amplification: f64, shift: f64) -> Result<Self> {
        Self::with_config(amplification, shift, &ProbeConfig::default())
    }

    /// Validate against the ranges in `config`. Out-of-range values are
    /// rejected, never clamped.
    pub fn with_config(amplification: f64, shift: f64, config: &ProbeConfig) -> Result<Self> {
        let (a_min, a_max) = config.amplification_range;
        let (s_min, s_max) = config.shift_range;
        Ok(Self {
            amplification: check_range("amplification", amplification, a_min, a_max)?,
            shift: check_range("shift", shift, s_min, s_max)?,
        })
    }

    pub fn amplification(&self) -> f64 {
        self.amplification
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }
}

impl Default for ProbeParams {
    fn default() -> Self {
        Self {
            amplification: crate::AMPLIFICATION_RANGE.0,
            shift: 0.0,
        }
    }
}

/// Which path produced the headline result of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Kernels sampled on the grid, inner products by Riemann sum.
    Discrete,
    /// `a` past the threshold: analytic Dirac result shown.
    ImpulseLimit,
}

/// One kernel family evaluated against the reference signal.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelPanel {
    pub shape: KernelShape,
    pub kernel: Vec<f64>,
    pub product: Vec<f64>,
    /// Riemann-sum inner product of this kernel with the reference.
    pub inner_product: f64,
    /// `inner_product` rounded for display.
    pub rounded: f64,
}

impl KernelPanel {
    /// Evaluate `shape` on `grid`, multiply by `reference`, and integrate.
    pub fn evaluate(
        shape: KernelShape,
        grid: &TimeGrid,
        reference: &[f64],
        params: ProbeParams,
        decimals: u32,
    ) -> Result<Self> {
        let kernel = shape.evaluate(grid, params.amplification, params.shift);
        let product = pointwise_product(&kernel, reference)?;
        let inner_product = integrate(&product, grid.sample_rate());
        Ok(Self {
            shape,
            kernel,
            product,
            inner_product,
            rounded: round_to(inner_product, decimals),
        })
    }

    /// Discrete integral of the kernel alone (≈ 1 when its support fits the grid).
    pub fn mass(&self, sample_rate: f64) -> f64 {
        integrate(&self.kernel, sample_rate)
    }
}

/// Everything the display needs for one parameter setting.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeFrame {
    pub params: ProbeParams,
    pub grid: TimeGrid,
    pub reference: Vec<f64>,
    /// One panel per entry of [`KernelShape::ALL`], in that order.
    pub panels: Vec<KernelPanel>,
    /// Present only when `a` is strictly above the impulse threshold.
    pub impulse: Option<ImpulseLimit>,
}

impl ProbeFrame {
    pub fn regime(&self) -> Regime {
        if self.impulse.is_some() {
            Regime::ImpulseLimit
        } else {
            Regime::Discrete
        }
    }

    pub fn panel(&self, shape: KernelShape) -> Option<&KernelPanel> {
        self.panels.iter().find(|p| p.shape == shape)
    }
}

/// Run the full pipeline for `params`.
///
/// # Errors
/// `InvalidRange` if `config` is inconsistent or `params` fall outside its
/// ranges. `DimensionMismatch` cannot occur for a well-formed grid.
pub fn render(params: ProbeParams, config: &ProbeConfig) -> Result<ProbeFrame> {
    config.validate()?;
    let params = ProbeParams::with_config(params.amplification, params.shift, config)?;

    let grid = TimeGrid::generate(config.grid_start, config.grid_end, config.sample_rate)?;
    let signal = ReferenceSignal::cosine(config.reference_angular_frequency);
    let reference = signal.evaluate(&grid);

    let panels = KernelShape::ALL
        .iter()
        .map(|&shape| KernelPanel::evaluate(shape, &grid, &reference, params, config.display_decimals))
        .collect::<Result<Vec<_>>>()?;

    let impulse = impulse::is_impulse_regime(params.amplification, config.impulse_threshold)
        .then(|| ImpulseLimit::evaluate(&signal, params.shift, config.display_decimals));

    debug!(
        a = params.amplification,
        shift = params.shift,
        samples = grid.len(),
        rect = panels[0].inner_product,
        tri = panels[1].inner_product,
        sinc = panels[2].inner_product,
        impulse = ?impulse.map(|i| i.inner_product),
        "rendered probe frame"
    );

    Ok(ProbeFrame {
        params,
        grid,
        reference,
        panels,
        impulse,
    })
}
