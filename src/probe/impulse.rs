use crate::dsp::{product::round_to, ReferenceSignal};

/*
The Impulse Limit
=================

As a → ∞ the three kernels collapse onto the Dirac impulse δ(t - Δ). It has
no finite samples, so it cannot be drawn as a curve. Instead it is drawn as
an arrow whose height is its area:

    in(t) = δ(t - Δ)       arrow at Δ, height 1 (unit mass)

The sifting property gives the product panel exactly:

    <f, δ(t - Δ)> = ∫ f(t) δ(t - Δ) dt = f(Δ) = cos(3Δ)

so the product is drawn as an arrow of height f(Δ) at Δ.

Near the top of the slider the kernels are a few hundred samples wide, so
the numeric path is still accurate there. The threshold only decides when the
impulse panel is shown. The numeric results must already agree with f(Δ)
to display precision by then.
*/

/// A vertical arrow annotation: a spike of `height` at time `at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub at: f64,
    pub height: f64,
}

/// The analytic impulse-limit result for a shift `Δ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseLimit {
    /// Kernel panel: unit-mass arrow at Δ.
    pub kernel_arrow: Arrow,
    /// Product panel: arrow of height f(Δ) at Δ.
    pub product_arrow: Arrow,
    /// Exact inner product `f(Δ)`.
    pub inner_product: f64,
    /// `inner_product` rounded for display.
    pub rounded: f64,
}

impl ImpulseLimit {
    /// Evaluate the sifting property against `reference` at `shift`.
    pub fn evaluate(reference: &ReferenceSignal, shift: f64, decimals: u32) -> Self {
        let value = reference.value(shift);
        Self {
            kernel_arrow: Arrow {
                at: shift,
                height: 1.0,
            },
            product_arrow: Arrow {
                at: shift,
                height: value,
            },
            inner_product: value,
            rounded: round_to(value, decimals),
        }
    }
}

/// Whether `a` is past the impulse threshold. Strict: `a == threshold` stays numeric.
#[inline]
pub fn is_impulse_regime(a: f64, threshold: f64) -> bool {
    a > threshold
}
