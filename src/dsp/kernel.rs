use std::f64::consts::PI;

use crate::dsp::grid::TimeGrid;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Probe Kernels
=============

A probe kernel is the test function we feed into the black box. The box
answers with the inner product <f, in>, and the question is which `in(t)`
makes that answer equal to f(Δ).

Vocabulary
----------

  a        Amplification (sharpness). Scales the kernel's height by `a` and
           squeezes its width by `1/a`, so the area stays at 1.

  Δ        Shift. The kernel is centred on t = Δ, which is the point of f
           we end up probing.

  x        The normalised argument a·(t - Δ). Every shape below is a
           unit-area prototype p(x) stretched into a·p(a·(t - Δ)).


The Shapes
----------

  Rectangle           Triangle            Sinc

     a ┌──┐             a  ╱╲               a   ╱╲
       │  │                ╱  ╲                 ╱  ╲
       │  │               ╱    ╲         ~~╲__╱    ╲__╱~~
  ─────┘  └─────     ────╱      ╲────
      Δ±1/2a             Δ±1/a              zeros at Δ + k/a

  rect(x) = 1 where |x| <= 1/2, else 0
  tri(x)  = 1 - |x| where |x| <= 1, else 0
  sinc(x) = sin(πx) / (πx)

Each prototype integrates to 1, and substituting u = a·(t - Δ) shows the
scaled kernel does too:

    ∫ a·p(a·(t - Δ)) dt = ∫ p(u) du = 1

As a grows, all three concentrate their unit area around Δ and act more
and more like a Dirac impulse δ(t - Δ).


The Sinc Singularity
--------------------

sin(πx) / (πx) is 0/0 at x = 0. The limit is 1, so the scaled kernel's
value at t = Δ is exactly a. Evaluating the formula naively there yields
NaN, and a single NaN poisons the whole inner-product sum. The sinc
evaluator checks for x = 0 and returns the limit directly. The demo grid
hits x = 0 exactly whenever Δ lands on a sample (Δ = 0 does, at t[30 000]).
*/

/// The three sampled probe kernel families.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelShape {
    Rectangle,
    Triangle,
    Sinc,
}

impl KernelShape {
    /// All shapes, in display order.
    pub const ALL: [KernelShape; 3] = [
        KernelShape::Rectangle,
        KernelShape::Triangle,
        KernelShape::Sinc,
    ];

    /// Kernel value at time `t` for amplification `a` and shift `shift`.
    #[inline]
    pub fn value(self, t: f64, a: f64, shift: f64) -> f64 {
        let x = a * (t - shift);
        a * self.prototype(x)
    }

    /// Evaluate the kernel at every sample of `grid`.
    pub fn evaluate(self, grid: &TimeGrid, a: f64, shift: f64) -> Vec<f64> {
        grid.map(|t| self.value(t, a, shift))
    }

    /// The unit-area prototype `p(x)`.
    #[inline]
    pub fn prototype(self, x: f64) -> f64 {
        match self {
            KernelShape::Rectangle => rect(x),
            KernelShape::Triangle => tri(x),
            KernelShape::Sinc => sinc(x),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KernelShape::Rectangle => "rect",
            KernelShape::Triangle => "tri",
            KernelShape::Sinc => "sinc",
        }
    }
}

impl std::fmt::Display for KernelShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
pub fn rect(x: f64) -> f64 {
    if x.abs() <= 0.5 {
        1.0
    } else {
        0.0
    }
}

#[inline]
pub fn tri(x: f64) -> f64 {
    let ax = x.abs();
    if ax <= 1.0 {
        1.0 - ax
    } else {
        0.0
    }
}

/// Normalised sinc, with the removable singularity at 0 filled in.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}
