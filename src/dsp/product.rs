//! Pointwise products and the discrete inner product.

use crate::error::{ProbeError, Result};

/*
Inner Product by Riemann Sum
============================

The black box answers with the continuous inner product

    <f, in> = ∫ f(t) · in(t) dt

On a uniform grid with step dt = 1 / sample_rate we approximate it with a
left Riemann sum:

    <f, in> ≈ Σ f(t[i]) · in(t[i]) · dt
            = (Σ f(t[i]) · in(t[i])) / sample_rate

Two steps, kept separate because the product series is plotted too:

    product[i] = kernel[i] × reference[i]        (pointwise)
    integral   = sum(product) / sample_rate      (Riemann sum)

Accuracy
--------

At 10 kHz the step is 0.1 ms. The narrowest kernel in the demo (a = 20
rectangle) is 50 ms wide, so it is still covered by about 500 samples. The
rectangle's hard edges cost at most one extra sample of area, i.e. a/sample_rate
(0.002 at a = 20). That is well below the 2-decimal display precision.

Both inputs must be aligned to the same grid. A length mismatch means the
grid was rebuilt between evaluations, which is a caller bug, so it is
reported rather than silently truncated by `zip`.
*/

/// Multiply two index-aligned series sample-by-sample.
///
/// # Errors
/// `DimensionMismatch` if the series differ in length.
pub fn pointwise_product(kernel: &[f64], reference: &[f64]) -> Result<Vec<f64>> {
    check_aligned(kernel, reference)?;
    Ok(kernel
        .iter()
        .zip(reference.iter())
        .map(|(&k, &r)| k * r)
        .collect())
}

/// Riemann-sum approximation of `∫ kernel(t) · reference(t) dt`.
///
/// # Errors
/// `DimensionMismatch` if the series differ in length.
pub fn inner_product(kernel: &[f64], reference: &[f64], sample_rate: f64) -> Result<f64> {
    check_aligned(kernel, reference)?;
    let sum: f64 = kernel
        .iter()
        .zip(reference.iter())
        .map(|(&k, &r)| k * r)
        .sum();
    Ok(sum / sample_rate)
}

/// Riemann sum of an already-multiplied series.
#[inline]
pub fn integrate(series: &[f64], sample_rate: f64) -> f64 {
    series.iter().sum::<f64>() / sample_rate
}

/// Round to `decimals` places for display.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn check_aligned(left: &[f64], right: &[f64]) -> Result<()> {
    if left.len() != right.len() {
        return Err(ProbeError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointwise_product_basic() {
        let kernel = [1.0, 0.5, -0.5, -1.0];
        let reference = [1.0, 0.5, 0.5, 0.0];
        let out = pointwise_product(&kernel, &reference).unwrap();
        assert_eq!(out, vec![1.0, 0.25, -0.25, 0.0]);
    }

    #[test]
    fn test_inner_product_scales_by_step() {
        let ones = [1.0; 10];
        // ten samples of 1.0 at 10 Hz integrate to one second of area
        assert_eq!(inner_product(&ones, &ones, 10.0).unwrap(), 1.0);
    }

    #[test]
    fn test_inner_product_matches_integrated_product() {
        let kernel = [0.2, 0.4, 0.6, 0.8];
        let reference = [1.0, -1.0, 0.5, 2.0];
        let product = pointwise_product(&kernel, &reference).unwrap();
        let direct = inner_product(&kernel, &reference, 4.0).unwrap();
        assert!((integrate(&product, 4.0) - direct).abs() < 1e-15);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = inner_product(&[1.0, 2.0], &[1.0], 1.0).unwrap_err();
        assert_eq!(err, ProbeError::DimensionMismatch { left: 2, right: 1 });
        assert!(pointwise_product(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_round_to_display_precision() {
        assert_eq!(round_to(0.66499, 2), 0.66);
        assert_eq!(round_to(-0.98999, 2), -0.99);
        assert_eq!(round_to(0.0707372, 2), 0.07);
    }
}
