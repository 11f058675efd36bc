use crate::{
    error::{ProbeError, Result},
    MAX_GRID_SAMPLES,
};

/*
Sampled Time Axis
=================

Every curve in the demo lives on the same discrete time axis. Kernels, the
reference signal and their product are all index-aligned against it, which
is what lets the inner product be a plain sum.

    start                                              end
      |----|----|----|----|----|----|----|----|----|----)
      t0   t1   t2   ...                          tN-1

      t[i] = start + i / sample_rate
      N    = ceil((end - start) * sample_rate)

The interval is half-open: `end` itself is never sampled. With the demo
defaults (-3 s to 3 s at 10 kHz) that is 60 000 samples and t[N-1] = 2.9999.

Samples are computed from the index rather than by repeatedly adding the
step, so the spacing error does not accumulate across 60 000 additions. It
also means t[30 000] is exactly 0.0, which matters for the sinc kernel.
*/

/// A strictly increasing, uniformly spaced sequence of time samples.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    sample_rate: f64,
    samples: Vec<f64>,
}

impl TimeGrid {
    /// Sample `[start, end)` at `sample_rate` samples per second.
    ///
    /// # Errors
    /// `InvalidRange` when `start >= end`, when `sample_rate <= 0`, when any
    /// argument is not finite, or when the grid would exceed `MAX_GRID_SAMPLES`.
    pub fn generate(start: f64, end: f64, sample_rate: f64) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(ProbeError::InvalidRange {
                what: "sample rate",
                value: sample_rate,
                constraint: "must be positive and finite".to_string(),
            });
        }
        if !start.is_finite() {
            return Err(ProbeError::InvalidRange {
                what: "grid start",
                value: start,
                constraint: "must be finite".to_string(),
            });
        }
        if !end.is_finite() || end <= start {
            return Err(ProbeError::InvalidRange {
                what: "grid end",
                value: end,
                constraint: format!("must be finite and above grid start {start}"),
            });
        }

        let len = sample_count(start, end, sample_rate)?;
        let samples = (0..len)
            .map(|i| start + i as f64 / sample_rate)
            .collect();

        tracing::trace!(start, end, sample_rate, len, "generated time grid");

        Ok(Self {
            start,
            end,
            sample_rate,
            samples,
        })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Spacing between consecutive samples (`1 / sample_rate`).
    pub fn step(&self) -> f64 {
        1.0 / self.sample_rate
    }

    /// Evaluate `f` at every sample, producing an index-aligned series.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.samples.iter().map(|&t| f(t)).collect()
    }
}

/// Number of samples in `[start, end)` at `sample_rate`, capped at
/// `MAX_GRID_SAMPLES`.
///
/// Bounds are assumed ordered and finite; only the count itself is checked.
pub fn sample_count(start: f64, end: f64, sample_rate: f64) -> Result<usize> {
    let count = ((end - start) * sample_rate).ceil();
    if !count.is_finite() || count > MAX_GRID_SAMPLES as f64 {
        return Err(ProbeError::InvalidRange {
            what: "sample rate",
            value: sample_rate,
            constraint: format!(
                "yields {count} samples over [{start}, {end}), limit is {MAX_GRID_SAMPLES}"
            ),
        });
    }
    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_grid_shape() {
        let grid = TimeGrid::generate(-3.0, 3.0, 10_000.0).unwrap();
        assert_eq!(grid.len(), 60_000);
        assert_eq!(grid.samples()[0], -3.0);
        assert_eq!(grid.samples()[30_000], 0.0);
        assert!((grid.samples()[59_999] - 2.9999).abs() < 1e-12);
    }

    #[test]
    fn test_strictly_increasing_constant_spacing() {
        let grid = TimeGrid::generate(-1.0, 1.0, 1000.0).unwrap();
        for pair in grid.samples().windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - grid.step()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fractional_length_rounds_up() {
        let grid = TimeGrid::generate(0.0, 1.05, 10.0).unwrap();
        assert_eq!(grid.len(), 11);
    }

    #[test]
    fn test_rejects_bad_ranges() {
        assert!(TimeGrid::generate(3.0, -3.0, 10.0).is_err());
        assert!(TimeGrid::generate(1.0, 1.0, 10.0).is_err());
        assert!(TimeGrid::generate(-3.0, 3.0, 0.0).is_err());
        assert!(TimeGrid::generate(-3.0, 3.0, -5.0).is_err());
        assert!(TimeGrid::generate(f64::NAN, 3.0, 10.0).is_err());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        for rate in [1e300, f64::MAX, 1e7] {
            assert!(matches!(
                TimeGrid::generate(-3.0, 3.0, rate),
                Err(ProbeError::InvalidRange { what: "sample rate", .. })
            ));
        }
        let at_limit = sample_count(0.0, 1.0, MAX_GRID_SAMPLES as f64).unwrap();
        assert_eq!(at_limit, MAX_GRID_SAMPLES);
    }

    #[test]
    fn test_map_is_index_aligned() {
        let grid = TimeGrid::generate(0.0, 1.0, 4.0).unwrap();
        assert_eq!(grid.map(|t| 2.0 * t), vec![0.0, 0.5, 1.0, 1.5]);
    }
}
