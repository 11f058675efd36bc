use crate::{dsp::grid::TimeGrid, REFERENCE_ANGULAR_FREQUENCY};

/// The "unknown" signal hidden in the black box: `f(t) = cos(ωt)`.
///
/// The demo fixes ω at 3 rad/s. The probe kernels never see this value
/// directly; they only recover it through inner products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSignal {
    angular_frequency: f64,
}

impl ReferenceSignal {
    pub fn cosine(angular_frequency: f64) -> Self {
        Self { angular_frequency }
    }

    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        (self.angular_frequency * t).cos()
    }

    pub fn evaluate(&self, grid: &TimeGrid) -> Vec<f64> {
        grid.map(|t| self.value(t))
    }
}

impl Default for ReferenceSignal {
    fn default() -> Self {
        Self::cosine(REFERENCE_ANGULAR_FREQUENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cos_3t() {
        let f = ReferenceSignal::default();
        assert_eq!(f.value(0.0), 1.0);
        assert!((f.value(0.5) - 1.5f64.cos()).abs() < 1e-15);
    }

    #[test]
    fn test_evaluate_is_grid_aligned() {
        let grid = TimeGrid::generate(-3.0, 3.0, 100.0).unwrap();
        let samples = ReferenceSignal::default().evaluate(&grid);
        assert_eq!(samples.len(), grid.len());
        assert_eq!(samples[0], (-9.0f64).cos());
    }
}
