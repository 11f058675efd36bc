use crate::{
    dsp::grid::sample_count,
    error::{check_range, ProbeError, Result},
    AMPLIFICATION_RANGE, DISPLAY_DECIMALS, GRID_END, GRID_SAMPLE_RATE, GRID_START,
    IMPULSE_THRESHOLD, REFERENCE_ANGULAR_FREQUENCY, SHIFT_RANGE,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for one probe pipeline.
///
/// Defaults reproduce the classroom demo: a 6 s window sampled at 10 kHz, a
/// `cos(3t)` reference, and the impulse view kicking in just below the top of
/// the amplification slider.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeConfig {
    pub grid_start: f64,
    pub grid_end: f64,
    pub sample_rate: f64,
    /// Strictly above this amplification the impulse limit is shown.
    pub impulse_threshold: f64,
    pub display_decimals: u32,
    pub reference_angular_frequency: f64,
    pub amplification_range: (f64, f64),
    pub shift_range: (f64, f64),
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self {
            grid_start: GRID_START,
            grid_end: GRID_END,
            sample_rate: GRID_SAMPLE_RATE,
            impulse_threshold: IMPULSE_THRESHOLD,
            display_decimals: DISPLAY_DECIMALS,
            reference_angular_frequency: REFERENCE_ANGULAR_FREQUENCY,
            amplification_range: AMPLIFICATION_RANGE,
            shift_range: SHIFT_RANGE,
        }
    }

    /// Set the grid sample rate (samples per second)
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the amplification above which the impulse limit is used
    pub fn impulse_threshold(mut self, threshold: f64) -> Self {
        self.impulse_threshold = threshold;
        self
    }

    /// Set the time window `[start, end)`
    pub fn window(mut self, start: f64, end: f64) -> Self {
        self.grid_start = start;
        self.grid_end = end;
        self
    }

    /// Check the configuration is internally consistent.
    ///
    /// The grid bounds themselves are checked again when the grid is built;
    /// this catches the cross-field constraints early.
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(ProbeError::InvalidRange {
                what: "sample rate",
                value: self.sample_rate,
                constraint: "must be positive and finite".to_string(),
            });
        }
        if !(self.grid_end > self.grid_start) {
            return Err(ProbeError::InvalidRange {
                what: "grid end",
                value: self.grid_end,
                constraint: format!("must be above grid start {}", self.grid_start),
            });
        }
        sample_count(self.grid_start, self.grid_end, self.sample_rate)?;
        let (a_min, a_max) = self.amplification_range;
        if !(a_min > 0.0 && a_max >= a_min) {
            return Err(ProbeError::InvalidRange {
                what: "amplification minimum",
                value: a_min,
                constraint: format!("must be positive and not above {a_max}"),
            });
        }
        let (s_min, s_max) = self.shift_range;
        if !(s_max >= s_min) {
            return Err(ProbeError::InvalidRange {
                what: "shift maximum",
                value: s_max,
                constraint: format!("must not be below {s_min}"),
            });
        }
        check_range("impulse threshold", self.impulse_threshold, a_min, a_max)?;
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_demo() {
        let config = ProbeConfig::default();
        assert_eq!(config.grid_start, -3.0);
        assert_eq!(config.grid_end, 3.0);
        assert_eq!(config.sample_rate, 10_000.0);
        assert_eq!(config.impulse_threshold, 19.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ProbeConfig::new()
            .sample_rate(2_000.0)
            .impulse_threshold(15.0)
            .window(-1.0, 1.0);
        assert_eq!(config.sample_rate, 2_000.0);
        assert_eq!(config.impulse_threshold, 15.0);
        assert_eq!((config.grid_start, config.grid_end), (-1.0, 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inconsistent_config() {
        assert!(ProbeConfig::new().sample_rate(0.0).validate().is_err());
        assert!(ProbeConfig::new().window(1.0, -1.0).validate().is_err());
        assert!(ProbeConfig::new().impulse_threshold(40.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_huge_sample_rate() {
        let config = ProbeConfig::new().sample_rate(1e300);
        assert!(matches!(
            config.validate(),
            Err(ProbeError::InvalidRange { what: "sample rate", .. })
        ));
        assert!(crate::probe::render(crate::ProbeParams::default(), &config).is_err());
    }
}
