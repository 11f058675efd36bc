use thiserror::Error;

/// Errors raised when the pipeline is driven with inputs outside its contract.
///
/// The sinc kernel's 0/0 point is not an error: the kernel substitutes its
/// analytic limit and never reports it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    /// Two sequences that should share a time grid have different lengths.
    #[error("dimension mismatch: {left} samples vs {right} samples")]
    DimensionMismatch { left: usize, right: usize },
    /// A parameter or grid bound violates its documented constraint.
    #[error("invalid {what} = {value}: {constraint}")]
    InvalidRange {
        what: &'static str,
        value: f64,
        constraint: String,
    },
}

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Checks `value ∈ [min, max]`, rejecting NaN and infinities.
pub(crate) fn check_range(what: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(ProbeError::InvalidRange {
            what,
            value,
            constraint: format!("must lie in [{min}, {max}]"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_accepts_bounds() {
        assert_eq!(check_range("a", 1.0, 1.0, 20.0), Ok(1.0));
        assert_eq!(check_range("a", 20.0, 1.0, 20.0), Ok(20.0));
    }

    #[test]
    fn test_check_range_rejects_nan() {
        let err = check_range("shift", f64::NAN, -3.0, 3.0).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidRange { what: "shift", .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = ProbeError::DimensionMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "dimension mismatch: 3 samples vs 4 samples");

        let err = check_range("amplification", 25.0, 1.0, 20.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid amplification = 25: must lie in [1, 20]");
    }
}
