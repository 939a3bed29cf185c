//! Validation and small numeric helpers shared by every indicator family.
//!
//! All indicators follow the same prologue: lifecycle check, empty-input
//! short-circuit (empty in, empty out, no error), shape check, parameter
//! range check. The helpers here keep that prologue to a couple of lines
//! per indicator.

use crate::utilities::errors::{TaError, MAX_PERIOD};

/// Allocate a full-length output buffer with every slot set to the
/// undefined sentinel. Indicators then overwrite positions `>= lookback`.
#[inline]
pub fn nan_vec(len: usize) -> Vec<f64> {
    vec![f64::NAN; len]
}

/// Validate a window period against the indicator's minimum. The maximum
/// is the engine-wide cap shared by every windowed indicator.
#[inline]
pub fn validate_period(name: &'static str, period: usize, min: usize) -> Result<(), TaError> {
    if period < min || period > MAX_PERIOD {
        return Err(TaError::InvalidPeriod {
            name,
            period,
            min,
            max: MAX_PERIOD,
        });
    }
    Ok(())
}

/// All input series of a multi-series indicator must share one length.
#[inline]
pub fn check_same_length(name: &'static str, lens: &[usize]) -> Result<(), TaError> {
    let expected = lens[0];
    for &actual in &lens[1..] {
        if actual != expected {
            return Err(TaError::LengthMismatch {
                name,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// A float parameter that must be a finite, non-negative number.
#[inline]
pub fn validate_non_negative(
    name: &'static str,
    param: &'static str,
    value: f64,
) -> Result<(), TaError> {
    if !value.is_finite() || value < 0.0 {
        return Err(TaError::InvalidParameter { name, param, value });
    }
    Ok(())
}

/// A float parameter that must be a finite, strictly positive number.
#[inline]
pub fn validate_positive(
    name: &'static str,
    param: &'static str,
    value: f64,
) -> Result<(), TaError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TaError::InvalidParameter { name, param, value });
    }
    Ok(())
}

/// Wilder's True Range for one bar.
#[inline(always)]
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// The reference treats magnitudes below this as zero when it guards
/// divisions (RSI, DX, stochastics, BBANDS deviation clamp).
pub const ZERO_EPS: f64 = 0.00000001;

#[inline(always)]
pub fn is_zero(v: f64) -> bool {
    v > -ZERO_EPS && v < ZERO_EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_range_dominant_leg() {
        // Plain high-low range.
        assert_eq!(true_range(12.0, 10.0, 11.0), 2.0);
        // Gap up: |high - prev close| dominates.
        assert_eq!(true_range(15.0, 14.0, 11.0), 4.0);
        // Gap down: |low - prev close| dominates.
        assert_eq!(true_range(9.0, 8.0, 11.0), 3.0);
    }

    #[test]
    fn test_validate_period_bounds() {
        assert!(validate_period("x", 2, 2).is_ok());
        assert!(validate_period("x", 1, 2).is_err());
        assert!(validate_period("x", MAX_PERIOD + 1, 2).is_err());
    }

    #[test]
    fn test_check_same_length() {
        assert!(check_same_length("x", &[5, 5, 5]).is_ok());
        assert!(check_same_length("x", &[5, 4]).is_err());
    }

    #[test]
    fn test_validate_positive_excludes_zero() {
        assert!(validate_positive("x", "p", 0.02).is_ok());
        assert!(validate_positive("x", "p", 0.0).is_err());
        assert!(validate_positive("x", "p", -0.1).is_err());
        assert!(validate_positive("x", "p", f64::NAN).is_err());
    }
}
