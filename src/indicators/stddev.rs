//! # Standard Deviation (STDDEV)
//!
//! Square root of the windowed population variance, scaled by `nbdev`.
//! Variances within epsilon of zero (including tiny negatives from
//! floating-point cancellation) map to 0 rather than NaN.
//!
//! ## Parameters
//! - **period**: window size (default: 5, minimum: 2).
//! - **nbdev**: deviation multiplier (default: 1.0).
//!
//! ## Errors
//! - **InvalidPeriod**, **InvalidParameter** (non-finite `nbdev`),
//!   **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period - 1` are NaN.

use crate::indicators::var::{var_lookback, var_unchecked};
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{validate_period, ZERO_EPS};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn stddev_lookback(period: usize) -> usize {
    var_lookback(period)
}

/// Windowed population standard deviation with `nbdev == 1`; callers
/// validate. Shared with BBANDS.
pub(crate) fn stddev_unchecked(real: &[f64], period: usize) -> Vec<f64> {
    let mut out = var_unchecked(real, period);
    for v in out.iter_mut() {
        if v.is_nan() {
            continue;
        }
        *v = if *v < ZERO_EPS { 0.0 } else { v.sqrt() };
    }
    out
}

pub fn stddev(real: &[f64], period: usize, nbdev: f64) -> Result<Vec<f64>, TaError> {
    ensure_initialized("stddev")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("stddev", period, 2)?;
    if !nbdev.is_finite() {
        return Err(TaError::InvalidParameter {
            name: "stddev",
            param: "nbdev",
            value: nbdev,
        });
    }
    let mut out = stddev_unchecked(real, period);
    if nbdev != 1.0 {
        for v in out.iter_mut() {
            *v *= nbdev;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_stddev_hand_computed() {
        initialize();
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let out = stddev(&data, 8, 1.0).expect("stddev");
        assert!((out[7] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_stddev_nbdev_scales() {
        initialize();
        let data: Vec<f64> = (0..15).map(|i| (i as f64).cos() * 3.0 + 10.0).collect();
        let one = stddev(&data, 5, 1.0).expect("stddev");
        let two = stddev(&data, 5, 2.0).expect("stddev");
        for i in 4..15 {
            assert!((two[i] - 2.0 * one[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_stddev_constant_series_is_zero() {
        initialize();
        let out = stddev(&[42.0; 12], 5, 1.0).expect("stddev");
        for i in 4..12 {
            assert_eq!(out[i], 0.0);
        }
    }

    #[test]
    fn test_stddev_empty_input() {
        initialize();
        assert!(stddev(&[], 5, 1.0).expect("empty ok").is_empty());
    }
}
