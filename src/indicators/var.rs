//! # Variance (VAR)
//!
//! Windowed population variance, `E[x²] − E[x]²` over the trailing window.
//! The `nbdev` argument is accepted for interface parity but has no effect
//! on the output.
//!
//! ## Parameters
//! - **period**: window size (default: 5, minimum: 1).
//! - **nbdev**: ignored (default: 1.0).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period - 1` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn var_lookback(period: usize) -> usize {
    period - 1
}

/// Core windowed variance with running sums; callers validate.
pub(crate) fn var_unchecked(real: &[f64], period: usize) -> Vec<f64> {
    let len = real.len();
    let lookback = var_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return out;
    }
    let inv_period = 1.0 / period as f64;
    let mut period_total1 = 0.0;
    let mut period_total2 = 0.0;
    for &v in &real[..lookback] {
        period_total1 += v;
        period_total2 += v * v;
    }
    let mut trailing = 0;
    for i in lookback..len {
        let v = real[i];
        period_total1 += v;
        period_total2 += v * v;
        let mean1 = period_total1 * inv_period;
        let mean2 = period_total2 * inv_period;
        out[i] = mean2 - mean1 * mean1;
        let old = real[trailing];
        trailing += 1;
        period_total1 -= old;
        period_total2 -= old * old;
    }
    out
}

pub fn var(real: &[f64], period: usize, _nbdev: f64) -> Result<Vec<f64>, TaError> {
    ensure_initialized("var")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("var", period, 1)?;
    Ok(var_unchecked(real, period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_var_hand_computed() {
        initialize();
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Population variance of the full window [2,4,4,4,5,5,7,9] is 4.0.
        let out = var(&data, 8, 1.0).expect("var");
        assert!((out[7] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_var_nbdev_has_no_effect() {
        initialize();
        let data: Vec<f64> = (0..20).map(|i| (i as f64 * 1.3).sin() * 7.0).collect();
        let a = var(&data, 5, 1.0).expect("var");
        let b = var(&data, 5, 3.0).expect("var");
        for i in 4..20 {
            assert_eq!(a[i], b[i]);
        }
    }

    #[test]
    fn test_var_constant_series_is_zero() {
        initialize();
        let out = var(&[3.0; 10], 5, 1.0).expect("var");
        for i in 4..10 {
            assert!(out[i].abs() < 1e-12);
        }
    }

    #[test]
    fn test_var_empty_input() {
        initialize();
        assert!(var(&[], 5, 1.0).expect("empty ok").is_empty());
    }
}
