//! # Beta (BETA)
//!
//! Regression slope of one series' single-bar returns against another's,
//! over a window of `period` returns. A zero reference price makes that
//! bar's return 0; a degenerate variance yields 0.
//!
//! ## Parameters
//! - **period**: number of returns in the window (default: 5, minimum: 1).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn beta_lookback(period: usize) -> usize {
    period
}

fn returns(real: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0f64; real.len()];
    for i in 1..real.len() {
        let prev = real[i - 1];
        out[i] = if is_zero(prev) { 0.0 } else { real[i] / prev - 1.0 };
    }
    out
}

pub fn beta(real0: &[f64], real1: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("beta")?;
    check_same_length("beta", &[real0.len(), real1.len()])?;
    if real0.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("beta", period, 1)?;

    let len = real0.len();
    let lookback = beta_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let x = returns(real0);
    let y = returns(real1);
    let n = period as f64;
    let mut s_xx = 0.0;
    let mut s_xy = 0.0;
    let mut s_x = 0.0;
    let mut s_y = 0.0;
    for i in 1..period {
        s_xx += x[i] * x[i];
        s_xy += x[i] * y[i];
        s_x += x[i];
        s_y += y[i];
    }
    for i in period..len {
        s_xx += x[i] * x[i];
        s_xy += x[i] * y[i];
        s_x += x[i];
        s_y += y[i];
        let denom = n * s_xx - s_x * s_x;
        out[i] = if is_zero(denom) {
            0.0
        } else {
            (n * s_xy - s_x * s_y) / denom
        };
        let t = i + 1 - period;
        s_xx -= x[t] * x[t];
        s_xy -= x[t] * y[t];
        s_x -= x[t];
        s_y -= y[t];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_beta_of_series_with_itself_is_one() {
        initialize();
        let data: Vec<f64> = (0..40).map(|i| 50.0 + (i as f64 * 0.8).sin() * 5.0).collect();
        let out = beta(&data, &data, 5).expect("beta");
        assert!(out[4].is_nan());
        for i in 5..40 {
            assert!((out[i] - 1.0).abs() < 1e-9, "index {i}: {}", out[i]);
        }
    }

    #[test]
    fn test_beta_constant_market_is_zero() {
        initialize();
        // Zero-variance reference returns hit the degenerate guard.
        let flat = [10.0; 20];
        let asset: Vec<f64> = (0..20).map(|i| 10.0 + (i % 3) as f64).collect();
        let out = beta(&flat, &asset, 5).expect("beta");
        for i in 5..20 {
            assert_eq!(out[i], 0.0);
        }
    }

    #[test]
    fn test_beta_empty_input() {
        initialize();
        assert!(beta(&[], &[], 5).expect("empty ok").is_empty());
    }
}
