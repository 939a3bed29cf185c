//! # Pearson's Correlation Coefficient (CORREL)
//!
//! Windowed correlation of two raw series. A degenerate window (either
//! variance zero) yields 0.
//!
//! ## Parameters
//! - **period**: window size (default: 30, minimum: 1).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period - 1` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn correl_lookback(period: usize) -> usize {
    period - 1
}

pub fn correl(real0: &[f64], real1: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("correl")?;
    check_same_length("correl", &[real0.len(), real1.len()])?;
    if real0.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("correl", period, 1)?;

    let len = real0.len();
    let lookback = correl_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let n = period as f64;
    let mut s_x = 0.0;
    let mut s_y = 0.0;
    let mut s_xx = 0.0;
    let mut s_yy = 0.0;
    let mut s_xy = 0.0;
    for i in 0..lookback {
        let (x, y) = (real0[i], real1[i]);
        s_x += x;
        s_y += y;
        s_xx += x * x;
        s_yy += y * y;
        s_xy += x * y;
    }
    for i in lookback..len {
        let (x, y) = (real0[i], real1[i]);
        s_x += x;
        s_y += y;
        s_xx += x * x;
        s_yy += y * y;
        s_xy += x * y;
        let denom = ((s_xx - s_x * s_x / n) * (s_yy - s_y * s_y / n)).sqrt();
        out[i] = if is_zero(denom) {
            0.0
        } else {
            (s_xy - s_x * s_y / n) / denom
        };
        let t = i + 1 - period;
        let (x, y) = (real0[t], real1[t]);
        s_x -= x;
        s_y -= y;
        s_xx -= x * x;
        s_yy -= y * y;
        s_xy -= x * y;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_correl_identical_series_is_one() {
        initialize();
        let data: Vec<f64> = (0..50).map(|i| 20.0 + (i as f64 * 0.6).sin() * 3.0).collect();
        let out = correl(&data, &data, 30).expect("correl");
        assert!(out[28].is_nan());
        for i in 29..50 {
            assert!((out[i] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_correl_opposite_series_is_minus_one() {
        initialize();
        let a: Vec<f64> = (0..50).map(|i| 20.0 + (i as f64 * 0.6).sin() * 3.0).collect();
        let b: Vec<f64> = a.iter().map(|v| 100.0 - v).collect();
        let out = correl(&a, &b, 30).expect("correl");
        for i in 29..50 {
            assert!((out[i] + 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_correl_degenerate_window_is_zero() {
        initialize();
        let flat = [4.0; 40];
        let wave: Vec<f64> = (0..40).map(|i| (i as f64).sin()).collect();
        let out = correl(&flat, &wave, 30).expect("correl");
        for i in 29..40 {
            assert_eq!(out[i], 0.0);
        }
    }

    #[test]
    fn test_correl_empty_input() {
        initialize();
        assert!(correl(&[], &[], 30).expect("empty ok").is_empty());
    }
}
