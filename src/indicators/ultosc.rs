//! # Ultimate Oscillator (ULTOSC)
//!
//! Buying pressure (`close - true low`) over true range, averaged across
//! three windows and blended 4:2:1. A zero true-range sum drops its term.
//!
//! ## Parameters
//! - **period1 / period2 / period3**: window sizes (defaults: 7, 14, 28).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< max(periods)` are
//!   NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, is_zero, nan_vec, true_range, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

pub fn ultosc_lookback(period1: usize, period2: usize, period3: usize) -> usize {
    period1.max(period2).max(period3)
}

pub fn ultosc(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period1: usize,
    period2: usize,
    period3: usize,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("ultosc")?;
    check_same_length("ultosc", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("ultosc", period1, 1)?;
    validate_period("ultosc", period2, 1)?;
    validate_period("ultosc", period3, 1)?;

    let len = high.len();
    let lookback = ultosc_lookback(period1, period2, period3);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    // Per-bar buying pressure and true range; index 0 has no prior close.
    let mut bp = vec![0.0f64; len];
    let mut tr = vec![0.0f64; len];
    for i in 1..len {
        let true_low = low[i].min(close[i - 1]);
        bp[i] = close[i] - true_low;
        tr[i] = true_range(high[i], low[i], close[i - 1]);
    }

    let windows = [period1, period2, period3];
    let mut bp_sums = [0.0f64; 3];
    let mut tr_sums = [0.0f64; 3];
    for (w, &period) in windows.iter().enumerate() {
        for i in lookback + 1 - period..=lookback {
            bp_sums[w] += bp[i];
            tr_sums[w] += tr[i];
        }
    }

    let weights = [4.0, 2.0, 1.0];
    for i in lookback..len {
        if i > lookback {
            for (w, &period) in windows.iter().enumerate() {
                bp_sums[w] += bp[i] - bp[i - period];
                tr_sums[w] += tr[i] - tr[i - period];
            }
        }
        let mut value = 0.0;
        for w in 0..3 {
            if !is_zero(tr_sums[w]) {
                value += weights[w] * (bp_sums[w] / tr_sums[w]);
            }
        }
        out[i] = 100.0 * value / 7.0;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    fn bars(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let close: Vec<f64> = (0..n).map(|i| 40.0 + (i as f64 * 0.5).sin() * 6.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 2.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 2.0).collect();
        (high, low, close)
    }

    #[test]
    fn test_ultosc_bounded() {
        initialize();
        let (high, low, close) = bars(80);
        let out = ultosc(&high, &low, &close, 7, 14, 28).expect("ultosc");
        assert!(out[27].is_nan());
        for i in 28..80 {
            assert!((0.0..=100.0).contains(&out[i]), "index {i}: {}", out[i]);
        }
    }

    #[test]
    fn test_ultosc_close_at_true_high_is_100() {
        initialize();
        // Close equal to the high on every bar, with no gaps down:
        // bp == tr each bar, so every ratio is 1.
        let close: Vec<f64> = (0..40).map(|i| 10.0 + i as f64).collect();
        let high = close.clone();
        let low: Vec<f64> = close.iter().map(|c| c - 0.5).collect();
        let out = ultosc(&high, &low, &close, 7, 14, 28).expect("ultosc");
        for i in 28..40 {
            assert!((out[i] - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ultosc_flat_bars_yield_zero() {
        initialize();
        let flat = [6.0; 40];
        let out = ultosc(&flat, &flat, &flat, 7, 14, 28).expect("ultosc");
        for i in 28..40 {
            assert_eq!(out[i], 0.0);
        }
    }

    #[test]
    fn test_ultosc_empty_input() {
        initialize();
        assert!(ultosc(&[], &[], &[], 7, 14, 28).expect("empty ok").is_empty());
    }
}
