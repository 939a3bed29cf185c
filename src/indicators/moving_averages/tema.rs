//! # Triple Exponential Moving Average (TEMA)
//!
//! `TEMA = 3*EMA1 - 3*EMA2 + EMA3` where each level is an EMA of the
//! previous one; lookback compounds to `3*(period-1)`.
//!
//! ## Parameters
//! - **period**: window size in bars (default: 30, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**: `period` outside `2..=100000`.
//! - **NotInitialized**: engine not initialized.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< 3*(period-1)` are NaN.

use crate::indicators::moving_averages::ema::ema_unchecked;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn tema_lookback(period: usize) -> usize {
    3 * (period - 1)
}

pub fn tema(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("tema")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("tema", period, 2)?;

    let len = real.len();
    let lookback = tema_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let step = period - 1;
    let ema1 = ema_unchecked(real, period);
    let ema2 = ema_unchecked(&ema1[step..], period);
    let ema3 = ema_unchecked(&ema2[step..], period);
    for i in lookback..len {
        out[i] = 3.0 * ema1[i] - 3.0 * ema2[i - step] + ema3[i - 2 * step];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_tema_lookback_and_finiteness() {
        initialize();
        let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.4).cos() * 3.0 + 50.0).collect();
        let out = tema(&data, 5).expect("tema");
        let lb = tema_lookback(5);
        assert!(out[..lb].iter().all(|v| v.is_nan()));
        assert!(out[lb..].iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_tema_constant_series() {
        initialize();
        let data = [1.5; 40];
        let out = tema(&data, 4).expect("tema");
        for &v in &out[tema_lookback(4)..] {
            assert!((v - 1.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tema_empty_input() {
        initialize();
        assert!(tema(&[], 5).expect("empty ok").is_empty());
    }
}
