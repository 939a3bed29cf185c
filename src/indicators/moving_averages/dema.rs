//! # Double Exponential Moving Average (DEMA)
//!
//! `DEMA = 2*EMA(price) - EMA(EMA(price))`. The nested EMA is computed on
//! the valid region of the first, so the lookback compounds to
//! `2*(period-1)`.
//!
//! ## Parameters
//! - **period**: window size in bars (default: 30, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**: `period` outside `2..=100000`.
//! - **NotInitialized**: engine not initialized.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< 2*(period-1)` are NaN.

use crate::indicators::moving_averages::ema::ema_unchecked;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn dema_lookback(period: usize) -> usize {
    2 * (period - 1)
}

pub fn dema(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("dema")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("dema", period, 2)?;

    let len = real.len();
    let lookback = dema_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let ema1_start = period - 1;
    let ema1 = ema_unchecked(real, period);
    let ema2 = ema_unchecked(&ema1[ema1_start..], period);
    for i in lookback..len {
        out[i] = 2.0 * ema1[i] - ema2[i - ema1_start];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_dema_lookback_and_finiteness() {
        initialize();
        let data: Vec<f64> = (0..40).map(|i| (i as f64 * 0.7).sin() + 10.0).collect();
        let out = dema(&data, 5).expect("dema");
        let lb = dema_lookback(5);
        assert!(out[..lb].iter().all(|v| v.is_nan()));
        assert!(out[lb..].iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_dema_constant_series() {
        initialize();
        let data = [4.2; 30];
        let out = dema(&data, 6).expect("dema");
        for &v in &out[dema_lookback(6)..] {
            assert!((v - 4.2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dema_empty_input() {
        initialize();
        assert!(dema(&[], 5).expect("empty ok").is_empty());
    }
}
