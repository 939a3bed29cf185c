//! # Exponential Moving Average (EMA)
//!
//! Smoothing constant `k = 2 / (period + 1)`. The value at index
//! `period - 1` is seeded with the SMA of the first `period` inputs, so the
//! first EMA value and the first SMA value coincide.
//!
//! ## Parameters
//! - **period**: window size in bars (default: 30, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**: `period` outside `2..=100000`.
//! - **NotInitialized**: engine not initialized.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period - 1` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn ema_lookback(period: usize) -> usize {
    period - 1
}

/// Core recursion with a caller-supplied smoothing constant; shared with
/// MACDFIX, which uses fixed constants instead of `2/(period+1)`.
pub(crate) fn ema_with_k(real: &[f64], period: usize, k: f64) -> Vec<f64> {
    let len = real.len();
    let lookback = period - 1;
    let mut out = nan_vec(len);
    if len <= lookback {
        return out;
    }

    let mut seed = 0.0;
    for &v in &real[..period] {
        seed += v;
    }
    let mut prev = seed / period as f64;
    out[lookback] = prev;
    for i in period..len {
        prev = (real[i] - prev) * k + prev;
        out[i] = prev;
    }
    out
}

/// Validation-free entry used by composite indicators on compact slices.
pub(crate) fn ema_unchecked(real: &[f64], period: usize) -> Vec<f64> {
    ema_with_k(real, period, 2.0 / (period as f64 + 1.0))
}

pub fn ema(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("ema")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("ema", period, 2)?;
    Ok(ema_unchecked(real, period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::moving_averages::sma::sma;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_ema_seed_equals_sma() {
        initialize();
        let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0];
        for period in 2..=6 {
            let e = ema(&data, period).expect("ema");
            let s = sma(&data, period).expect("sma");
            // The SMA's rolling sum may differ from the seed's plain sum
            // by a rounding step.
            assert!(
                (e[period - 1] - s[period - 1]).abs() < 1e-12,
                "period {period}"
            );
        }
    }

    #[test]
    fn test_ema_recursion() {
        initialize();
        let data = [2.0, 4.0, 6.0, 8.0];
        let out = ema(&data, 3).expect("ema");
        let k = 2.0 / 4.0;
        assert!(out[0].is_nan() && out[1].is_nan());
        assert_eq!(out[2], 4.0);
        assert_eq!(out[3], (8.0 - 4.0) * k + 4.0);
    }

    #[test]
    fn test_ema_empty_input() {
        initialize();
        assert!(ema(&[], 5).expect("empty ok").is_empty());
    }
}
