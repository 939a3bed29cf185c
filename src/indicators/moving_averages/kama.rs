//! # Kaufman Adaptive Moving Average (KAMA)
//!
//! EMA whose smoothing constant adapts every bar to an efficiency ratio:
//! net change over the trailing window divided by the sum of absolute
//! bar-to-bar changes. The squared constant runs between the fixed
//! "fastest" (period 2) and "slowest" (period 30) EMA constants.
//!
//! ## Parameters
//! - **period**: efficiency-ratio window in bars (default: 30, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**: `period` outside `2..=100000`.
//! - **NotInitialized**: engine not initialized.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn kama_lookback(period: usize) -> usize {
    period
}

pub fn kama(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("kama")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("kama", period, 2)?;

    let len = real.len();
    let lookback = kama_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let const_max = 2.0 / (30.0 + 1.0);
    let const_diff = 2.0 / (2.0 + 1.0) - const_max;

    // Trailing sum of absolute one-bar changes; seeded over the first
    // period-1 deltas, maintained with one add and one subtract per bar.
    let mut sum_roc1 = 0.0;
    for j in 1..period {
        sum_roc1 += (real[j] - real[j - 1]).abs();
    }

    let mut prev_kama = real[period - 1];
    let mut trailing = 0usize;
    for today in period..len {
        let period_roc = real[today] - real[trailing];
        sum_roc1 -= (real[trailing + 1] - real[trailing]).abs();
        sum_roc1 += (real[today] - real[today - 1]).abs();

        // Signed comparison on purpose: the reference compares the raw net
        // change against the (non-negative) volatility sum.
        let er = if sum_roc1 <= period_roc || is_zero(sum_roc1) {
            1.0
        } else {
            (period_roc / sum_roc1).abs()
        };
        let sc = er * const_diff + const_max;
        let sc = sc * sc;

        prev_kama += sc * (real[today] - prev_kama);
        out[today] = prev_kama;
        trailing += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_kama_lookback_and_finiteness() {
        initialize();
        let data: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect();
        let out = kama(&data, 10).expect("kama");
        assert!(out[..10].iter().all(|v| v.is_nan()));
        assert!(out[10..].iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_kama_fully_efficient_trend() {
        initialize();
        // Strict monotonic ramp: efficiency ratio is 1, so KAMA is an EMA
        // with the fastest constant, seeded at the bar before first output.
        let data: Vec<f64> = (0..20).map(|v| v as f64).collect();
        let period = 5;
        let out = kama(&data, period).expect("kama");
        let sc = {
            let const_max = 2.0 / 31.0;
            let const_diff = 2.0 / 3.0 - const_max;
            let s = 1.0 * const_diff + const_max;
            s * s
        };
        let mut prev = data[period - 1];
        for i in period..data.len() {
            prev += sc * (data[i] - prev);
            assert!((out[i] - prev).abs() < 1e-12, "index {i}");
        }
    }

    #[test]
    fn test_kama_constant_series() {
        initialize();
        let data = [3.0; 25];
        let out = kama(&data, 6).expect("kama");
        for &v in &out[6..] {
            assert!((v - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_kama_empty_input() {
        initialize();
        assert!(kama(&[], 5).expect("empty ok").is_empty());
    }
}
