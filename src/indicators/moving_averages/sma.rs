//! # Simple Moving Average (SMA)
//!
//! Arithmetic mean over a sliding window, maintained incrementally with one
//! add and one subtract per bar.
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
pub fn sma_lookback(period: usize) -> usize {
    period - 1
}

pub fn sma(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("sma")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("sma", period, 2)?;

    let len = real.len();
    let lookback = sma_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let mut sum = 0.0;
    for &v in &real[..period] {
        sum += v;
    }
    let inv_period = 1.0 / period as f64;
    out[lookback] = sum * inv_period;
    for i in period..len {
        sum += real[i] - real[i - period];
        out[i] = sum * inv_period;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_sma_one_through_ten() {
        initialize();
        let data: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let out = sma(&data, 3).expect("sma");
        assert!(out[0].is_nan() && out[1].is_nan());
        for (i, expected) in (2..10).zip([2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]) {
            assert_eq!(out[i], expected, "index {i}");
        }
    }

    #[test]
    fn test_sma_empty_input() {
        initialize();
        assert!(sma(&[], 5).expect("empty ok").is_empty());
    }

    #[test]
    fn test_sma_short_input_all_nan() {
        initialize();
        let out = sma(&[1.0, 2.0], 5).expect("short ok");
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_sma_invalid_period() {
        initialize();
        assert!(sma(&[1.0, 2.0, 3.0], 0).is_err());
        assert!(sma(&[1.0, 2.0, 3.0], 1).is_err());
    }
}
