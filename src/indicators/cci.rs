//! # Commodity Channel Index (CCI)
//!
//! Distance of the typical price `(high + low + close) / 3` from its SMA,
//! scaled by 0.015 times the window's mean absolute deviation. A zero
//! deviation yields 0.
//!
//! ## Parameters
//! - **period**: window size (default: 14, minimum: 2).
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
pub fn cci_lookback(period: usize) -> usize {
    period - 1
}

pub fn cci(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("cci")?;
    check_same_length("cci", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("cci", period, 2)?;

    let len = high.len();
    let lookback = cci_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let tp: Vec<f64> = (0..len)
        .map(|i| (high[i] + low[i] + close[i]) / 3.0)
        .collect();
    let inv_period = 1.0 / period as f64;
    let mut total = 0.0;
    for &v in &tp[..lookback] {
        total += v;
    }
    for i in lookback..len {
        total += tp[i];
        let mean = total * inv_period;
        let mut dev = 0.0;
        for &v in &tp[i + 1 - period..=i] {
            dev += (v - mean).abs();
        }
        dev *= inv_period;
        let denom = 0.015 * dev;
        out[i] = if is_zero(denom) {
            0.0
        } else {
            (tp[i] - mean) / denom
        };
        total -= tp[i + 1 - period];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_cci_hand_computed() {
        initialize();
        let high = [10.0, 11.0, 13.0];
        let low = [8.0, 9.0, 11.0];
        let close = [9.0, 10.0, 12.0];
        // Typical prices 9, 10, 12; mean 31/3; mad = (4/3 + 1/3 + 5/3)/3.
        let out = cci(&high, &low, &close, 3).expect("cci");
        let mean = 31.0 / 3.0;
        let mad = ((9.0f64 - mean).abs() + (10.0f64 - mean).abs() + (12.0f64 - mean).abs()) / 3.0;
        let expected = (12.0 - mean) / (0.015 * mad);
        assert!((out[2] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cci_flat_bars_yield_zero() {
        initialize();
        let flat = [7.0; 10];
        let out = cci(&flat, &flat, &flat, 5).expect("cci");
        for i in 4..10 {
            assert_eq!(out[i], 0.0);
        }
    }

    #[test]
    fn test_cci_empty_input() {
        initialize();
        assert!(cci(&[], &[], &[], 14).expect("empty ok").is_empty());
    }
}
