//! # Normalized Average True Range (NATR)
//!
//! ATR expressed as a percentage of the close, so different price levels
//! compare directly. A zero close yields 0.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 1).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.

use crate::indicators::atr::{atr, atr_lookback};
use crate::utilities::errors::TaError;
use crate::utilities::helpers::is_zero;
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn natr_lookback(period: usize) -> usize {
    atr_lookback(period)
}

pub fn natr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("natr")?;
    let mut out = atr(high, low, close, period)?;
    for (v, &c) in out.iter_mut().zip(close) {
        if v.is_nan() {
            continue;
        }
        *v = if is_zero(c) { 0.0 } else { *v / c * 100.0 };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_natr_is_percent_of_close() {
        initialize();
        let close: Vec<f64> = (0..30).map(|i| 50.0 + (i % 2) as f64).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let n = natr(&high, &low, &close, 5).expect("natr");
        let a = atr(&high, &low, &close, 5).expect("atr");
        for i in 5..30 {
            assert!((n[i] - a[i] / close[i] * 100.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_natr_empty_input() {
        initialize();
        assert!(natr(&[], &[], &[], 14).expect("empty ok").is_empty());
    }
}
