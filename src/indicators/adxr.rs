//! # Average Directional Movement Index Rating (ADXR)
//!
//! Midpoint of today's ADX and the ADX from `period - 1` bars back.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 2).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< 3*period - 2` are
//!   NaN.

use crate::indicators::adx::{adx, adx_lookback};
use crate::utilities::errors::TaError;
use crate::utilities::helpers::nan_vec;
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn adxr_lookback(period: usize) -> usize {
    adx_lookback(period) + period - 1
}

pub fn adxr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("adxr")?;
    let adx_line = adx(high, low, close, period)?;
    let len = adx_line.len();
    let mut out = nan_vec(len);
    let lookback = adxr_lookback(period);
    for i in lookback..len {
        out[i] = (adx_line[i] + adx_line[i - (period - 1)]) / 2.0;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_adxr_is_adx_midpoint() {
        initialize();
        let close: Vec<f64> = (0..80).map(|i| 40.0 + (i as f64 * 0.6).sin() * 5.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 2.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 2.0).collect();
        let r = adxr(&high, &low, &close, 14).expect("adxr");
        let a = adx(&high, &low, &close, 14).expect("adx");
        let lb = adxr_lookback(14);
        assert_eq!(lb, 40);
        assert!(r[lb - 1].is_nan());
        for i in lb..80 {
            assert!((r[i] - (a[i] + a[i - 13]) / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_adxr_empty_input() {
        initialize();
        assert!(adxr(&[], &[], &[], 14).expect("empty ok").is_empty());
    }
}
