//! # TRIX
//!
//! One-bar rate of change of a triple-smoothed EMA, in percent.
//!
//! ## Parameters
//! - **period**: EMA window for all three passes (default: 30, minimum: 1).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< 3*(period-1) + 1`
//!   are NaN. A zero previous value yields 0.

use crate::indicators::moving_averages::ema::ema_unchecked;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn trix_lookback(period: usize) -> usize {
    3 * (period - 1) + 1
}

pub fn trix(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("trix")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("trix", period, 1)?;

    let len = real.len();
    let lookback = trix_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }
    if period == 1 {
        // Three identity smoothings leave the raw series.
        for i in 1..len {
            out[i] = if is_zero(real[i - 1]) {
                0.0
            } else {
                (real[i] - real[i - 1]) / real[i - 1] * 100.0
            };
        }
        return Ok(out);
    }

    let step = period - 1;
    let ema1 = ema_unchecked(real, period);
    let ema2 = ema_unchecked(&ema1[step..], period);
    let ema3 = ema_unchecked(&ema2[step..], period);
    // ema3[j] corresponds to input index j + 2*step.
    for j in step + 1..ema3.len() {
        let prev = ema3[j - 1];
        out[j + 2 * step] = if is_zero(prev) {
            0.0
        } else {
            (ema3[j] - prev) / prev * 100.0
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_trix_lookback_boundary() {
        initialize();
        let data: Vec<f64> = (0..80).map(|i| 50.0 + (i as f64 * 0.3).sin() * 5.0).collect();
        let out = trix(&data, 15).expect("trix");
        let lb = trix_lookback(15);
        assert_eq!(lb, 43);
        assert!(out[lb - 1].is_nan());
        assert!(out[lb].is_finite());
    }

    #[test]
    fn test_trix_constant_series_is_zero() {
        initialize();
        let out = trix(&[8.0; 30], 5).expect("trix");
        for i in trix_lookback(5)..30 {
            assert!(out[i].abs() < 1e-12);
        }
    }

    #[test]
    fn test_trix_exponential_growth_is_constant() {
        initialize();
        // x[i] = c * g^i: every EMA stage is also geometric in the limit,
        // and the percent change settles near the growth rate.
        let data: Vec<f64> = (0..200).map(|i| 100.0 * 1.01f64.powi(i)).collect();
        let out = trix(&data, 5).expect("trix");
        let tail = out[199];
        assert!((tail - 1.0).abs() < 0.05, "tail {tail}");
    }

    #[test]
    fn test_trix_empty_input() {
        initialize();
        assert!(trix(&[], 30).expect("empty ok").is_empty());
    }
}
