//! # Triangular Moving Average (TRIMA)
//!
//! SMA of an SMA with split periods: for odd `period` both passes use
//! `(period+1)/2`; for even `period` the first pass uses `period/2` and the
//! second `period/2 + 1`. Either way the total lookback is `period - 1` and
//! the effective weighting is triangular.
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
pub fn trima_lookback(period: usize) -> usize {
    period - 1
}

// Plain running-sum SMA on a compact slice; period 1 is the identity
// (needed for the even split with period == 2).
fn sma_pass(real: &[f64], period: usize) -> Vec<f64> {
    if period == 1 {
        return real.to_vec();
    }
    let len = real.len();
    let mut out = nan_vec(len);
    if len < period {
        return out;
    }
    let mut sum = 0.0;
    for &v in &real[..period] {
        sum += v;
    }
    let inv = 1.0 / period as f64;
    out[period - 1] = sum * inv;
    for i in period..len {
        sum += real[i] - real[i - period];
        out[i] = sum * inv;
    }
    out
}

pub fn trima(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("trima")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("trima", period, 2)?;

    let len = real.len();
    let lookback = trima_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let (p1, p2) = if period % 2 == 1 {
        let m = (period + 1) / 2;
        (m, m)
    } else {
        (period / 2, period / 2 + 1)
    };

    let first = sma_pass(real, p1);
    let second = sma_pass(&first[p1 - 1..], p2);
    for i in lookback..len {
        out[i] = second[i - (p1 - 1)];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_trima_odd_period_triangular_weights() {
        initialize();
        // period 3 -> weights 1,2,1 over the last three bars.
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = trima(&data, 3).expect("trima");
        assert!(out[0].is_nan() && out[1].is_nan());
        assert!((out[2] - (1.0 + 2.0 * 2.0 + 3.0) / 4.0).abs() < 1e-12);
        assert!((out[3] - (2.0 + 2.0 * 3.0 + 4.0) / 4.0).abs() < 1e-12);
        assert!((out[4] - (3.0 + 2.0 * 4.0 + 5.0) / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_trima_even_period_lookback() {
        initialize();
        let data: Vec<f64> = (1..=12).map(|v| v as f64).collect();
        let out = trima(&data, 4).expect("trima");
        assert!(out[..3].iter().all(|v| v.is_nan()));
        assert!(out[3..].iter().all(|v| v.is_finite()));
        // weights 1,2,2,1 over the last four bars for period 4.
        assert!((out[3] - (1.0 + 2.0 * 2.0 + 2.0 * 3.0 + 4.0) / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_trima_empty_input() {
        initialize();
        assert!(trima(&[], 4).expect("empty ok").is_empty());
    }
}
