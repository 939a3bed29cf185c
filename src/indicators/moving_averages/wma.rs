//! # Weighted Moving Average (WMA)
//!
//! Linearly weighted mean: the newest bar carries weight `period`, the
//! oldest weight 1. Maintained in O(n) with running plain and weighted sums.
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
pub fn wma_lookback(period: usize) -> usize {
    period - 1
}

pub(crate) fn wma_unchecked(real: &[f64], period: usize) -> Vec<f64> {
    let len = real.len();
    let lookback = period - 1;
    let mut out = nan_vec(len);
    if len <= lookback {
        return out;
    }

    // period_sub = plain sum of the window, period_sum = weighted sum with
    // weights 1..period (oldest..newest).
    let mut period_sub = 0.0;
    let mut period_sum = 0.0;
    for (w, &v) in real[..period].iter().enumerate() {
        period_sub += v;
        period_sum += v * (w + 1) as f64;
    }
    let divider = (period * (period + 1)) as f64 / 2.0;
    out[lookback] = period_sum / divider;
    let mut trailing = 0usize;
    for i in period..len {
        period_sum -= period_sub;
        period_sub += real[i] - real[trailing];
        period_sum += real[i] * period as f64;
        trailing += 1;
        out[i] = period_sum / divider;
    }
    out
}

pub fn wma(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("wma")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("wma", period, 2)?;
    Ok(wma_unchecked(real, period))
}
