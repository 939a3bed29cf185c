//! # Relative Strength Index (RSI)
//!
//! Wilder-smoothed ratio of average gains to average losses, scaled to
//! `[0, 100]`. The first value averages the first `period` deltas; after
//! that each bar blends in at weight `1/period`.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**: `period` outside `2..=100000`.
//! - **NotInitialized**: engine not initialized.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.
//!   A flat window (no gains and no losses) yields 0.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn rsi_lookback(period: usize) -> usize {
    period
}

pub fn rsi(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("rsi")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("rsi", period, 2)?;

    let len = real.len();
    let lookback = rsi_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let mut prev_gain = 0.0;
    let mut prev_loss = 0.0;
    for i in 1..=period {
        let delta = real[i] - real[i - 1];
        if delta < 0.0 {
            prev_loss -= delta;
        } else {
            prev_gain += delta;
        }
    }
    prev_gain /= period as f64;
    prev_loss /= period as f64;

    let total = prev_gain + prev_loss;
    out[period] = if is_zero(total) {
        0.0
    } else {
        100.0 * (prev_gain / total)
    };

    let decay = (period - 1) as f64;
    let inv_period = 1.0 / period as f64;
    for i in period + 1..len {
        let delta = real[i] - real[i - 1];
        prev_gain *= decay;
        prev_loss *= decay;
        if delta < 0.0 {
            prev_loss -= delta;
        } else {
            prev_gain += delta;
        }
        prev_gain *= inv_period;
        prev_loss *= inv_period;
        let total = prev_gain + prev_loss;
        out[i] = if is_zero(total) {
            0.0
        } else {
            100.0 * (prev_gain / total)
        };
    }
    Ok(out)
}
