//! # Average True Range (ATR)
//!
//! Wilder-smoothed true range: the first value averages the first
//! `period` true ranges, then `atr = (prev * (period-1) + tr) / period`.
//! `period == 1` degenerates to the raw true range.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 1).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.

use crate::indicators::trange::trange;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, nan_vec, true_range, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn atr_lookback(period: usize) -> usize {
    period
}

pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("atr")?;
    check_same_length("atr", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("atr", period, 1)?;
    if period == 1 {
        return trange(high, low, close);
    }

    let len = high.len();
    let lookback = atr_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let mut prev = 0.0;
    for i in 1..=period {
        prev += true_range(high[i], low[i], close[i - 1]);
    }
    prev /= period as f64;
    out[period] = prev;
    let decay = (period - 1) as f64;
    let inv_period = 1.0 / period as f64;
    for i in period + 1..len {
        let tr = true_range(high[i], low[i], close[i - 1]);
        prev = (prev * decay + tr) * inv_period;
        out[i] = prev;
    }
    Ok(out)
}
