//! # Williams' %R (WILLR)
//!
//! `-100 * (highest high - close) / (highest high - lowest low)` over the
//! trailing window; the scale runs from 0 (close at the high) to -100
//! (close at the low). A zero range yields 0.
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
use crate::utilities::mono_deque::MonoDeque;

#[inline]
pub fn willr_lookback(period: usize) -> usize {
    period - 1
}

pub fn willr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("willr")?;
    check_same_length("willr", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("willr", period, 2)?;

    let len = high.len();
    let lookback = willr_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let mut max_dq = MonoDeque::with_capacity(period);
    let mut min_dq = MonoDeque::with_capacity(period);
    for i in 0..len {
        max_dq.push_max(i, high);
        min_dq.push_min(i, low);
        if i >= lookback {
            max_dq.expire(i + 1 - period);
            min_dq.expire(i + 1 - period);
            let hh = high[max_dq.front()];
            let ll = low[min_dq.front()];
            let range = hh - ll;
            out[i] = if is_zero(range) {
                0.0
            } else {
                -100.0 * ((hh - close[i]) / range)
            };
        }
    }
    Ok(out)
}
