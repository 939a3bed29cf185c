//! # Midpoint Price over period (MIDPRICE)
//!
//! `(highest high + lowest low) / 2` over the trailing window.
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
use crate::utilities::helpers::{check_same_length, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;
use crate::utilities::mono_deque::MonoDeque;

#[inline]
pub fn midprice_lookback(period: usize) -> usize {
    period - 1
}

pub fn midprice(high: &[f64], low: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("midprice")?;
    check_same_length("midprice", &[high.len(), low.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("midprice", period, 2)?;

    let len = high.len();
    let lookback = midprice_lookback(period);
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
            out[i] = (high[max_dq.front()] + low[min_dq.front()]) / 2.0;
        }
    }
    Ok(out)
}
