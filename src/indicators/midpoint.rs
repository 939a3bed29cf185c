//! # MidPoint over period
//!
//! `(highest + lowest) / 2` of a single series over the trailing window,
//! tracked with two monotonic deques for O(n) overall.
//!
//! ## Parameters
//! - **period**: window size (default: 14, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period - 1` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;
use crate::utilities::mono_deque::MonoDeque;

#[inline]
pub fn midpoint_lookback(period: usize) -> usize {
    period - 1
}

pub fn midpoint(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("midpoint")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("midpoint", period, 2)?;

    let len = real.len();
    let lookback = midpoint_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let mut max_dq = MonoDeque::with_capacity(period);
    let mut min_dq = MonoDeque::with_capacity(period);
    for i in 0..len {
        max_dq.push_max(i, real);
        min_dq.push_min(i, real);
        if i >= lookback {
            max_dq.expire(i + 1 - period);
            min_dq.expire(i + 1 - period);
            out[i] = (real[max_dq.front()] + real[min_dq.front()]) / 2.0;
        }
    }
    Ok(out)
}
