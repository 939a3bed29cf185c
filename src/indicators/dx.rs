//! # Directional Movement Index (DX)
//!
//! Spread between the directional indicators as a percentage of their
//! sum: `100 * |+DI - -DI| / (+DI + -DI)`. Zero denominators yield 0.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 2).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.

use crate::indicators::dm::dm1;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, is_zero, nan_vec, true_range, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn dx_lookback(period: usize) -> usize {
    period
}

pub fn dx(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("dx")?;
    check_same_length("dx", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("dx", period, 2)?;

    let len = high.len();
    let lookback = dx_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let mut prev_plus = 0.0;
    let mut prev_minus = 0.0;
    let mut prev_tr = 0.0;
    for i in 1..period {
        let (p, m) = dm1(high, low, i);
        prev_plus += p;
        prev_minus += m;
        prev_tr += true_range(high[i], low[i], close[i - 1]);
    }
    let inv_period = 1.0 / period as f64;
    for i in period..len {
        let (p, m) = dm1(high, low, i);
        prev_plus = prev_plus - prev_plus * inv_period + p;
        prev_minus = prev_minus - prev_minus * inv_period + m;
        prev_tr = prev_tr - prev_tr * inv_period + true_range(high[i], low[i], close[i - 1]);
        out[i] = if is_zero(prev_tr) {
            0.0
        } else {
            let plus_di = 100.0 * (prev_plus / prev_tr);
            let minus_di = 100.0 * (prev_minus / prev_tr);
            let total = plus_di + minus_di;
            if is_zero(total) {
                0.0
            } else {
                100.0 * ((plus_di - minus_di).abs() / total)
            }
        };
    }
    Ok(out)
}
