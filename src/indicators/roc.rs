//! # Rate of Change family (ROC / ROCP / ROCR / ROCR100)
//!
//! Four scalings of the same `period`-bar ratio. A zero reference price
//! yields 0 rather than an infinity.
//!
//! | variant  | formula                          |
//! |----------|----------------------------------|
//! | ROC      | `100 * (x / prev - 1)`           |
//! | ROCP     | `(x - prev) / prev`              |
//! | ROCR     | `x / prev`                       |
//! | ROCR100  | `100 * x / prev`                 |
//!
//! ## Parameters
//! - **period**: distance in bars (default: 10, minimum: 1).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn roc_lookback(period: usize) -> usize {
    period
}

fn roc_impl<F>(name: &'static str, real: &[f64], period: usize, f: F) -> Result<Vec<f64>, TaError>
where
    F: Fn(f64, f64) -> f64,
{
    ensure_initialized(name)?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period(name, period, 1)?;

    let len = real.len();
    let mut out = nan_vec(len);
    for i in period..len {
        let prev = real[i - period];
        out[i] = if is_zero(prev) { 0.0 } else { f(real[i], prev) };
    }
    Ok(out)
}

pub fn roc(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    roc_impl("roc", real, period, |x, prev| (x / prev - 1.0) * 100.0)
}

pub fn rocp(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    roc_impl("rocp", real, period, |x, prev| (x - prev) / prev)
}

pub fn rocr(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    roc_impl("rocr", real, period, |x, prev| x / prev)
}

pub fn rocr100(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    roc_impl("rocr100", real, period, |x, prev| x / prev * 100.0)
}
