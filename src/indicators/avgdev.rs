//! # Average Deviation (AVGDEV)
//!
//! Mean absolute deviation from the window SMA.
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

#[inline]
pub fn avgdev_lookback(period: usize) -> usize {
    period - 1
}

pub fn avgdev(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("avgdev")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("avgdev", period, 2)?;

    let len = real.len();
    let lookback = avgdev_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let inv_period = 1.0 / period as f64;
    let mut total = 0.0;
    for &v in &real[..lookback] {
        total += v;
    }
    for i in lookback..len {
        total += real[i];
        let mean = total * inv_period;
        let mut dev = 0.0;
        for &v in &real[i + 1 - period..=i] {
            dev += (v - mean).abs();
        }
        out[i] = dev * inv_period;
        total -= real[i + 1 - period];
    }
    Ok(out)
}
