//! # Balance of Power (BOP)
//!
//! `(close - open) / (high - low)` per bar; a zero range yields 0.
//! No lookback.
//!
//! ## Errors
//! - **LengthMismatch**, **NotInitialized**.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, is_zero};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn bop_lookback() -> usize {
    0
}

pub fn bop(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("bop")?;
    check_same_length("bop", &[open.len(), high.len(), low.len(), close.len()])?;
    let mut out = Vec::with_capacity(open.len());
    for i in 0..open.len() {
        let range = high[i] - low[i];
        out.push(if is_zero(range) {
            0.0
        } else {
            (close[i] - open[i]) / range
        });
    }
    Ok(out)
}
