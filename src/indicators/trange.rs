//! # True Range (TRANGE)
//!
//! Largest of the bar range and the two gaps against the prior close.
//!
//! ## Errors
//! - **LengthMismatch**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; position 0 is NaN (no prior
//!   close).

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, nan_vec, true_range};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn trange_lookback() -> usize {
    1
}

pub fn trange(high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>, TaError> {
    ensure_initialized("trange")?;
    check_same_length("trange", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    let len = high.len();
    let mut out = nan_vec(len);
    for i in 1..len {
        out[i] = true_range(high[i], low[i], close[i - 1]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_trange_gap_handling() {
        initialize();
        let high = [12.0, 15.0, 9.0];
        let low = [10.0, 14.0, 8.0];
        let close = [11.0, 14.5, 8.5];
        let out = trange(&high, &low, &close).expect("trange");
        assert!(out[0].is_nan());
        // Gap up: high - prev close.
        assert_eq!(out[1], 4.0);
        // Gap down: prev close - low.
        assert_eq!(out[2], 6.5);
    }

    #[test]
    fn test_trange_empty_input() {
        initialize();
        assert!(trange(&[], &[], &[]).expect("empty ok").is_empty());
    }
}
