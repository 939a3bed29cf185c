//! # Momentum (MOM)
//!
//! Raw difference `x[i] - x[i - period]`.
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
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn mom_lookback(period: usize) -> usize {
    period
}

pub fn mom(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("mom")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("mom", period, 1)?;

    let len = real.len();
    let mut out = nan_vec(len);
    for i in period..len {
        out[i] = real[i] - real[i - period];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_mom_hand_computed() {
        initialize();
        let data = [1.0, 4.0, 2.0, 8.0, 5.0];
        let out = mom(&data, 2).expect("mom");
        assert!(out[0].is_nan() && out[1].is_nan());
        assert_eq!(out[2], 1.0);
        assert_eq!(out[3], 4.0);
        assert_eq!(out[4], 3.0);
    }

    #[test]
    fn test_mom_empty_input() {
        initialize();
        assert!(mom(&[], 10).expect("empty ok").is_empty());
    }
}
