//! # Directional Movement (PLUS_DM / MINUS_DM)
//!
//! One-bar directional movement takes the larger of the up-move and the
//! down-move, or zero when they tie or point the wrong way. Periods above
//! one apply Wilder's running sum: subtract one `period`-th, add today.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 1).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period - 1`
//!   (`< 1` for `period == 1`) are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

/// One-bar `(+DM, -DM)` for bar `i` against bar `i - 1`.
#[inline(always)]
pub(crate) fn dm1(high: &[f64], low: &[f64], i: usize) -> (f64, f64) {
    let diff_p = high[i] - high[i - 1];
    let diff_m = low[i - 1] - low[i];
    if diff_p > 0.0 && diff_p > diff_m {
        (diff_p, 0.0)
    } else if diff_m > 0.0 && diff_m > diff_p {
        (0.0, diff_m)
    } else {
        (0.0, 0.0)
    }
}

#[inline]
pub fn dm_lookback(period: usize) -> usize {
    if period > 1 {
        period - 1
    } else {
        1
    }
}

fn dm_impl(
    name: &'static str,
    high: &[f64],
    low: &[f64],
    period: usize,
    minus: bool,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized(name)?;
    check_same_length(name, &[high.len(), low.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period(name, period, 1)?;

    let len = high.len();
    let lookback = dm_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }
    let pick = |pair: (f64, f64)| if minus { pair.1 } else { pair.0 };

    if period == 1 {
        for i in 1..len {
            out[i] = pick(dm1(high, low, i));
        }
        return Ok(out);
    }

    let mut prev = 0.0;
    for i in 1..period {
        prev += pick(dm1(high, low, i));
    }
    out[period - 1] = prev;
    let inv_period = 1.0 / period as f64;
    for i in period..len {
        prev = prev - prev * inv_period + pick(dm1(high, low, i));
        out[i] = prev;
    }
    Ok(out)
}

pub fn plus_dm(high: &[f64], low: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    dm_impl("plus_dm", high, low, period, false)
}

pub fn minus_dm(high: &[f64], low: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    dm_impl("minus_dm", high, low, period, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_dm1_cases() {
        let high = [10.0, 12.0, 11.5, 12.5];
        let low = [9.0, 10.5, 9.0, 11.0];
        // Up-move 2 beats down-move -1.5.
        assert_eq!(dm1(&high, &low, 1), (2.0, 0.0));
        // Down-move 1.5 beats up-move -0.5.
        assert_eq!(dm1(&high, &low, 2), (0.0, 1.5));
        // Both legs rise: up-move 1 beats down-move -2.
        assert_eq!(dm1(&high, &low, 3), (1.0, 0.0));
        // Inside bar: both moves negative.
        let high = [12.5, 12.0];
        let low = [11.0, 11.5];
        assert_eq!(dm1(&high, &low, 1), (0.0, 0.0));
    }

    #[test]
    fn test_plus_dm_rising_series() {
        initialize();
        let high: Vec<f64> = (0..20).map(|i| 10.0 + i as f64).collect();
        let low: Vec<f64> = high.iter().map(|h| h - 1.0).collect();
        let out = plus_dm(&high, &low, 14).expect("plus_dm");
        assert!(out[12].is_nan());
        // Thirteen unit up-moves accumulate in the seed.
        assert!((out[13] - 13.0).abs() < 1e-12);
        let minus = minus_dm(&high, &low, 14).expect("minus_dm");
        for i in 13..20 {
            assert_eq!(minus[i], 0.0);
        }
    }

    #[test]
    fn test_dm_period_one_is_raw() {
        initialize();
        let high = [10.0, 12.0, 11.5];
        let low = [9.0, 10.5, 9.0];
        let out = plus_dm(&high, &low, 1).expect("plus_dm");
        assert!(out[0].is_nan());
        assert_eq!(out[1], 2.0);
        assert_eq!(out[2], 0.0);
    }

    #[test]
    fn test_dm_empty_input() {
        initialize();
        assert!(plus_dm(&[], &[], 14).expect("empty ok").is_empty());
    }
}
