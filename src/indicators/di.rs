//! # Directional Indicator (PLUS_DI / MINUS_DI)
//!
//! Wilder-smoothed directional movement as a percentage of the smoothed
//! true range. A zero smoothed true range yields 0.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 1).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` (`< 1` for
//!   `period == 1`) are NaN.

use crate::indicators::dm::dm1;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, is_zero, nan_vec, true_range, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn di_lookback(period: usize) -> usize {
    if period > 1 {
        period
    } else {
        1
    }
}

fn di_impl(
    name: &'static str,
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    minus: bool,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized(name)?;
    check_same_length(name, &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period(name, period, 1)?;

    let len = high.len();
    let lookback = di_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }
    let pick = |pair: (f64, f64)| if minus { pair.1 } else { pair.0 };

    if period == 1 {
        for i in 1..len {
            let tr = true_range(high[i], low[i], close[i - 1]);
            out[i] = if is_zero(tr) {
                0.0
            } else {
                pick(dm1(high, low, i)) / tr
            };
        }
        return Ok(out);
    }

    let mut prev_dm = 0.0;
    let mut prev_tr = 0.0;
    for i in 1..period {
        prev_dm += pick(dm1(high, low, i));
        prev_tr += true_range(high[i], low[i], close[i - 1]);
    }
    let inv_period = 1.0 / period as f64;
    for i in period..len {
        prev_dm = prev_dm - prev_dm * inv_period + pick(dm1(high, low, i));
        prev_tr = prev_tr - prev_tr * inv_period + true_range(high[i], low[i], close[i - 1]);
        out[i] = if is_zero(prev_tr) {
            0.0
        } else {
            100.0 * (prev_dm / prev_tr)
        };
    }
    Ok(out)
}

pub fn plus_di(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    di_impl("plus_di", high, low, close, period, false)
}

pub fn minus_di(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    di_impl("minus_di", high, low, close, period, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    fn trending(n: usize, up: bool) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let close: Vec<f64> = (0..n)
            .map(|i| if up { 10.0 + i as f64 } else { 100.0 - i as f64 })
            .collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        (high, low, close)
    }

    #[test]
    fn test_plus_di_dominates_in_uptrend() {
        initialize();
        let (high, low, close) = trending(30, true);
        let plus = plus_di(&high, &low, &close, 14).expect("plus_di");
        let minus = minus_di(&high, &low, &close, 14).expect("minus_di");
        assert!(plus[13].is_nan());
        for i in 14..30 {
            assert!(plus[i] > 0.0);
            assert_eq!(minus[i], 0.0);
        }
    }

    #[test]
    fn test_minus_di_dominates_in_downtrend() {
        initialize();
        let (high, low, close) = trending(30, false);
        let plus = plus_di(&high, &low, &close, 14).expect("plus_di");
        let minus = minus_di(&high, &low, &close, 14).expect("minus_di");
        for i in 14..30 {
            assert_eq!(plus[i], 0.0);
            assert!(minus[i] > 0.0);
        }
    }

    #[test]
    fn test_di_bounded_by_100() {
        initialize();
        let (high, low, close) = trending(40, true);
        let plus = plus_di(&high, &low, &close, 14).expect("plus_di");
        for i in 14..40 {
            assert!(plus[i] <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn test_di_empty_input() {
        initialize();
        assert!(plus_di(&[], &[], &[], 14).expect("empty ok").is_empty());
    }
}
