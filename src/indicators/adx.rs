//! # Average Directional Movement Index (ADX)
//!
//! Wilder-smoothed DX. The first value averages the first `period` DX
//! values; afterwards `adx = (prev * (period-1) + dx) / period`. Bars
//! whose DX is undefined (zero true range or zero DI sum) leave the
//! running value unchanged.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 2).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< 2*period - 1` are
//!   NaN.

use crate::indicators::dm::dm1;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, is_zero, nan_vec, true_range, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn adx_lookback(period: usize) -> usize {
    2 * period - 1
}

/// Smoothed +DM, -DM and TR rolled into one Wilder state.
struct DmState {
    plus: f64,
    minus: f64,
    tr: f64,
    inv_period: f64,
}

impl DmState {
    fn seed(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Self {
        let mut plus = 0.0;
        let mut minus = 0.0;
        let mut tr = 0.0;
        for i in 1..period {
            let (p, m) = dm1(high, low, i);
            plus += p;
            minus += m;
            tr += true_range(high[i], low[i], close[i - 1]);
        }
        DmState {
            plus,
            minus,
            tr,
            inv_period: 1.0 / period as f64,
        }
    }

    /// Advance to bar `i` and return DX, or `None` when undefined.
    fn step(&mut self, high: &[f64], low: &[f64], close: &[f64], i: usize) -> Option<f64> {
        let (p, m) = dm1(high, low, i);
        self.plus = self.plus - self.plus * self.inv_period + p;
        self.minus = self.minus - self.minus * self.inv_period + m;
        self.tr = self.tr - self.tr * self.inv_period + true_range(high[i], low[i], close[i - 1]);
        if is_zero(self.tr) {
            return None;
        }
        let plus_di = 100.0 * (self.plus / self.tr);
        let minus_di = 100.0 * (self.minus / self.tr);
        let total = plus_di + minus_di;
        if is_zero(total) {
            return None;
        }
        Some(100.0 * ((plus_di - minus_di).abs() / total))
    }
}

pub fn adx(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("adx")?;
    check_same_length("adx", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("adx", period, 2)?;

    let len = high.len();
    let lookback = adx_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let mut state = DmState::seed(high, low, close, period);
    let mut sum_dx = 0.0;
    for i in period..=lookback {
        sum_dx += state.step(high, low, close, i).unwrap_or(0.0);
    }
    let mut prev_adx = sum_dx / period as f64;
    out[lookback] = prev_adx;

    let decay = (period - 1) as f64;
    let inv_period = 1.0 / period as f64;
    for i in lookback + 1..len {
        if let Some(dx) = state.step(high, low, close, i) {
            prev_adx = (prev_adx * decay + dx) * inv_period;
        }
        out[i] = prev_adx;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_adx_pure_trend_is_100() {
        initialize();
        let close: Vec<f64> = (0..50).map(|i| 10.0 + i as f64).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let out = adx(&high, &low, &close, 14).expect("adx");
        assert!(out[26].is_nan());
        for i in 27..50 {
            assert!((out[i] - 100.0).abs() < 1e-9, "index {i}");
        }
    }

    #[test]
    fn test_adx_bounded() {
        initialize();
        let close: Vec<f64> = (0..80).map(|i| 40.0 + (i as f64 * 0.7).sin() * 6.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 2.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 2.0).collect();
        let out = adx(&high, &low, &close, 14).expect("adx");
        for i in 27..80 {
            assert!((0.0..=100.0).contains(&out[i]));
        }
    }

    #[test]
    fn test_adx_empty_input() {
        initialize();
        assert!(adx(&[], &[], &[], 14).expect("empty ok").is_empty());
    }
}
