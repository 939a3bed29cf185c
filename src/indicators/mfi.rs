//! # Money Flow Index (MFI)
//!
//! Volume-weighted RSI analogue over the typical price. Each bar's raw
//! money flow `tp * volume` counts as positive or negative depending on
//! the typical-price change; an unchanged typical price counts as
//! neither. A window whose total flow is below 1.0 yields 0.
//!
//! ## Parameters
//! - **period**: window size (default: 14, minimum: 2).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn mfi_lookback(period: usize) -> usize {
    period
}

pub fn mfi(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    volume: &[f64],
    period: usize,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("mfi")?;
    check_same_length("mfi", &[high.len(), low.len(), close.len(), volume.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("mfi", period, 2)?;

    let len = high.len();
    let lookback = mfi_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    // Signed raw money flow per bar; zero for an unchanged typical price.
    let mut flow = vec![0.0f64; len];
    let mut prev_tp = (high[0] + low[0] + close[0]) / 3.0;
    for i in 1..len {
        let tp = (high[i] + low[i] + close[i]) / 3.0;
        let raw = tp * volume[i];
        if tp > prev_tp {
            flow[i] = raw;
        } else if tp < prev_tp {
            flow[i] = -raw;
        }
        prev_tp = tp;
    }

    let mut positive = 0.0;
    let mut negative = 0.0;
    for &f in &flow[1..=period] {
        if f > 0.0 {
            positive += f;
        } else {
            negative -= f;
        }
    }
    let emit = |positive: f64, negative: f64| {
        let total = positive + negative;
        if total < 1.0 {
            0.0
        } else {
            100.0 * (positive / total)
        }
    };
    out[period] = emit(positive, negative);
    for i in period + 1..len {
        let incoming = flow[i];
        if incoming > 0.0 {
            positive += incoming;
        } else {
            negative -= incoming;
        }
        let outgoing = flow[i - period];
        if outgoing > 0.0 {
            positive -= outgoing;
        } else {
            negative += outgoing;
        }
        out[i] = emit(positive, negative);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_mfi_all_up_is_100() {
        initialize();
        let close: Vec<f64> = (0..20).map(|i| 10.0 + i as f64).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let volume = vec![1000.0; 20];
        let out = mfi(&high, &low, &close, &volume, 14).expect("mfi");
        for i in 14..20 {
            assert!((out[i] - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mfi_all_down_is_0_and_bounded() {
        initialize();
        let close: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let volume = vec![1000.0; 20];
        let out = mfi(&high, &low, &close, &volume, 14).expect("mfi");
        for i in 14..20 {
            assert!(out[i].abs() < 1e-9);
        }
    }

    #[test]
    fn test_mfi_zero_volume_window_yields_zero() {
        initialize();
        let close: Vec<f64> = (0..10).map(|i| 10.0 + (i % 3) as f64).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let volume = vec![0.0; 10];
        let out = mfi(&high, &low, &close, &volume, 5).expect("mfi");
        for i in 5..10 {
            assert_eq!(out[i], 0.0);
        }
    }

    #[test]
    fn test_mfi_empty_input() {
        initialize();
        assert!(mfi(&[], &[], &[], &[], 14).expect("empty ok").is_empty());
    }
}
