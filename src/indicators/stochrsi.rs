//! # Stochastic RSI (STOCHRSI)
//!
//! The fast stochastic applied to an RSI series instead of prices, which
//! rescales RSI to its own trailing range.
//!
//! ## Parameters
//! - **period**: RSI window (default: 14, minimum: 2).
//! - **fastk_period**: %K range window (default: 5, minimum: 1).
//! - **fastd_period**: %D smoothing window (default: 3, minimum: 1).
//! - **fastd_matype**: %D moving average (default: SMA).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(StochRsiOutput)`** with `fast_k` and `fast_d`, both of input
//!   length; both start at the combined lookback.

use crate::indicators::moving_averages::{ma, ma_lookback};
use crate::indicators::rsi::{rsi, rsi_lookback};
use crate::indicators::stoch::raw_fast_k;
use crate::utilities::enums::MaType;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[derive(Debug, Clone)]
pub struct StochRsiOutput {
    pub fast_k: Vec<f64>,
    pub fast_d: Vec<f64>,
}

pub fn stochrsi_lookback(
    period: usize,
    fastk_period: usize,
    fastd_period: usize,
    fastd_matype: MaType,
) -> usize {
    rsi_lookback(period) + fastk_period - 1 + ma_lookback(fastd_period, fastd_matype)
}

pub fn stochrsi(
    real: &[f64],
    period: usize,
    fastk_period: usize,
    fastd_period: usize,
    fastd_matype: MaType,
) -> Result<StochRsiOutput, TaError> {
    ensure_initialized("stochrsi")?;
    if real.is_empty() {
        return Ok(StochRsiOutput {
            fast_k: Vec::new(),
            fast_d: Vec::new(),
        });
    }
    validate_period("stochrsi", period, 2)?;
    validate_period("stochrsi", fastk_period, 1)?;
    validate_period("stochrsi", fastd_period, 1)?;

    let len = real.len();
    let rsi_from = rsi_lookback(period);
    let mut fast_k = nan_vec(len);
    let mut fast_d = nan_vec(len);
    if len <= rsi_from {
        return Ok(StochRsiOutput { fast_k, fast_d });
    }

    let rsi_full = rsi(real, period)?;
    let rsi_valid = &rsi_full[rsi_from..];
    let k_compact = raw_fast_k(rsi_valid, rsi_valid, rsi_valid, fastk_period);
    let k_from = fastk_period - 1;
    let d_compact = if k_compact.len() > k_from {
        ma(&k_compact[k_from..], fastd_period, fastd_matype)?
    } else {
        Vec::new()
    };

    let lookback = stochrsi_lookback(period, fastk_period, fastd_period, fastd_matype);
    for (j, &v) in k_compact.iter().enumerate() {
        let i = rsi_from + j;
        if !v.is_nan() && i >= lookback {
            fast_k[i] = v;
        }
    }
    for (j, &v) in d_compact.iter().enumerate() {
        if !v.is_nan() {
            // The MA's rolling sum can drift a few ulps past the %K
            // bounds; keep %D on the 0..100 scale.
            fast_d[rsi_from + k_from + j] = v.clamp(0.0, 100.0);
        }
    }
    Ok(StochRsiOutput { fast_k, fast_d })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_stochrsi_bounded_and_lookback() {
        initialize();
        let data: Vec<f64> = (0..80).map(|i| 50.0 + (i as f64 * 0.45).sin() * 7.0).collect();
        let out = stochrsi(&data, 14, 5, 3, MaType::Sma).expect("stochrsi");
        let lb = stochrsi_lookback(14, 5, 3, MaType::Sma);
        assert_eq!(lb, 20);
        assert!(out.fast_k[lb - 1].is_nan());
        for i in lb..80 {
            assert!((0.0..=100.0).contains(&out.fast_k[i]), "index {i}");
            assert!((0.0..=100.0).contains(&out.fast_d[i]), "index {i}");
        }
    }

    #[test]
    fn test_stochrsi_extreme_at_new_rsi_high() {
        initialize();
        // Steady rise keeps RSI at its window maximum, pinning %K at
        // either bound; a flat RSI window maps to 0 by the zero-range rule.
        let data: Vec<f64> = (0..60).map(|i| i as f64).collect();
        let out = stochrsi(&data, 14, 5, 3, MaType::Sma).expect("stochrsi");
        for i in 25..60 {
            assert!(out.fast_k[i] == 0.0 || out.fast_k[i] == 100.0);
        }
    }

    #[test]
    fn test_stochrsi_empty_input() {
        initialize();
        let out = stochrsi(&[], 14, 5, 3, MaType::Sma).expect("empty ok");
        assert!(out.fast_k.is_empty() && out.fast_d.is_empty());
    }
}
