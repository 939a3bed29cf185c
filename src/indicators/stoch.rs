//! # Stochastic Oscillator (STOCH / STOCHF)
//!
//! Raw %K locates the close inside the trailing high/low range:
//! `100 * (close - lowest low) / (highest high - lowest low)`, with a zero
//! range yielding 0. STOCHF smooths %K once into Fast-D; STOCH smooths it
//! twice (Slow-K, then Slow-D), each stage through the MAType strategy.
//! Both outputs of a call start at the combined lookback.
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.

use crate::indicators::moving_averages::{ma, ma_lookback};
use crate::utilities::enums::MaType;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;
use crate::utilities::mono_deque::MonoDeque;

#[derive(Debug, Clone)]
pub struct StochOutput {
    pub slow_k: Vec<f64>,
    pub slow_d: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct StochfOutput {
    pub fast_k: Vec<f64>,
    pub fast_d: Vec<f64>,
}

pub fn stoch_lookback(
    fastk_period: usize,
    slowk_period: usize,
    slowk_matype: MaType,
    slowd_period: usize,
    slowd_matype: MaType,
) -> usize {
    fastk_period - 1 + ma_lookback(slowk_period, slowk_matype) + ma_lookback(slowd_period, slowd_matype)
}

pub fn stochf_lookback(fastk_period: usize, fastd_period: usize, fastd_matype: MaType) -> usize {
    fastk_period - 1 + ma_lookback(fastd_period, fastd_matype)
}

/// Raw %K over the full input, NaN before `fastk_period - 1`. Shared by
/// STOCH, STOCHF and (over RSI values) STOCHRSI.
pub(crate) fn raw_fast_k(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    fastk_period: usize,
) -> Vec<f64> {
    let len = high.len();
    let lookback = fastk_period - 1;
    let mut out = nan_vec(len);
    if len <= lookback {
        return out;
    }
    let mut max_dq = MonoDeque::with_capacity(fastk_period);
    let mut min_dq = MonoDeque::with_capacity(fastk_period);
    for i in 0..len {
        max_dq.push_max(i, high);
        min_dq.push_min(i, low);
        if i >= lookback {
            max_dq.expire(i + 1 - fastk_period);
            min_dq.expire(i + 1 - fastk_period);
            let hh = high[max_dq.front()];
            let ll = low[min_dq.front()];
            let range = hh - ll;
            out[i] = if is_zero(range) {
                0.0
            } else {
                100.0 * ((close[i] - ll) / range)
            };
        }
    }
    out
}

/// Smooth a NaN-prefixed line through the MAType strategy, splicing the
/// result back to full length.
fn smooth(line: &[f64], valid_from: usize, period: usize, matype: MaType) -> Result<Vec<f64>, TaError> {
    let len = line.len();
    let mut out = nan_vec(len);
    if valid_from >= len {
        return Ok(out);
    }
    let compact = ma(&line[valid_from..], period, matype)?;
    for (j, &v) in compact.iter().enumerate() {
        if !v.is_nan() {
            // The MA's rolling sum can drift a few ulps past the %K
            // bounds; keep the smoothed line on the 0..100 scale.
            out[valid_from + j] = v.clamp(0.0, 100.0);
        }
    }
    Ok(out)
}

fn mask_before(series: &mut [f64], lookback: usize) {
    let end = lookback.min(series.len());
    for v in &mut series[..end] {
        *v = f64::NAN;
    }
}

pub fn stochf(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    fastk_period: usize,
    fastd_period: usize,
    fastd_matype: MaType,
) -> Result<StochfOutput, TaError> {
    ensure_initialized("stochf")?;
    check_same_length("stochf", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(StochfOutput {
            fast_k: Vec::new(),
            fast_d: Vec::new(),
        });
    }
    validate_period("stochf", fastk_period, 1)?;
    validate_period("stochf", fastd_period, 1)?;

    let mut fast_k = raw_fast_k(high, low, close, fastk_period);
    let fast_d = smooth(&fast_k, fastk_period - 1, fastd_period, fastd_matype)?;
    let lookback = stochf_lookback(fastk_period, fastd_period, fastd_matype);
    mask_before(&mut fast_k, lookback);
    Ok(StochfOutput { fast_k, fast_d })
}

pub fn stoch(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    fastk_period: usize,
    slowk_period: usize,
    slowk_matype: MaType,
    slowd_period: usize,
    slowd_matype: MaType,
) -> Result<StochOutput, TaError> {
    ensure_initialized("stoch")?;
    check_same_length("stoch", &[high.len(), low.len(), close.len()])?;
    if high.is_empty() {
        return Ok(StochOutput {
            slow_k: Vec::new(),
            slow_d: Vec::new(),
        });
    }
    validate_period("stoch", fastk_period, 1)?;
    validate_period("stoch", slowk_period, 1)?;
    validate_period("stoch", slowd_period, 1)?;

    let fast_k = raw_fast_k(high, low, close, fastk_period);
    let k_from = fastk_period - 1;
    let mut slow_k = smooth(&fast_k, k_from, slowk_period, slowk_matype)?;
    let d_from = k_from + ma_lookback(slowk_period, slowk_matype);
    let slow_d = smooth(&slow_k, d_from, slowd_period, slowd_matype)?;
    let lookback = stoch_lookback(fastk_period, slowk_period, slowk_matype, slowd_period, slowd_matype);
    mask_before(&mut slow_k, lookback);
    Ok(StochOutput { slow_k, slow_d })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    fn bars(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let close: Vec<f64> = (0..n).map(|i| 50.0 + (i as f64 * 0.6).sin() * 8.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.5).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.5).collect();
        (high, low, close)
    }

    #[test]
    fn test_fast_k_bounded() {
        initialize();
        let (high, low, close) = bars(60);
        let out = stochf(&high, &low, &close, 5, 3, MaType::Sma).expect("stochf");
        for i in 6..60 {
            assert!((0.0..=100.0).contains(&out.fast_k[i]), "index {i}");
            assert!((0.0..=100.0).contains(&out.fast_d[i]), "index {i}");
        }
    }

    #[test]
    fn test_fast_k_hand_computed() {
        initialize();
        let high = [10.0, 12.0, 11.0];
        let low = [8.0, 9.0, 9.5];
        let close = [9.0, 11.0, 10.0];
        let out = stochf(&high, &low, &close, 3, 1, MaType::Sma).expect("stochf");
        // Window [0..3): hh = 12, ll = 8, k = 100 * (10 - 8) / 4.
        assert_eq!(out.fast_k[2], 50.0);
    }

    #[test]
    fn test_stoch_slow_k_is_smoothed_fast_k() {
        initialize();
        let (high, low, close) = bars(50);
        let slow = stoch(&high, &low, &close, 5, 3, MaType::Sma, 3, MaType::Sma).expect("stoch");
        let fast = stochf(&high, &low, &close, 5, 3, MaType::Sma).expect("stochf");
        // STOCH's Slow-K equals STOCHF's Fast-D for matching parameters.
        let lb = stoch_lookback(5, 3, MaType::Sma, 3, MaType::Sma);
        for i in lb..50 {
            assert!((slow.slow_k[i] - fast.fast_d[i]).abs() < 1e-12);
        }
        assert!(slow.slow_k[lb - 1].is_nan());
        assert!(slow.slow_d[lb - 1].is_nan());
    }

    #[test]
    fn test_stoch_zero_range_yields_zero() {
        initialize();
        let flat = [5.0; 12];
        let out = stochf(&flat, &flat, &flat, 5, 3, MaType::Sma).expect("stochf");
        for i in 6..12 {
            assert_eq!(out.fast_k[i], 0.0);
        }
    }

    #[test]
    fn test_stoch_empty_input() {
        initialize();
        let out = stoch(&[], &[], &[], 5, 3, MaType::Sma, 3, MaType::Sma).expect("empty ok");
        assert!(out.slow_k.is_empty() && out.slow_d.is_empty());
    }
}
