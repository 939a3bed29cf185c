//! # Chande Momentum Oscillator (CMO)
//!
//! Same Wilder-smoothed gain/loss state as RSI, but mapped to
//! `100 * (gain - loss) / (gain + loss)`, so the scale is `[-100, 100]`.
//!
//! ## Parameters
//! - **period**: smoothing window (default: 14, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn cmo_lookback(period: usize) -> usize {
    period
}

pub fn cmo(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("cmo")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("cmo", period, 2)?;

    let len = real.len();
    let lookback = cmo_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let mut prev_gain = 0.0;
    let mut prev_loss = 0.0;
    for i in 1..=period {
        let delta = real[i] - real[i - 1];
        if delta < 0.0 {
            prev_loss -= delta;
        } else {
            prev_gain += delta;
        }
    }
    prev_gain /= period as f64;
    prev_loss /= period as f64;

    let emit = |gain: f64, loss: f64| {
        let total = gain + loss;
        if is_zero(total) {
            0.0
        } else {
            100.0 * ((gain - loss) / total)
        }
    };
    out[period] = emit(prev_gain, prev_loss);

    let decay = (period - 1) as f64;
    let inv_period = 1.0 / period as f64;
    for i in period + 1..len {
        let delta = real[i] - real[i - 1];
        prev_gain *= decay;
        prev_loss *= decay;
        if delta < 0.0 {
            prev_loss -= delta;
        } else {
            prev_gain += delta;
        }
        prev_gain *= inv_period;
        prev_loss *= inv_period;
        out[i] = emit(prev_gain, prev_loss);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::rsi::rsi;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_cmo_is_rescaled_rsi() {
        initialize();
        // CMO == 2 * RSI - 100 bar for bar, same smoothing state.
        let data: Vec<f64> = (0..50).map(|i| 30.0 + (i as f64 * 0.9).sin() * 6.0).collect();
        let c = cmo(&data, 14).expect("cmo");
        let r = rsi(&data, 14).expect("rsi");
        for i in 14..50 {
            assert!((c[i] - (2.0 * r[i] - 100.0)).abs() < 1e-9, "index {i}");
        }
    }

    #[test]
    fn test_cmo_extremes() {
        initialize();
        let up: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let out = cmo(&up, 14).expect("cmo");
        for i in 14..30 {
            assert!((out[i] - 100.0).abs() < 1e-9);
        }
        let down: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        let out = cmo(&down, 14).expect("cmo");
        for i in 14..30 {
            assert!((out[i] + 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cmo_empty_input() {
        initialize();
        assert!(cmo(&[], 14).expect("empty ok").is_empty());
    }
}
