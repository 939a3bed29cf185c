//! # Chaikin A/D Oscillator (ADOSC)
//!
//! Fast EMA of the A/D line minus a slow EMA of it. Both EMAs are seeded
//! with the line's first value rather than an SMA, so early output leans
//! on the first bar. Misordered periods are swapped.
//!
//! ## Parameters
//! - **fast_period / slow_period**: EMA windows (defaults: 3 / 10).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< slow_period - 1`
//!   are NaN.

use crate::indicators::ad::ad_line;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

pub fn adosc_lookback(fast_period: usize, slow_period: usize) -> usize {
    fast_period.max(slow_period) - 1
}

pub fn adosc(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    volume: &[f64],
    fast_period: usize,
    slow_period: usize,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("adosc")?;
    check_same_length("adosc", &[high.len(), low.len(), close.len(), volume.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("adosc", fast_period, 2)?;
    validate_period("adosc", slow_period, 2)?;
    let (fast_period, slow_period) = if slow_period < fast_period {
        (slow_period, fast_period)
    } else {
        (fast_period, slow_period)
    };

    let len = high.len();
    let lookback = adosc_lookback(fast_period, slow_period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let line = ad_line(high, low, close, volume);
    let fast_k = 2.0 / (fast_period as f64 + 1.0);
    let slow_k = 2.0 / (slow_period as f64 + 1.0);
    let mut fast_ema = line[0];
    let mut slow_ema = line[0];
    for i in 1..len {
        fast_ema = (line[i] - fast_ema) * fast_k + fast_ema;
        slow_ema = (line[i] - slow_ema) * slow_k + slow_ema;
        if i >= lookback {
            out[i] = fast_ema - slow_ema;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    fn bars(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        let close: Vec<f64> = (0..n).map(|i| 30.0 + (i as f64 * 0.5).sin() * 4.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let volume: Vec<f64> = (0..n).map(|i| 1000.0 + (i % 7) as f64 * 50.0).collect();
        (high, low, close, volume)
    }

    #[test]
    fn test_adosc_lookback_and_finiteness() {
        initialize();
        let (high, low, close, volume) = bars(40);
        let out = adosc(&high, &low, &close, &volume, 3, 10).expect("adosc");
        assert!(out[8].is_nan());
        for i in 9..40 {
            assert!(out[i].is_finite());
        }
    }

    #[test]
    fn test_adosc_swaps_misordered_periods() {
        initialize();
        let (high, low, close, volume) = bars(30);
        let a = adosc(&high, &low, &close, &volume, 3, 10).expect("adosc");
        let b = adosc(&high, &low, &close, &volume, 10, 3).expect("adosc");
        for i in 9..30 {
            assert_eq!(a[i], b[i]);
        }
    }

    #[test]
    fn test_adosc_flat_line_is_zero() {
        initialize();
        // A/D stays 0 when every bar is flat, so both EMAs agree.
        let flat = [5.0; 20];
        let volume = [100.0; 20];
        let out = adosc(&flat, &flat, &flat, &volume, 3, 10).expect("adosc");
        for i in 9..20 {
            assert_eq!(out[i], 0.0);
        }
    }

    #[test]
    fn test_adosc_empty_input() {
        initialize();
        assert!(adosc(&[], &[], &[], &[], 3, 10).expect("empty ok").is_empty());
    }
}
