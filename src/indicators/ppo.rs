//! # Percentage Price Oscillator (PPO)
//!
//! Fast MA minus slow MA, expressed as a percentage of the slow MA.
//! A zero slow MA yields 0. Misordered periods are swapped.
//!
//! ## Parameters
//! - **fast_period / slow_period**: window sizes (defaults: 12 / 26).
//! - **matype**: moving average for both legs (default: SMA).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions before the slow leg's
//!   lookback are NaN.

use crate::indicators::moving_averages::{ma, ma_lookback};
use crate::utilities::enums::MaType;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{is_zero, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

pub fn ppo_lookback(fast_period: usize, slow_period: usize, matype: MaType) -> usize {
    ma_lookback(fast_period.max(slow_period), matype)
}

pub fn ppo(
    real: &[f64],
    fast_period: usize,
    slow_period: usize,
    matype: MaType,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("ppo")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("ppo", fast_period, 2)?;
    validate_period("ppo", slow_period, 2)?;
    let (fast_period, slow_period) = if slow_period < fast_period {
        (slow_period, fast_period)
    } else {
        (fast_period, slow_period)
    };

    let len = real.len();
    let lookback = ma_lookback(slow_period, matype);
    let fast = ma(real, fast_period, matype)?;
    let slow = ma(real, slow_period, matype)?;
    let mut out = nan_vec(len);
    for i in lookback..len {
        out[i] = if is_zero(slow[i]) {
            0.0
        } else {
            (fast[i] - slow[i]) / slow[i] * 100.0
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::apo::apo;
    use crate::indicators::moving_averages::sma;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_ppo_is_percentage_of_slow_leg() {
        initialize();
        let data: Vec<f64> = (0..60).map(|i| 30.0 + (i as f64 * 0.4).cos() * 4.0).collect();
        let p = ppo(&data, 12, 26, MaType::Sma).expect("ppo");
        let a = apo(&data, 12, 26, MaType::Sma).expect("apo");
        let slow = sma(&data, 26).expect("sma");
        for i in 25..60 {
            assert!((p[i] - a[i] / slow[i] * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ppo_constant_series_is_zero() {
        initialize();
        let out = ppo(&[9.0; 40], 12, 26, MaType::Sma).expect("ppo");
        for i in 25..40 {
            assert_eq!(out[i], 0.0);
        }
    }

    #[test]
    fn test_ppo_empty_input() {
        initialize();
        assert!(ppo(&[], 12, 26, MaType::Sma).expect("empty ok").is_empty());
    }
}
