//! # Absolute Price Oscillator (APO)
//!
//! Fast MA minus slow MA in price units. Misordered periods are swapped.
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
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

pub fn apo_lookback(fast_period: usize, slow_period: usize, matype: MaType) -> usize {
    ma_lookback(fast_period.max(slow_period), matype)
}

pub fn apo(
    real: &[f64],
    fast_period: usize,
    slow_period: usize,
    matype: MaType,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("apo")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("apo", fast_period, 2)?;
    validate_period("apo", slow_period, 2)?;
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
        out[i] = fast[i] - slow[i];
    }
    Ok(out)
}
