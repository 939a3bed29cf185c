//! # Aroon (AROON / AROONOSC)
//!
//! Bars since the extreme of a `period + 1`-bar window, rescaled so a
//! fresh extreme reads 100 and one `period` bars old reads 0. Ties go to
//! the most recent bar. The oscillator is up minus down in one pass.
//!
//! ## Parameters
//! - **period**: distance in bars (default: 14, minimum: 2).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - [`aroon`]: **`Ok(AroonOutput)`** with `down` and `up`, each of input
//!   length; positions `< period` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[derive(Debug, Clone)]
pub struct AroonOutput {
    pub down: Vec<f64>,
    pub up: Vec<f64>,
}

#[inline]
pub fn aroon_lookback(period: usize) -> usize {
    period
}

/// Index of the window maximum in `[start, i]`, most recent tie winning,
/// reusing the previous extreme when it is still in the window.
fn advance_highest(high: &[f64], mut idx: usize, start: usize, i: usize) -> usize {
    if idx < start {
        idx = start;
        for j in start + 1..=i {
            if high[j] >= high[idx] {
                idx = j;
            }
        }
    } else if high[i] >= high[idx] {
        idx = i;
    }
    idx
}

fn advance_lowest(low: &[f64], mut idx: usize, start: usize, i: usize) -> usize {
    if idx < start {
        idx = start;
        for j in start + 1..=i {
            if low[j] <= low[idx] {
                idx = j;
            }
        }
    } else if low[i] <= low[idx] {
        idx = i;
    }
    idx
}

/// Extreme indices over the bars before the first emitting window closes.
fn prime(high: &[f64], low: &[f64], lookback: usize) -> (usize, usize) {
    let mut highest = 0;
    let mut lowest = 0;
    for j in 1..lookback {
        if high[j] >= high[highest] {
            highest = j;
        }
        if low[j] <= low[lowest] {
            lowest = j;
        }
    }
    (highest, lowest)
}

pub fn aroon(high: &[f64], low: &[f64], period: usize) -> Result<AroonOutput, TaError> {
    ensure_initialized("aroon")?;
    check_same_length("aroon", &[high.len(), low.len()])?;
    if high.is_empty() {
        return Ok(AroonOutput {
            down: Vec::new(),
            up: Vec::new(),
        });
    }
    validate_period("aroon", period, 2)?;

    let len = high.len();
    let lookback = aroon_lookback(period);
    let mut down = nan_vec(len);
    let mut up = nan_vec(len);
    if len <= lookback {
        return Ok(AroonOutput { down, up });
    }

    let factor = 100.0 / period as f64;
    let (mut highest, mut lowest) = prime(high, low, lookback);
    for i in lookback..len {
        let start = i - period;
        highest = advance_highest(high, highest, start, i);
        lowest = advance_lowest(low, lowest, start, i);
        up[i] = factor * (period - (i - highest)) as f64;
        down[i] = factor * (period - (i - lowest)) as f64;
    }
    Ok(AroonOutput { down, up })
}

pub fn aroonosc(high: &[f64], low: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("aroonosc")?;
    check_same_length("aroonosc", &[high.len(), low.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("aroonosc", period, 2)?;

    let len = high.len();
    let lookback = aroon_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let factor = 100.0 / period as f64;
    let (mut highest, mut lowest) = prime(high, low, lookback);
    for i in lookback..len {
        let start = i - period;
        highest = advance_highest(high, highest, start, i);
        lowest = advance_lowest(low, lowest, start, i);
        // up - down collapses to the index difference.
        out[i] = factor * (highest as f64 - lowest as f64);
    }
    Ok(out)
}
