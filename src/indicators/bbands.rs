//! # Bollinger Bands (BBANDS)
//!
//! Middle band from the MAType strategy; upper and lower bands offset by
//! `nbdev_up`/`nbdev_dn` windowed standard deviations.
//!
//! ## Parameters
//! - **period**: window size (default: 5, minimum: 2).
//! - **nbdev_up / nbdev_dn**: deviation multipliers (default: 2.0).
//! - **matype**: middle-band moving average (default: SMA).
//!
//! ## Errors
//! - **InvalidPeriod**, **InvalidParameter** (non-finite multiplier),
//!   **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(BbandsOutput)`** with `upper`, `middle`, `lower`, each of input
//!   length; positions before the middle band's lookback are NaN.

use crate::indicators::moving_averages::{ma, ma_lookback};
use crate::indicators::stddev::stddev_unchecked;
use crate::utilities::enums::MaType;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[derive(Debug, Clone)]
pub struct BbandsOutput {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

pub fn bbands_lookback(period: usize, matype: MaType) -> usize {
    ma_lookback(period, matype).max(period - 1)
}

pub fn bbands(
    real: &[f64],
    period: usize,
    nbdev_up: f64,
    nbdev_dn: f64,
    matype: MaType,
) -> Result<BbandsOutput, TaError> {
    ensure_initialized("bbands")?;
    if real.is_empty() {
        return Ok(BbandsOutput {
            upper: Vec::new(),
            middle: Vec::new(),
            lower: Vec::new(),
        });
    }
    validate_period("bbands", period, 2)?;
    for (param, value) in [("nbdev_up", nbdev_up), ("nbdev_dn", nbdev_dn)] {
        if !value.is_finite() {
            return Err(TaError::InvalidParameter {
                name: "bbands",
                param,
                value,
            });
        }
    }

    let len = real.len();
    let lookback = bbands_lookback(period, matype);
    let middle = ma(real, period, matype)?;
    let mut upper = nan_vec(len);
    let mut lower = nan_vec(len);
    if len <= lookback {
        return Ok(BbandsOutput {
            upper,
            middle,
            lower,
        });
    }

    let dev = stddev_unchecked(real, period);
    for i in lookback..len {
        let d = dev[i];
        upper[i] = middle[i] + nbdev_up * d;
        lower[i] = middle[i] - nbdev_dn * d;
    }
    Ok(BbandsOutput {
        upper,
        middle,
        lower,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::moving_averages::sma;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_bbands_middle_is_chosen_ma() {
        initialize();
        let data: Vec<f64> = (0..30).map(|i| 50.0 + (i as f64 * 0.9).sin() * 4.0).collect();
        let out = bbands(&data, 5, 2.0, 2.0, MaType::Sma).expect("bbands");
        let mid = sma(&data, 5).expect("sma");
        for i in 4..data.len() {
            assert_eq!(out.middle[i], mid[i]);
        }
    }

    #[test]
    fn test_bbands_band_symmetry() {
        initialize();
        let data: Vec<f64> = (0..40).map(|i| 10.0 + ((i * 7) % 5) as f64).collect();
        let out = bbands(&data, 5, 2.0, 2.0, MaType::Sma).expect("bbands");
        for i in 4..data.len() {
            let up = out.upper[i] - out.middle[i];
            let dn = out.middle[i] - out.lower[i];
            assert!((up - dn).abs() < 1e-9, "index {i}");
            assert!(up >= 0.0);
        }
    }

    #[test]
    fn test_bbands_constant_series_collapses() {
        initialize();
        let data = [5.0; 20];
        let out = bbands(&data, 5, 2.0, 2.0, MaType::Sma).expect("bbands");
        for i in 4..20 {
            assert_eq!(out.upper[i], 5.0);
            assert_eq!(out.lower[i], 5.0);
        }
    }

    #[test]
    fn test_bbands_empty_input() {
        initialize();
        let out = bbands(&[], 5, 2.0, 2.0, MaType::Sma).expect("empty ok");
        assert!(out.upper.is_empty() && out.middle.is_empty() && out.lower.is_empty());
    }
}
