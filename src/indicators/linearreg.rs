//! # Linear regression family (LINEARREG / SLOPE / INTERCEPT / ANGLE / TSF)
//!
//! Least-squares line over the trailing window, with x running from 0 at
//! the oldest bar to `period - 1` at the newest. The five outputs are
//! different evaluations of the same fit:
//!
//! | function             | value                         |
//! |----------------------|-------------------------------|
//! | LINEARREG            | `b + m * (period - 1)`        |
//! | LINEARREG_SLOPE      | `m`                           |
//! | LINEARREG_INTERCEPT  | `b`                           |
//! | LINEARREG_ANGLE      | `atan(m)` in degrees          |
//! | TSF                  | `b + m * period`              |
//!
//! ## Parameters
//! - **period**: window size (default: 14, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< period - 1` are NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn linearreg_lookback(period: usize) -> usize {
    period - 1
}

fn fit_impl<F>(name: &'static str, real: &[f64], period: usize, f: F) -> Result<Vec<f64>, TaError>
where
    F: Fn(f64, f64, f64) -> f64,
{
    ensure_initialized(name)?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period(name, period, 2)?;

    let len = real.len();
    let lookback = linearreg_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let n = period as f64;
    let sum_x = n * (n - 1.0) * 0.5;
    let sum_x_sqr = n * (n - 1.0) * (2.0 * n - 1.0) / 6.0;
    let divisor = sum_x * sum_x - n * sum_x_sqr;
    for today in lookback..len {
        let mut sum_xy = 0.0;
        let mut sum_y = 0.0;
        for i in 0..period {
            let value = real[today - i];
            sum_y += value;
            sum_xy += i as f64 * value;
        }
        let m = (n * sum_xy - sum_x * sum_y) / divisor;
        let b = (sum_y - m * sum_x) / n;
        out[today] = f(m, b, n);
    }
    Ok(out)
}

pub fn linearreg(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    fit_impl("linearreg", real, period, |m, b, n| b + m * (n - 1.0))
}

pub fn linearreg_slope(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    fit_impl("linearreg_slope", real, period, |m, _, _| m)
}

pub fn linearreg_intercept(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    fit_impl("linearreg_intercept", real, period, |_, b, _| b)
}

pub fn linearreg_angle(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    fit_impl("linearreg_angle", real, period, |m, _, _| {
        m.atan() * (180.0 / std::f64::consts::PI)
    })
}

pub fn tsf(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    fit_impl("tsf", real, period, |m, b, n| b + m * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_linearreg_on_a_line_reproduces_it() {
        initialize();
        let data: Vec<f64> = (0..20).map(|i| 3.0 + 2.0 * i as f64).collect();
        let fit = linearreg(&data, 5).expect("linearreg");
        let slope = linearreg_slope(&data, 5).expect("slope");
        let forecast = tsf(&data, 5).expect("tsf");
        for i in 4..20 {
            assert!((fit[i] - data[i]).abs() < 1e-9, "index {i}");
            assert!((slope[i] - 2.0).abs() < 1e-9);
            assert!((forecast[i] - (data[i] + 2.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linearreg_intercept_is_window_start() {
        initialize();
        let data: Vec<f64> = (0..20).map(|i| 3.0 + 2.0 * i as f64).collect();
        let b = linearreg_intercept(&data, 5).expect("intercept");
        for i in 4..20 {
            assert!((b[i] - data[i - 4]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linearreg_angle_of_unit_slope() {
        initialize();
        let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let angle = linearreg_angle(&data, 5).expect("angle");
        for i in 4..10 {
            assert!((angle[i] - 45.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linearreg_flat_series() {
        initialize();
        let flat = [7.0; 12];
        let fit = linearreg(&flat, 5).expect("linearreg");
        let slope = linearreg_slope(&flat, 5).expect("slope");
        for i in 4..12 {
            assert!((fit[i] - 7.0).abs() < 1e-12);
            assert!(slope[i].abs() < 1e-12);
        }
    }

    #[test]
    fn test_linearreg_empty_input() {
        initialize();
        assert!(linearreg(&[], 14).expect("empty ok").is_empty());
    }
}
