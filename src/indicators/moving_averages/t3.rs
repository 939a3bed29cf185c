//! # Tillson T3 Moving Average
//!
//! Six cascaded EMAs combined through a volume-factor polynomial:
//! `T3 = c1*e6 + c2*e5 + c3*e4 + c4*e3` with
//! `c1 = -v³`, `c2 = 3v² + 3v³`, `c3 = -6v² - 3v - 3v³`,
//! `c4 = 1 + 3v + v³ + 3v²`. Each stage is seeded with the SMA of its
//! predecessor, so the lookback compounds to `6*(period-1)`.
//!
//! ## Parameters
//! - **period**: EMA period (default: 5, minimum: 2).
//! - **vfactor**: volume factor in `[0, 1]` (default: 0.7).
//!
//! ## Errors
//! - **InvalidPeriod**: `period` outside `2..=100000`.
//! - **InvalidParameter**: `vfactor` outside `[0, 1]`.
//! - **NotInitialized**: engine not initialized.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; positions `< 6*(period-1)` are NaN.

use crate::indicators::moving_averages::ema::ema_unchecked;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn t3_lookback(period: usize) -> usize {
    6 * (period - 1)
}

pub fn t3(real: &[f64], period: usize, vfactor: f64) -> Result<Vec<f64>, TaError> {
    ensure_initialized("t3")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("t3", period, 2)?;
    if !(0.0..=1.0).contains(&vfactor) || !vfactor.is_finite() {
        return Err(TaError::InvalidParameter {
            name: "t3",
            param: "vfactor",
            value: vfactor,
        });
    }

    let len = real.len();
    let lookback = t3_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let step = period - 1;
    let e1 = ema_unchecked(real, period);
    let e2 = ema_unchecked(&e1[step..], period);
    let e3 = ema_unchecked(&e2[step..], period);
    let e4 = ema_unchecked(&e3[step..], period);
    let e5 = ema_unchecked(&e4[step..], period);
    let e6 = ema_unchecked(&e5[step..], period);

    let v2 = vfactor * vfactor;
    let v3 = v2 * vfactor;
    let c1 = -v3;
    let c2 = 3.0 * (v2 + v3);
    let c3 = -3.0 * (2.0 * v2 + vfactor + v3);
    let c4 = 1.0 + 3.0 * vfactor + v3 + 3.0 * v2;

    for i in lookback..len {
        out[i] = c1 * e6[i - 5 * step]
            + c2 * e5[i - 4 * step]
            + c3 * e4[i - 3 * step]
            + c4 * e3[i - 2 * step];
    }
    Ok(out)
}
