//! # MESA Adaptive Moving Average (MAMA)
//!
//! Ehlers' adaptive pair: the smoothing constant follows the rate of change
//! of the Hilbert-transform phase, bounded by `fast_limit` and
//! `slow_limit`; FAMA trails MAMA at half the constant.
//!
//! ## Parameters
//! - **fast_limit**: upper alpha bound in `(0, 1]` (default: 0.5).
//! - **slow_limit**: lower alpha bound in `(0, 1]` (default: 0.05).
//!
//! ## Errors
//! - **InvalidParameter**: a limit outside `(0, 1]`.
//! - **NotInitialized**: engine not initialized.
//!
//! ## Returns
//! - **`Ok(MamaOutput)`** with `mama` and `fama`, both of input length;
//!   positions `< 32` are NaN.

use crate::indicators::hilbert::{CycleState, PriceWma, RAD2DEG};
use crate::utilities::errors::TaError;
use crate::utilities::helpers::nan_vec;
use crate::utilities::lifecycle::ensure_initialized;

#[derive(Debug, Clone)]
pub struct MamaOutput {
    pub mama: Vec<f64>,
    pub fama: Vec<f64>,
}

#[inline]
pub fn mama_lookback() -> usize {
    32
}

fn validate_limit(param: &'static str, value: f64) -> Result<(), TaError> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(TaError::InvalidParameter {
            name: "mama",
            param,
            value,
        });
    }
    Ok(())
}

pub fn mama(real: &[f64], fast_limit: f64, slow_limit: f64) -> Result<MamaOutput, TaError> {
    ensure_initialized("mama")?;
    if real.is_empty() {
        return Ok(MamaOutput {
            mama: Vec::new(),
            fama: Vec::new(),
        });
    }
    validate_limit("fast_limit", fast_limit)?;
    validate_limit("slow_limit", slow_limit)?;

    let len = real.len();
    let lookback = mama_lookback();
    let mut out_mama = nan_vec(len);
    let mut out_fama = nan_vec(len);
    if len <= lookback {
        return Ok(MamaOutput {
            mama: out_mama,
            fama: out_fama,
        });
    }

    let mut wma = PriceWma::seed(real, 0);
    let mut today = 3;
    for _ in 0..9 {
        let v = real[today];
        today += 1;
        wma.step(real, v);
    }

    let mut cycle = CycleState::new();
    let mut prev_phase = 0.0;
    let mut prev_mama = 0.0;
    let mut prev_fama = 0.0;

    while today < len {
        let today_value = real[today];
        let smoothed = wma.step(real, today_value);
        let step = cycle.step(today, smoothed);

        let phase = if step.i1 != 0.0 {
            (step.q1 / step.i1).atan() * RAD2DEG
        } else {
            0.0
        };
        let mut delta_phase = prev_phase - phase;
        prev_phase = phase;
        if delta_phase < 1.0 {
            delta_phase = 1.0;
        }
        let mut alpha = fast_limit / delta_phase;
        if alpha < slow_limit {
            alpha = slow_limit;
        }

        prev_mama = alpha * today_value + (1.0 - alpha) * prev_mama;
        let half_alpha = 0.5 * alpha;
        prev_fama = half_alpha * prev_mama + (1.0 - half_alpha) * prev_fama;

        if today >= lookback {
            out_mama[today] = prev_mama;
            out_fama[today] = prev_fama;
        }
        today += 1;
    }

    Ok(MamaOutput {
        mama: out_mama,
        fama: out_fama,
    })
}
