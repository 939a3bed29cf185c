//! # Hilbert Transform cycle family
//!
//! Six views of one pipeline: a 4-bar WMA price smoother feeding the
//! Hilbert FIR stages and the homodyne discriminator (see the shared
//! machinery in this module's sibling). The phase-based views also keep a
//! 50-slot ring of smoothed prices and a running dominant-cycle phase.
//!
//! | function     | output                                        | lookback |
//! |--------------|-----------------------------------------------|----------|
//! | HT_DCPERIOD  | smoothed dominant cycle period                | 32       |
//! | HT_PHASOR    | in-phase and quadrature components            | 32       |
//! | HT_DCPHASE   | dominant cycle phase in degrees               | 63       |
//! | HT_SINE      | sine and 45-degree lead sine of the phase     | 63       |
//! | HT_TRENDLINE | instantaneous trendline (4-3-2-1 cycle average)| 63      |
//! | HT_TRENDMODE | 1 trending / 0 cycling                        | 63       |
//!
//! The 32-lookback views warm the smoother up for 9 bars past its seed,
//! the 63-lookback views for 34, matching the reference bar for bar.
//!
//! ## Errors
//! - **NotInitialized**.

use crate::indicators::hilbert::{CycleState, PriceWma, DEG2RAD, RAD2DEG, SMOOTH_PRICE_SIZE};
use crate::utilities::errors::TaError;
use crate::utilities::helpers::nan_vec;
use crate::utilities::lifecycle::ensure_initialized;

#[derive(Debug, Clone)]
pub struct PhasorOutput {
    pub inphase: Vec<f64>,
    pub quadrature: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct SineOutput {
    pub sine: Vec<f64>,
    pub leadsine: Vec<f64>,
}

#[inline]
pub fn ht_dcperiod_lookback() -> usize {
    32
}

#[inline]
pub fn ht_phasor_lookback() -> usize {
    32
}

#[inline]
pub fn ht_dcphase_lookback() -> usize {
    63
}

#[inline]
pub fn ht_sine_lookback() -> usize {
    63
}

#[inline]
pub fn ht_trendline_lookback() -> usize {
    63
}

#[inline]
pub fn ht_trendmode_lookback() -> usize {
    63
}

/// Seed the smoother and run `warmup` WMA-only bars; returns the smoother
/// and the index of the first main-loop bar.
fn warm_up(real: &[f64], warmup: usize) -> (PriceWma, usize) {
    let mut wma = PriceWma::seed(real, 0);
    let mut today = 3;
    for _ in 0..warmup {
        let v = real[today];
        today += 1;
        wma.step(real, v);
    }
    (wma, today)
}

/// Truncated dominant cycle period used for phase and trendline windows.
#[inline]
fn dc_period_int(smooth_period: f64) -> usize {
    (smooth_period + 0.5) as usize
}

/// Correlate the smoothed-price ring against one cycle of sine/cosine,
/// walking backwards from `ring_idx`, and fold the result into degrees.
fn dc_phase_from_ring(
    ring: &[f64; SMOOTH_PRICE_SIZE],
    ring_idx: usize,
    period_int: usize,
    smooth_period: f64,
) -> f64 {
    let mut real_part = 0.0;
    let mut imag_part = 0.0;
    let mut idx = ring_idx;
    for i in 0..period_int {
        let angle = (i as f64) * std::f64::consts::TAU / period_int as f64;
        let value = ring[idx];
        real_part += angle.sin() * value;
        imag_part += angle.cos() * value;
        idx = if idx == 0 { SMOOTH_PRICE_SIZE - 1 } else { idx - 1 };
    }

    let mut dc_phase = 0.0;
    let magnitude = imag_part.abs();
    if magnitude > 0.0 {
        dc_phase = (real_part / imag_part).atan() * RAD2DEG;
    } else if magnitude <= 0.01 {
        if real_part < 0.0 {
            dc_phase -= 90.0;
        } else if real_part > 0.0 {
            dc_phase += 90.0;
        }
    }
    dc_phase += 90.0;
    // Compensate for the one-bar lag of the weighted smoother.
    dc_phase += 360.0 / smooth_period;
    if imag_part < 0.0 {
        dc_phase += 180.0;
    }
    if dc_phase > 315.0 {
        dc_phase -= 360.0;
    }
    dc_phase
}

/// Average of the raw price over the current dominant cycle, ending at
/// `today`.
fn cycle_average(real: &[f64], today: usize, period_int: usize) -> f64 {
    let take = period_int.min(today + 1);
    let mut total = 0.0;
    for &v in &real[today + 1 - take..=today] {
        total += v;
    }
    if period_int > 0 {
        total /= period_int as f64;
    }
    total
}

pub fn ht_dcperiod(real: &[f64]) -> Result<Vec<f64>, TaError> {
    ensure_initialized("ht_dcperiod")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    let len = real.len();
    let lookback = ht_dcperiod_lookback();
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let (mut wma, mut today) = warm_up(real, 9);
    let mut cycle = CycleState::new();
    while today < len {
        let smoothed = wma.step(real, real[today]);
        cycle.step(today, smoothed);
        if today >= lookback {
            out[today] = cycle.smooth_period;
        }
        today += 1;
    }
    Ok(out)
}

pub fn ht_phasor(real: &[f64]) -> Result<PhasorOutput, TaError> {
    ensure_initialized("ht_phasor")?;
    if real.is_empty() {
        return Ok(PhasorOutput {
            inphase: Vec::new(),
            quadrature: Vec::new(),
        });
    }
    let len = real.len();
    let lookback = ht_phasor_lookback();
    let mut inphase = nan_vec(len);
    let mut quadrature = nan_vec(len);
    if len <= lookback {
        return Ok(PhasorOutput {
            inphase,
            quadrature,
        });
    }

    let (mut wma, mut today) = warm_up(real, 9);
    let mut cycle = CycleState::new();
    while today < len {
        let smoothed = wma.step(real, real[today]);
        let step = cycle.step(today, smoothed);
        if today >= lookback {
            inphase[today] = step.i1;
            quadrature[today] = step.q1;
        }
        today += 1;
    }
    Ok(PhasorOutput {
        inphase,
        quadrature,
    })
}

pub fn ht_dcphase(real: &[f64]) -> Result<Vec<f64>, TaError> {
    ensure_initialized("ht_dcphase")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    let len = real.len();
    let lookback = ht_dcphase_lookback();
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let (mut wma, mut today) = warm_up(real, 34);
    let mut cycle = CycleState::new();
    let mut ring = [0.0f64; SMOOTH_PRICE_SIZE];
    let mut ring_idx = 0;
    while today < len {
        let smoothed = wma.step(real, real[today]);
        ring[ring_idx] = smoothed;
        cycle.step(today, smoothed);
        let dc_phase = dc_phase_from_ring(
            &ring,
            ring_idx,
            dc_period_int(cycle.smooth_period),
            cycle.smooth_period,
        );
        if today >= lookback {
            out[today] = dc_phase;
        }
        ring_idx = (ring_idx + 1) % SMOOTH_PRICE_SIZE;
        today += 1;
    }
    Ok(out)
}

pub fn ht_sine(real: &[f64]) -> Result<SineOutput, TaError> {
    ensure_initialized("ht_sine")?;
    if real.is_empty() {
        return Ok(SineOutput {
            sine: Vec::new(),
            leadsine: Vec::new(),
        });
    }
    let len = real.len();
    let lookback = ht_sine_lookback();
    let mut sine = nan_vec(len);
    let mut leadsine = nan_vec(len);
    if len <= lookback {
        return Ok(SineOutput { sine, leadsine });
    }

    let (mut wma, mut today) = warm_up(real, 34);
    let mut cycle = CycleState::new();
    let mut ring = [0.0f64; SMOOTH_PRICE_SIZE];
    let mut ring_idx = 0;
    while today < len {
        let smoothed = wma.step(real, real[today]);
        ring[ring_idx] = smoothed;
        cycle.step(today, smoothed);
        let dc_phase = dc_phase_from_ring(
            &ring,
            ring_idx,
            dc_period_int(cycle.smooth_period),
            cycle.smooth_period,
        );
        if today >= lookback {
            sine[today] = (dc_phase * DEG2RAD).sin();
            leadsine[today] = ((dc_phase + 45.0) * DEG2RAD).sin();
        }
        ring_idx = (ring_idx + 1) % SMOOTH_PRICE_SIZE;
        today += 1;
    }
    Ok(SineOutput { sine, leadsine })
}

pub fn ht_trendline(real: &[f64]) -> Result<Vec<f64>, TaError> {
    ensure_initialized("ht_trendline")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    let len = real.len();
    let lookback = ht_trendline_lookback();
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }

    let (mut wma, mut today) = warm_up(real, 34);
    let mut cycle = CycleState::new();
    let mut i_trend1 = 0.0;
    let mut i_trend2 = 0.0;
    let mut i_trend3 = 0.0;
    while today < len {
        let smoothed = wma.step(real, real[today]);
        cycle.step(today, smoothed);
        let avg = cycle_average(real, today, dc_period_int(cycle.smooth_period));
        let trendline = (4.0 * avg + 3.0 * i_trend1 + 2.0 * i_trend2 + i_trend3) / 10.0;
        i_trend3 = i_trend2;
        i_trend2 = i_trend1;
        i_trend1 = avg;
        if today >= lookback {
            out[today] = trendline;
        }
        today += 1;
    }
    Ok(out)
}

pub fn ht_trendmode(real: &[f64]) -> Result<Vec<i32>, TaError> {
    ensure_initialized("ht_trendmode")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    let len = real.len();
    let lookback = ht_trendmode_lookback();
    let mut out = vec![0i32; len];
    if len <= lookback {
        return Ok(out);
    }

    let (mut wma, mut today) = warm_up(real, 34);
    let mut cycle = CycleState::new();
    let mut ring = [0.0f64; SMOOTH_PRICE_SIZE];
    let mut ring_idx = 0;
    let mut dc_phase = 0.0;
    let mut sine = 0.0;
    let mut leadsine = 0.0;
    let mut i_trend1 = 0.0;
    let mut i_trend2 = 0.0;
    let mut i_trend3 = 0.0;
    let mut days_in_trend = 0i64;
    while today < len {
        let smoothed = wma.step(real, real[today]);
        ring[ring_idx] = smoothed;
        cycle.step(today, smoothed);
        let smooth_period = cycle.smooth_period;

        let prev_dc_phase = dc_phase;
        dc_phase = dc_phase_from_ring(&ring, ring_idx, dc_period_int(smooth_period), smooth_period);

        let prev_sine = sine;
        let prev_leadsine = leadsine;
        sine = (dc_phase * DEG2RAD).sin();
        leadsine = ((dc_phase + 45.0) * DEG2RAD).sin();

        let avg = cycle_average(real, today, dc_period_int(smooth_period));
        let trendline = (4.0 * avg + 3.0 * i_trend1 + 2.0 * i_trend2 + i_trend3) / 10.0;
        i_trend3 = i_trend2;
        i_trend2 = i_trend1;
        i_trend1 = avg;

        let mut trend = 1;
        // A sine/lead-sine crossing marks the start of a cycle mode.
        if (sine > leadsine && prev_sine <= prev_leadsine)
            || (sine < leadsine && prev_sine >= prev_leadsine)
        {
            days_in_trend = 0;
            trend = 0;
        }
        days_in_trend += 1;
        if (days_in_trend as f64) < 0.5 * smooth_period {
            trend = 0;
        }
        let phase_delta = dc_phase - prev_dc_phase;
        if smooth_period != 0.0
            && phase_delta > 0.67 * 360.0 / smooth_period
            && phase_delta < 1.5 * 360.0 / smooth_period
        {
            trend = 0;
        }
        if trendline != 0.0 && ((smoothed - trendline) / trendline).abs() >= 0.015 {
            trend = 1;
        }

        if today >= lookback {
            out[today] = trend;
        }
        ring_idx = (ring_idx + 1) % SMOOTH_PRICE_SIZE;
        today += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    fn cycle_series(n: usize, period: f64) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + 10.0 * (i as f64 * std::f64::consts::TAU / period).sin())
            .collect()
    }

    #[test]
    fn test_ht_dcperiod_locks_onto_cycle() {
        initialize();
        let data = cycle_series(400, 20.0);
        let out = ht_dcperiod(&data).expect("ht_dcperiod");
        assert!(out[31].is_nan());
        assert!(out[32].is_finite());
        // After convergence the estimate sits near the true 20-bar cycle.
        let tail = out[350];
        assert!((tail - 20.0).abs() < 2.0, "estimate {tail}");
        for i in 32..400 {
            assert!((6.0..=50.0).contains(&out[i]), "index {i}: {}", out[i]);
        }
    }

    #[test]
    fn test_ht_phasor_lookback_and_finiteness() {
        initialize();
        let data = cycle_series(200, 25.0);
        let out = ht_phasor(&data).expect("ht_phasor");
        assert!(out.inphase[31].is_nan());
        for i in 32..200 {
            assert!(out.inphase[i].is_finite());
            assert!(out.quadrature[i].is_finite());
        }
    }

    #[test]
    fn test_ht_dcphase_range_after_fold() {
        initialize();
        let data = cycle_series(300, 18.0);
        let out = ht_dcphase(&data).expect("ht_dcphase");
        assert!(out[62].is_nan());
        for i in 63..300 {
            assert!((-45.0..=315.0).contains(&out[i]), "index {i}: {}", out[i]);
        }
    }

    #[test]
    fn test_ht_sine_is_sine_of_phase() {
        initialize();
        let data = cycle_series(300, 22.0);
        let phase = ht_dcphase(&data).expect("ht_dcphase");
        let out = ht_sine(&data).expect("ht_sine");
        for i in 63..300 {
            assert!((out.sine[i] - (phase[i] * DEG2RAD).sin()).abs() < 1e-12);
            assert!((out.leadsine[i] - ((phase[i] + 45.0) * DEG2RAD).sin()).abs() < 1e-12);
            assert!(out.sine[i].abs() <= 1.0);
        }
    }

    #[test]
    fn test_ht_trendline_tracks_price_level() {
        initialize();
        let data = cycle_series(300, 20.0);
        let out = ht_trendline(&data).expect("ht_trendline");
        assert!(out[62].is_nan());
        // The trendline averages a full cycle, so it hugs the midline.
        for i in 100..300 {
            assert!((out[i] - 100.0).abs() < 8.0, "index {i}: {}", out[i]);
        }
    }

    #[test]
    fn test_ht_trendmode_values_and_trend_detection() {
        initialize();
        let trending: Vec<f64> = (0..300).map(|i| 100.0 + i as f64).collect();
        let out = ht_trendmode(&trending).expect("ht_trendmode");
        for &v in &out {
            assert!(v == 0 || v == 1);
        }
        // A steady ramp should mostly read as trending once warmed up.
        let ones = out[100..].iter().filter(|&&v| v == 1).count();
        assert!(ones > 150, "trend bars: {ones}");
    }

    #[test]
    fn test_ht_empty_and_short_inputs() {
        initialize();
        assert!(ht_dcperiod(&[]).expect("empty ok").is_empty());
        let short = cycle_series(40, 20.0);
        let out = ht_dcphase(&short).expect("short ok");
        assert!(out.iter().all(|v| v.is_nan()));
    }
}
