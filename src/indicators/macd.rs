//! # Moving Average Convergence/Divergence (MACD / MACDEXT / MACDFIX)
//!
//! Fast MA minus slow MA, a signal MA of that difference, and the
//! histogram between the two. Three entry points share the plumbing:
//!
//! - [`macd`]: EMAs with `k = 2/(period+1)` (defaults 12/26/9).
//! - [`macdext`]: any [`MaType`] per leg.
//! - [`macdfix`]: the classic fixed constants `k = 0.15` and `k = 0.075`
//!   (12/26-equivalent); only the signal period is configurable.
//!
//! Fast and slow are swapped if given in the wrong order, so the line is
//! always fast-minus-slow.
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(MacdOutput)`** with `macd`, `signal`, `hist`, each of input
//!   length. `macd` starts at the slow lookback; `signal` and `hist` a
//!   signal lookback later.

use crate::indicators::moving_averages::ema::{ema_unchecked, ema_with_k};
use crate::indicators::moving_averages::{ma, ma_lookback};
use crate::utilities::enums::MaType;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;

#[derive(Debug, Clone)]
pub struct MacdOutput {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub hist: Vec<f64>,
}

impl MacdOutput {
    fn empty() -> Self {
        MacdOutput {
            macd: Vec::new(),
            signal: Vec::new(),
            hist: Vec::new(),
        }
    }
}

pub fn macd_lookback(slow_period: usize, fast_period: usize, signal_period: usize) -> usize {
    slow_period.max(fast_period) - 1 + signal_period - 1
}

pub fn macdext_lookback(
    fast_period: usize,
    fast_matype: MaType,
    slow_period: usize,
    slow_matype: MaType,
    signal_period: usize,
    signal_matype: MaType,
) -> usize {
    let lb_fast = ma_lookback(fast_period, fast_matype);
    let lb_slow = ma_lookback(slow_period, slow_matype);
    lb_fast.max(lb_slow) + ma_lookback(signal_period, signal_matype)
}

pub fn macdfix_lookback(signal_period: usize) -> usize {
    25 + signal_period - 1
}

/// Splice the signal line (computed over the compact valid region of the
/// MACD line) and the histogram into full-length buffers.
fn assemble(
    len: usize,
    macd_line: Vec<f64>,
    signal_compact: &[f64],
    base_lookback: usize,
) -> MacdOutput {
    let mut signal = nan_vec(len);
    let mut hist = nan_vec(len);
    for (j, &s) in signal_compact.iter().enumerate() {
        if s.is_nan() {
            continue;
        }
        let i = base_lookback + j;
        signal[i] = s;
        hist[i] = macd_line[i] - s;
    }
    MacdOutput {
        macd: macd_line,
        signal,
        hist,
    }
}

pub fn macd(
    real: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput, TaError> {
    ensure_initialized("macd")?;
    if real.is_empty() {
        return Ok(MacdOutput::empty());
    }
    validate_period("macd", fast_period, 2)?;
    validate_period("macd", slow_period, 2)?;
    validate_period("macd", signal_period, 1)?;
    let (fast_period, slow_period) = if slow_period < fast_period {
        (slow_period, fast_period)
    } else {
        (fast_period, slow_period)
    };

    let len = real.len();
    let base_lookback = slow_period - 1;
    let fast = ema_unchecked(real, fast_period);
    let slow = ema_unchecked(real, slow_period);
    let mut macd_line = nan_vec(len);
    for i in base_lookback..len {
        macd_line[i] = fast[i] - slow[i];
    }
    if len <= base_lookback {
        return Ok(assemble(len, macd_line, &[], base_lookback));
    }
    let signal_compact = ema_unchecked(&macd_line[base_lookback..], signal_period);
    Ok(assemble(len, macd_line, &signal_compact, base_lookback))
}

pub fn macdext(
    real: &[f64],
    fast_period: usize,
    fast_matype: MaType,
    slow_period: usize,
    slow_matype: MaType,
    signal_period: usize,
    signal_matype: MaType,
) -> Result<MacdOutput, TaError> {
    ensure_initialized("macdext")?;
    if real.is_empty() {
        return Ok(MacdOutput::empty());
    }
    validate_period("macdext", fast_period, 2)?;
    validate_period("macdext", slow_period, 2)?;
    validate_period("macdext", signal_period, 1)?;

    // Order by lookback so the slow leg really is the slower one.
    let mut lb_fast = ma_lookback(fast_period, fast_matype);
    let mut lb_slow = ma_lookback(slow_period, slow_matype);
    let (fast_period, fast_matype, slow_period, slow_matype) = if lb_slow < lb_fast {
        std::mem::swap(&mut lb_fast, &mut lb_slow);
        (slow_period, slow_matype, fast_period, fast_matype)
    } else {
        (fast_period, fast_matype, slow_period, slow_matype)
    };

    let len = real.len();
    let base_lookback = lb_slow;
    let fast = ma(real, fast_period, fast_matype)?;
    let slow = ma(real, slow_period, slow_matype)?;
    let mut macd_line = nan_vec(len);
    for i in base_lookback..len {
        macd_line[i] = fast[i] - slow[i];
    }
    if len <= base_lookback {
        return Ok(assemble(len, macd_line, &[], base_lookback));
    }
    let signal_compact = ma(&macd_line[base_lookback..], signal_period, signal_matype)?;
    Ok(assemble(len, macd_line, &signal_compact, base_lookback))
}

pub fn macdfix(real: &[f64], signal_period: usize) -> Result<MacdOutput, TaError> {
    ensure_initialized("macdfix")?;
    if real.is_empty() {
        return Ok(MacdOutput::empty());
    }
    validate_period("macdfix", signal_period, 1)?;

    let len = real.len();
    let base_lookback = 25;
    let fast = ema_with_k(real, 12, 0.15);
    let slow = ema_with_k(real, 26, 0.075);
    let mut macd_line = nan_vec(len);
    for i in base_lookback..len {
        macd_line[i] = fast[i] - slow[i];
    }
    if len <= base_lookback {
        return Ok(assemble(len, macd_line, &[], base_lookback));
    }
    let signal_compact = ema_unchecked(&macd_line[base_lookback..], signal_period);
    Ok(assemble(len, macd_line, &signal_compact, base_lookback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::moving_averages::ema;
    use crate::utilities::lifecycle::initialize;

    fn series(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + (i as f64 * 0.35).sin() * 9.0 + i as f64 * 0.05)
            .collect()
    }

    #[test]
    fn test_macd_line_is_ema_difference() {
        initialize();
        let data = series(120);
        let out = macd(&data, 12, 26, 9).expect("macd");
        let fast = ema(&data, 12).expect("ema");
        let slow = ema(&data, 26).expect("ema");
        for i in 25..data.len() {
            assert!((out.macd[i] - (fast[i] - slow[i])).abs() < 1e-12);
        }
        assert!(out.macd[24].is_nan());
        assert!(out.signal[32].is_nan());
        assert!(out.signal[33].is_finite());
    }

    #[test]
    fn test_macd_hist_is_line_minus_signal() {
        initialize();
        let data = series(90);
        let out = macd(&data, 12, 26, 9).expect("macd");
        for i in 33..data.len() {
            assert!((out.hist[i] - (out.macd[i] - out.signal[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macd_swaps_misordered_periods() {
        initialize();
        let data = series(80);
        let a = macd(&data, 12, 26, 9).expect("macd");
        let b = macd(&data, 26, 12, 9).expect("macd");
        for i in 33..data.len() {
            assert_eq!(a.macd[i], b.macd[i]);
        }
    }

    #[test]
    fn test_macdext_ema_matches_macd() {
        initialize();
        let data = series(100);
        let a = macd(&data, 12, 26, 9).expect("macd");
        let b = macdext(
            &data,
            12,
            MaType::Ema,
            26,
            MaType::Ema,
            9,
            MaType::Ema,
        )
        .expect("macdext");
        for i in 33..data.len() {
            assert!((a.macd[i] - b.macd[i]).abs() < 1e-12);
            assert!((a.signal[i] - b.signal[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macdfix_lookback_and_constants() {
        initialize();
        let data = series(70);
        let out = macdfix(&data, 9).expect("macdfix");
        assert!(out.macd[24].is_nan());
        assert!(out.macd[25].is_finite());
        // Fixed constants differ from the 2/(n+1) EMAs.
        let plain = macd(&data, 12, 26, 9).expect("macd");
        assert!((out.macd[40] - plain.macd[40]).abs() > 1e-9);
    }

    #[test]
    fn test_macd_empty_input() {
        initialize();
        let out = macd(&[], 12, 26, 9).expect("empty ok");
        assert!(out.macd.is_empty() && out.signal.is_empty() && out.hist.is_empty());
    }
}
