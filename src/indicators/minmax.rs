//! # Window extremes (MIN / MAX / MINMAX / MINMAXINDEX / SUM)
//!
//! Rolling lowest/highest values and their absolute indices, plus the
//! rolling sum, all over the trailing window. For the index outputs the
//! tracked extremum is only rescanned once it leaves the window, so an
//! incoming bar that ties the live extremum takes it over while a rescan
//! settles on the earliest bar. Integer index outputs use 0 during the
//! warm-up prefix.
//!
//! ## Parameters
//! - **period**: window size (default: 30, minimum: 2).
//!
//! ## Errors
//! - **InvalidPeriod**, **NotInitialized**.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{nan_vec, validate_period};
use crate::utilities::lifecycle::ensure_initialized;
use crate::utilities::mono_deque::MonoDeque;

#[derive(Debug, Clone)]
pub struct MinMaxOutput {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct MinMaxIndexOutput {
    pub min_idx: Vec<i32>,
    pub max_idx: Vec<i32>,
}

#[inline]
pub fn minmax_lookback(period: usize) -> usize {
    period - 1
}

fn extreme_impl(
    name: &'static str,
    real: &[f64],
    period: usize,
    maximum: bool,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized(name)?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period(name, period, 2)?;

    let len = real.len();
    let lookback = minmax_lookback(period);
    let mut values = nan_vec(len);
    if len <= lookback {
        return Ok(values);
    }

    let mut dq = MonoDeque::with_capacity(period);
    for i in 0..len {
        if maximum {
            dq.push_max(i, real);
        } else {
            dq.push_min(i, real);
        }
        if i >= lookback {
            dq.expire(i + 1 - period);
            values[i] = real[dq.front()];
        }
    }
    Ok(values)
}

pub fn min(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    extreme_impl("min", real, period, false)
}

pub fn max(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    extreme_impl("max", real, period, true)
}

pub fn minmax(real: &[f64], period: usize) -> Result<MinMaxOutput, TaError> {
    let min = extreme_impl("minmax", real, period, false)?;
    let max = extreme_impl("minmax", real, period, true)?;
    Ok(MinMaxOutput { min, max })
}

pub fn minmaxindex(real: &[f64], period: usize) -> Result<MinMaxIndexOutput, TaError> {
    ensure_initialized("minmaxindex")?;
    if real.is_empty() {
        return Ok(MinMaxIndexOutput {
            min_idx: Vec::new(),
            max_idx: Vec::new(),
        });
    }
    validate_period("minmaxindex", period, 2)?;

    let len = real.len();
    let lookback = minmax_lookback(period);
    let mut min_idx = vec![0i32; len];
    let mut max_idx = vec![0i32; len];
    if len <= lookback {
        return Ok(MinMaxIndexOutput { min_idx, max_idx });
    }

    let mut low_at = 0;
    let mut lowest = real[0];
    let mut high_at = 0;
    let mut highest = real[0];
    for i in 1..=lookback {
        if real[i] < lowest {
            low_at = i;
            lowest = real[i];
        }
        if real[i] > highest {
            high_at = i;
            highest = real[i];
        }
    }
    min_idx[lookback] = low_at as i32;
    max_idx[lookback] = high_at as i32;

    // The tracked extremum is reused while it stays in the window; an
    // incoming bar that ties it takes over. Only when it expires does the
    // window get rescanned, strictly, settling on the earliest bar.
    for today in lookback + 1..len {
        let trailing = today + 1 - period;
        let v = real[today];

        if low_at < trailing {
            low_at = trailing;
            lowest = real[trailing];
            for i in trailing + 1..=today {
                if real[i] < lowest {
                    low_at = i;
                    lowest = real[i];
                }
            }
        } else if v <= lowest {
            low_at = today;
            lowest = v;
        }

        if high_at < trailing {
            high_at = trailing;
            highest = real[trailing];
            for i in trailing + 1..=today {
                if real[i] > highest {
                    high_at = i;
                    highest = real[i];
                }
            }
        } else if v >= highest {
            high_at = today;
            highest = v;
        }

        min_idx[today] = low_at as i32;
        max_idx[today] = high_at as i32;
    }
    Ok(MinMaxIndexOutput { min_idx, max_idx })
}

#[inline]
pub fn sum_lookback(period: usize) -> usize {
    period - 1
}

pub fn sum(real: &[f64], period: usize) -> Result<Vec<f64>, TaError> {
    ensure_initialized("sum")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("sum", period, 2)?;

    let len = real.len();
    let lookback = sum_lookback(period);
    let mut out = nan_vec(len);
    if len <= lookback {
        return Ok(out);
    }
    let mut total = 0.0;
    for &v in &real[..lookback] {
        total += v;
    }
    for i in lookback..len {
        total += real[i];
        out[i] = total;
        total -= real[i + 1 - period];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    fn bits(v: &[f64]) -> Vec<u64> {
        v.iter().map(|x| x.to_bits()).collect()
    }

    #[test]
    fn test_min_max_hand_computed() {
        initialize();
        let data = [3.0, 1.0, 4.0, 1.0, 5.0];
        let lo = min(&data, 3).expect("min");
        let hi = max(&data, 3).expect("max");
        assert!(lo[1].is_nan());
        assert_eq!(lo[2], 1.0);
        assert_eq!(hi[2], 4.0);
        assert_eq!(lo[4], 1.0);
        assert_eq!(hi[4], 5.0);
    }

    #[test]
    fn test_min_max_monotone_series() {
        // Descending input keeps every bar alive inside the window scan.
        let falling = [9.0, 8.0, 7.0, 6.0, 5.0];
        let rising = [1.0, 2.0, 3.0, 4.0, 5.0];
        initialize();
        let hi = max(&falling, 3).expect("max");
        assert_eq!(&hi[2..], &[9.0, 8.0, 7.0]);
        let lo = min(&rising, 3).expect("min");
        assert_eq!(&lo[2..], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_minmax_matches_min_and_max() {
        initialize();
        let data: Vec<f64> = (0..40).map(|i| ((i * 13) % 17) as f64).collect();
        let both = minmax(&data, 5).expect("minmax");
        assert_eq!(bits(&both.min), bits(&min(&data, 5).expect("min")));
        assert_eq!(bits(&both.max), bits(&max(&data, 5).expect("max")));
    }

    #[test]
    fn test_minmaxindex_tie_handling() {
        initialize();
        // An incoming bar that ties the live extremum takes the index over.
        let data = [3.0, 2.0, 5.0, 2.0];
        let out = minmaxindex(&data, 3).expect("minmaxindex");
        assert_eq!(out.min_idx, vec![0, 0, 1, 3]);
        assert_eq!(out.max_idx, vec![0, 0, 2, 2]);
        // A rescan after the extremum expires settles on the earliest bar.
        let flat = [2.0, 2.0, 2.0, 2.0];
        let out = minmaxindex(&flat, 3).expect("minmaxindex");
        assert_eq!(out.min_idx, vec![0, 0, 0, 1]);
        assert_eq!(out.max_idx, vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_minmaxindex_absolute_indices() {
        initialize();
        let data = [1.0, 9.0, 3.0, 0.0, 7.0];
        let out = minmaxindex(&data, 3).expect("minmaxindex");
        assert_eq!(out.max_idx[2], 1);
        assert_eq!(out.min_idx[3], 3);
        assert_eq!(out.max_idx[4], 4);
    }

    #[test]
    fn test_sum_hand_computed() {
        initialize();
        let data = [1.0, 2.0, 3.0, 4.0];
        let out = sum(&data, 2).expect("sum");
        assert!(out[0].is_nan());
        assert_eq!(&out[1..], &[3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_minmax_empty_input() {
        initialize();
        assert!(min(&[], 30).expect("empty ok").is_empty());
        assert!(sum(&[], 30).expect("empty ok").is_empty());
    }
}
