//! # Parabolic SAR (SAR)
//!
//! Wilder's stop-and-reverse. The acceleration factor starts at
//! `acceleration` and grows by the same step on each new extreme point,
//! capped at `maximum`. The initial direction comes from a one-period
//! minus-DM over the first two bars, and the SAR is never allowed inside
//! the prior two bars' range.
//!
//! ## Parameters
//! - **acceleration**: AF step (default: 0.02).
//! - **maximum**: AF cap (default: 0.2).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidParameter** (zero, negative or
//!   non-finite factor), **NotInitialized**.
//!
//! ## Returns
//! - **`Ok(Vec<f64>)`** of input length; position 0 is NaN.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, nan_vec, validate_positive};
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn sar_lookback() -> usize {
    1
}

pub fn sar(
    high: &[f64],
    low: &[f64],
    acceleration: f64,
    maximum: f64,
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("sar")?;
    check_same_length("sar", &[high.len(), low.len()])?;
    if high.is_empty() {
        return Ok(Vec::new());
    }
    validate_positive("sar", "acceleration", acceleration)?;
    validate_positive("sar", "maximum", maximum)?;

    let len = high.len();
    let mut out = nan_vec(len);
    if len <= sar_lookback() {
        return Ok(out);
    }

    // AF is capped by the maximum from the start.
    let mut af = acceleration;
    if af > maximum {
        af = maximum;
    }
    let af_init = af;

    // Direction of the first bar pair, decided by one-period minus-DM.
    let diff_minus = low[0] - low[1];
    let diff_plus = high[1] - high[0];
    let minus_dm = if diff_minus > 0.0 && diff_minus > diff_plus {
        diff_minus
    } else {
        0.0
    };
    let mut is_long = minus_dm <= 0.0;

    let mut new_high = high[0];
    let mut new_low = low[0];
    let mut ep;
    let mut sar_value;
    if is_long {
        ep = high[1];
        sar_value = new_low;
    } else {
        ep = low[1];
        sar_value = new_high;
    }

    for today in 1..len {
        let prev_high = new_high;
        let prev_low = new_low;
        new_high = high[today];
        new_low = low[today];

        if is_long {
            if new_low <= sar_value {
                // Switch to short.
                is_long = false;
                sar_value = ep;
                if sar_value < prev_high {
                    sar_value = prev_high;
                }
                if sar_value < new_high {
                    sar_value = new_high;
                }
                out[today] = sar_value;
                af = af_init;
                ep = new_low;
                sar_value += af * (ep - sar_value);
                if sar_value < prev_high {
                    sar_value = prev_high;
                }
                if sar_value < new_high {
                    sar_value = new_high;
                }
            } else {
                out[today] = sar_value;
                if new_high > ep {
                    ep = new_high;
                    af += acceleration;
                    if af > maximum {
                        af = maximum;
                    }
                }
                sar_value += af * (ep - sar_value);
                if sar_value > prev_low {
                    sar_value = prev_low;
                }
                if sar_value > new_low {
                    sar_value = new_low;
                }
            }
        } else if new_high >= sar_value {
            // Switch to long.
            is_long = true;
            sar_value = ep;
            if sar_value > prev_low {
                sar_value = prev_low;
            }
            if sar_value > new_low {
                sar_value = new_low;
            }
            out[today] = sar_value;
            af = af_init;
            ep = new_high;
            sar_value += af * (ep - sar_value);
            if sar_value > prev_low {
                sar_value = prev_low;
            }
            if sar_value > new_low {
                sar_value = new_low;
            }
        } else {
            out[today] = sar_value;
            if new_low < ep {
                ep = new_low;
                af += acceleration;
                if af > maximum {
                    af = maximum;
                }
            }
            sar_value += af * (ep - sar_value);
            if sar_value < prev_high {
                sar_value = prev_high;
            }
            if sar_value < new_high {
                sar_value = new_high;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_sar_uptrend_stays_below_lows() {
        initialize();
        let high: Vec<f64> = (0..30).map(|i| 101.0 + i as f64).collect();
        let low: Vec<f64> = (0..30).map(|i| 99.0 + i as f64).collect();
        let out = sar(&high, &low, 0.02, 0.2).expect("sar");
        assert!(out[0].is_nan());
        for i in 1..30 {
            assert!(out[i] <= low[i], "index {i}: {} > {}", out[i], low[i]);
        }
    }

    #[test]
    fn test_sar_downtrend_stays_above_highs() {
        initialize();
        let high: Vec<f64> = (0..30).map(|i| 101.0 - i as f64).collect();
        let low: Vec<f64> = (0..30).map(|i| 99.0 - i as f64).collect();
        let out = sar(&high, &low, 0.02, 0.2).expect("sar");
        for i in 1..30 {
            assert!(out[i] >= high[i], "index {i}");
        }
    }

    #[test]
    fn test_sar_first_long_value_is_first_low() {
        initialize();
        // Rising pair starts long; the first emitted SAR is bar 0's low.
        let high = [10.0, 11.0, 12.0];
        let low = [9.0, 10.0, 11.0];
        let out = sar(&high, &low, 0.02, 0.2).expect("sar");
        assert_eq!(out[1], 9.0);
    }

    #[test]
    fn test_sar_rejects_non_positive_factors() {
        initialize();
        assert!(sar(&[1.0, 2.0], &[0.5, 1.5], -0.1, 0.2).is_err());
        assert!(sar(&[1.0, 2.0], &[0.5, 1.5], 0.0, 0.2).is_err());
        assert!(sar(&[1.0, 2.0], &[0.5, 1.5], 0.02, 0.0).is_err());
        assert!(sar(&[1.0, 2.0], &[0.5, 1.5], f64::NAN, 0.2).is_err());
    }

    #[test]
    fn test_sar_empty_input() {
        initialize();
        assert!(sar(&[], &[], 0.02, 0.2).expect("empty ok").is_empty());
    }
}
