//! # On Balance Volume (OBV)
//!
//! Running volume total, added on up closes and subtracted on down
//! closes; an unchanged close leaves it alone. Starts from the first
//! bar's volume. No lookback.
//!
//! ## Errors
//! - **LengthMismatch**, **NotInitialized**.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::check_same_length;
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn obv_lookback() -> usize {
    0
}

pub fn obv(real: &[f64], volume: &[f64]) -> Result<Vec<f64>, TaError> {
    ensure_initialized("obv")?;
    check_same_length("obv", &[real.len(), volume.len()])?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    let len = real.len();
    let mut out = Vec::with_capacity(len);
    let mut total = volume[0];
    out.push(total);
    for i in 1..len {
        if real[i] > real[i - 1] {
            total += volume[i];
        } else if real[i] < real[i - 1] {
            total -= volume[i];
        }
        out.push(total);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_obv_hand_computed() {
        initialize();
        let close = [10.0, 11.0, 11.0, 10.0];
        let volume = [100.0, 50.0, 25.0, 75.0];
        let out = obv(&close, &volume).expect("obv");
        assert_eq!(out, vec![100.0, 150.0, 150.0, 75.0]);
    }

    #[test]
    fn test_obv_empty_input() {
        initialize();
        assert!(obv(&[], &[]).expect("empty ok").is_empty());
    }
}
